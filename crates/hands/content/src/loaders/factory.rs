//! Content factory for loading hand data from a data directory.

use std::path::{Path, PathBuf};

use hands_core::{HandLayout, HandSet, ItemDefinition, MemoryInventory};

use crate::loaders::{ItemLoader, LayoutCatalog, LayoutLoader, LoadResult};

/// Content factory that loads all hand content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── hands.toml
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load hand layouts and configuration from `hands.toml`.
    pub fn load_layouts(&self) -> LoadResult<LayoutCatalog> {
        let path = self.data_dir.join("hands.toml");
        LayoutLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Loads all content and builds an inventory plus the hands of one actor kind.
    ///
    /// Layout errors abort: an actor is never created with a partial hand set.
    pub fn build_actor(&self, kind: &str) -> LoadResult<(HandSet, MemoryInventory)> {
        let catalog = self.load_layouts()?;
        let layout: &HandLayout = catalog.layout(kind)?;
        let mut inventory = MemoryInventory::with_items(&catalog.config, self.load_items()?);

        let hands = HandSet::from_layout(layout, &mut inventory).map_err(|e| {
            anyhow::anyhow!("Failed to initialize hands for actor kind '{}': {}", kind, e)
        })?;
        tracing::info!(
            "Initialized '{}' with {} hands from {}",
            kind,
            hands.len(),
            self.data_dir.display()
        );
        Ok((hands, inventory))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
