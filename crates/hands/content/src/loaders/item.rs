//! Item catalog loader.

use std::path::Path;

use hands_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemCatalog
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = std::collections::HashSet::new();
        for item in &catalog.items {
            if !seen.insert(item.handle) {
                anyhow::bail!("Item {} is defined more than once", item.handle);
            }
        }

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hands_core::ItemHandle;

    #[test]
    fn parses_items_with_default_anchoring() {
        let items = ItemLoader::parse(
            r#"(
                items: [
                    (handle: ItemHandle(1), size: 2),
                    (handle: ItemHandle(2), size: 1, anchored: true),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], ItemDefinition::new(ItemHandle(1), 2));
        assert!(items[1].anchored);
    }

    #[test]
    fn rejects_duplicate_item_handles() {
        let err = ItemLoader::parse(
            r#"(items: [(handle: ItemHandle(1), size: 2), (handle: ItemHandle(1), size: 1)])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }
}
