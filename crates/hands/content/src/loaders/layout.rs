//! Hand layout loader.
//!
//! Layouts describe which hands each actor kind starts with. A malformed
//! layout is a content bug and fails the load rather than producing an actor
//! with a partial hand set.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use hands_core::{HandLayout, HandsConfig};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Contents of `hands.toml`.
///
/// ```toml
/// [config]
/// default_slot_size = 3
///
/// [layouts.humanoid]
/// hands = ["left", "right"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutCatalog {
    #[serde(default)]
    pub config: HandsConfig,
    #[serde(default)]
    pub layouts: BTreeMap<String, HandLayout>,
}

impl LayoutCatalog {
    /// Returns the layout for an actor kind.
    pub fn layout(&self, kind: &str) -> LoadResult<&HandLayout> {
        self.layouts
            .get(kind)
            .ok_or_else(|| anyhow::anyhow!("No hand layout defined for actor kind '{}'", kind))
    }

    /// Actor kinds with a layout, in sorted order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.layouts.keys().map(String::as_str)
    }

    fn validate(&self) -> LoadResult<()> {
        for (kind, layout) in &self.layouts {
            if layout.hands.len() > HandsConfig::MAX_HANDS {
                anyhow::bail!(
                    "Layout '{}' has {} hands (max: {})",
                    kind,
                    layout.hands.len(),
                    HandsConfig::MAX_HANDS
                );
            }

            let mut seen = HashSet::new();
            for hand in &layout.hands {
                if hand.as_str().is_empty() {
                    anyhow::bail!("Layout '{}' contains an empty hand name", kind);
                }
                if !seen.insert(hand.as_str()) {
                    anyhow::bail!("Layout '{}' lists hand '{}' more than once", kind, hand);
                }
            }
        }
        Ok(())
    }
}

/// Loader for hand layouts from TOML files.
pub struct LayoutLoader;

impl LayoutLoader {
    /// Load and validate layouts from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing a LayoutCatalog
    pub fn load(path: &Path) -> LoadResult<LayoutCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate layouts from TOML text.
    pub fn parse(content: &str) -> LoadResult<LayoutCatalog> {
        let catalog: LayoutCatalog = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse hand layout TOML: {}", e))?;
        catalog.validate()?;

        tracing::debug!("Loaded {} hand layouts", catalog.layouts.len());
        Ok(catalog)
    }
}
