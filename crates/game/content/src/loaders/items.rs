//! Item catalog loader.

use std::path::Path;

use arena_core::Item;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<Item>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Item>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Item>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;
        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{ItemCategory, Rarity};

    #[test]
    fn categories_and_rarities_are_snake_case() {
        let items = ItemLoader::parse(
            r#"(
                items: [
                    (name: "Pugio", image: "img/pugio.png", price: 40, category: weapon, bonus: 5, rarity: common),
                    (name: "Nectar", image: "img/nectar.png", price: 90, category: consumable, bonus: 40, rarity: legendary),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(items[0].category, ItemCategory::Weapon);
        assert_eq!(items[1].rarity, Rarity::Legendary);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result = ItemLoader::parse(
            r#"(items: [(name: "Net", image: "", price: 1, category: trap, bonus: 1, rarity: common)])"#,
        );
        assert!(result.is_err());
    }
}
