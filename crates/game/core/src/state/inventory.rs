//! Player inventory.
//!
//! Items are kept in purchase order and are unique by name.

use super::error::InventoryError;
use super::item::{Item, ItemCategory};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// Appends an item; a second item with the same name is refused.
    pub fn insert(&mut self, item: Item) -> Result<(), InventoryError> {
        if self.contains(&item.name) {
            return Err(InventoryError::AlreadyOwned { name: item.name });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes the first item with the given name, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> Result<Item, InventoryError> {
        let index = self
            .position(name)
            .ok_or_else(|| InventoryError::ItemNotFound {
                name: name.to_owned(),
            })?;
        Ok(self.items.remove(index))
    }

    /// Sum of bonuses of every held item of `category`.
    pub fn bonus_total(&self, category: ItemCategory) -> u32 {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .map(|item| item.bonus)
            .fold(0, u32::saturating_add)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
