//! The player aggregate.
//!
//! Attack and defense totals are never cached: they are recomputed from the
//! base stats and the current inventory on every call.

use super::character::{AssetRef, Combatant, Vitals};
use super::error::InventoryError;
use super::inventory::Inventory;
use super::item::{Item, ItemCategory};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub name: String,
    pub image: AssetRef,
    vitals: Vitals,
    pub base_attack: u32,
    pub base_defense: u32,
    currency: u32,
    score: u32,
    inventory: Inventory,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        image: AssetRef,
        hit_points: u32,
        base_attack: u32,
        base_defense: u32,
        currency: u32,
    ) -> Self {
        Self {
            name: name.into(),
            image,
            vitals: Vitals::full(hit_points),
            base_attack,
            base_defense,
            currency,
            score: 0,
            inventory: Inventory::empty(),
        }
    }

    /// Base attack plus the bonus of every held weapon, saturating at `u32::MAX`.
    pub fn total_attack(&self) -> u32 {
        self.base_attack
            .saturating_add(self.inventory.bonus_total(ItemCategory::Weapon))
    }

    /// Base defense plus the bonus of every held armor piece, saturating at `u32::MAX`.
    pub fn total_defense(&self) -> u32 {
        self.base_defense
            .saturating_add(self.inventory.bonus_total(ItemCategory::Armor))
    }

    /// Adds an item to the inventory.
    ///
    /// A consumable raises current and maximum HP by its bonus for as long as
    /// it is held.
    pub fn add_item(&mut self, item: Item) -> Result<(), InventoryError> {
        let consumable_bonus = item.is_consumable().then_some(item.bonus);
        self.inventory.insert(item)?;
        if let Some(bonus) = consumable_bonus {
            self.vitals.raise(bonus);
        }
        Ok(())
    }

    /// Removes the item with the given name, undoing a consumable's HP shift.
    ///
    /// Returns `ItemNotFound` without touching any state if nothing matches.
    pub fn remove_item(&mut self, name: &str) -> Result<Item, InventoryError> {
        let item = self.inventory.remove(name)?;
        if item.is_consumable() {
            self.vitals.lower(item.bonus);
        }
        Ok(item)
    }

    pub fn owns(&self, name: &str) -> bool {
        self.inventory.contains(name)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn add_score(&mut self, amount: u32) {
        self.score = self.score.saturating_add(amount);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn currency(&self) -> u32 {
        self.currency
    }

    pub fn add_currency(&mut self, amount: u32) {
        self.currency = self.currency.saturating_add(amount);
    }

    /// Deducts `amount` if the player can afford it. Returns false otherwise.
    pub(crate) fn try_spend(&mut self, amount: u32) -> bool {
        match self.currency.checked_sub(amount) {
            Some(rest) => {
                self.currency = rest;
                true
            }
            None => false,
        }
    }

    pub fn restore_to_full(&mut self) {
        self.vitals.restore();
    }

    /// Snapshot of the derived numbers, for summary screens.
    pub fn sheet(&self) -> PlayerSheet {
        PlayerSheet {
            name: self.name.clone(),
            hit_points: self.vitals.current,
            max_hit_points: self.vitals.maximum,
            total_attack: self.total_attack(),
            total_defense: self.total_defense(),
            currency: self.currency,
            score: self.score,
            inventory: self.inventory.names(),
        }
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn image(&self) -> &AssetRef {
        &self.image
    }

    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

/// Read-only view of a player's derived stats.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSheet {
    pub name: String,
    pub hit_points: u32,
    pub max_hit_points: u32,
    pub total_attack: u32,
    pub total_defense: u32,
    pub currency: u32,
    pub score: u32,
    pub inventory: Vec<String>,
}
