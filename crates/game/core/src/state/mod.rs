//! Arena state representation.
//!
//! Combatants, items and the inventory live here. Runtime layers read this
//! state freely but mutate it only through the market, battle and run APIs.
pub mod adversary;
pub mod character;
pub mod error;
pub mod inventory;
pub mod item;
pub mod player;

pub use adversary::{Adversary, AdversaryKind, AdversaryProfile};
pub use character::{AssetRef, Combatant, Vitals};
pub use error::InventoryError;
pub use inventory::Inventory;
pub use item::{Item, ItemCategory, Rarity};
pub use player::{Player, PlayerSheet};
