//! Market items.
//!
//! An [`Item`] is an immutable value: discounts produce a fresh copy and the
//! catalog entry it came from is never touched.

use super::character::AssetRef;

/// What an item boosts while it sits in the inventory.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    /// Adds its bonus to total attack.
    Weapon,
    /// Adds its bonus to total defense.
    Armor,
    /// Adds its bonus to current and maximum HP while held.
    Consumable,
}

/// Item tier, used to pick which items a market visit discounts.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    /// All tiers, in the order a market roll indexes them.
    pub const ALL: [Rarity; 3] = [Rarity::Common, Rarity::Rare, Rarity::Legendary];
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub image: AssetRef,
    pub price: u32,
    pub category: ItemCategory,
    pub bonus: u32,
    pub rarity: Rarity,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        image: AssetRef,
        price: u32,
        category: ItemCategory,
        bonus: u32,
        rarity: Rarity,
    ) -> Self {
        Self {
            name: name.into(),
            image,
            price,
            category,
            bonus,
            rarity,
        }
    }

    /// Returns a copy priced at `floor(price * (1 - percent / 100))`.
    ///
    /// Percentages above 100 are treated as 100. `self` is left untouched.
    #[must_use]
    pub fn discounted(&self, percent: u8) -> Item {
        let percent = u64::from(percent.min(100));
        let price = (u64::from(self.price) * (100 - percent)) / 100;
        Item {
            price: price as u32,
            ..self.clone()
        }
    }

    /// Shop label for the price, e.g. `"150 €"`.
    pub fn price_label(&self) -> String {
        format!("{} €", self.price)
    }

    pub fn is_consumable(&self) -> bool {
        self.category == ItemCategory::Consumable
    }
}
