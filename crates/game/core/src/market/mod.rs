//! Market engine.
//!
//! The catalog is immutable for the whole run. Each visit rolls a featured
//! rarity and a discount percent once, and every catalog item of that rarity
//! is offered as a discounted copy for the duration of the visit.
mod error;
mod transaction;

pub use error::TransactionError;
pub use transaction::{Transaction, purchase_or_refund};

use crate::config::ArenaConfig;
use crate::env::{RngOracle, compute_seed, roll};
use crate::state::{Item, Player, Rarity};

/// The immutable item catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Market {
    catalog: Vec<Item>,
}

impl Market {
    pub fn new(catalog: Vec<Item>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &[Item] {
        &self.catalog
    }

    /// Catalog entries of one rarity, in catalog order.
    pub fn filter_by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &Item> {
        self.catalog.iter().filter(move |item| item.rarity == rarity)
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        self.catalog.iter().find(|item| item.name == name)
    }

    /// Opens a visit with rolls derived from `seed` and the visit number.
    ///
    /// The featured rarity is uniform over all rarities. The discount is
    /// uniform over `discount_min_percent..=discount_max_percent`.
    pub fn open_visit(
        &self,
        rng: &impl RngOracle,
        seed: u64,
        visit: u64,
        config: &ArenaConfig,
    ) -> MarketVisit {
        let last = Rarity::ALL.len() as u32 - 1;
        let index = rng.range(compute_seed(seed, visit, roll::MARKET_RARITY), 0, last);
        let featured = Rarity::ALL[index as usize];

        let percent = rng.range(
            compute_seed(seed, visit, roll::MARKET_DISCOUNT),
            u32::from(config.discount_min_percent),
            u32::from(config.discount_max_percent),
        );
        // The range is bounded by two u8 values.
        let percent = u8::try_from(percent).unwrap_or(config.discount_max_percent);

        self.visit_with(featured, percent)
    }

    /// Opens a visit with fixed rolls.
    pub fn visit_with(&self, featured: Rarity, discount_percent: u8) -> MarketVisit {
        let offers = self
            .catalog
            .iter()
            .map(|item| {
                if item.rarity == featured {
                    item.discounted(discount_percent)
                } else {
                    item.clone()
                }
            })
            .collect();

        MarketVisit {
            featured,
            discount_percent,
            offers,
        }
    }
}

/// One market visit: the whole catalog, featured items at their discounted price.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketVisit {
    pub featured: Rarity,
    pub discount_percent: u8,
    offers: Vec<Item>,
}

impl MarketVisit {
    pub fn offers(&self) -> &[Item] {
        &self.offers
    }

    pub fn offer(&self, name: &str) -> Option<&Item> {
        self.offers.iter().find(|item| item.name == name)
    }

    pub fn is_discounted(&self, item: &Item) -> bool {
        item.rarity == self.featured && self.discount_percent > 0
    }

    /// Buys or returns the offer named `name` at this visit's price.
    pub fn toggle(&self, player: &mut Player, name: &str) -> Result<Transaction, TransactionError> {
        let item = self
            .offer(name)
            .ok_or_else(|| TransactionError::NotOffered { name: name.into() })?;
        purchase_or_refund(player, item)
    }

    /// Banner line announcing the featured rarity.
    pub fn banner(&self) -> String {
        format!(
            "{}% off every {} item today!",
            self.discount_percent, self.featured
        )
    }
}
