use arena_core::{Rarity, Transaction};
use serde::{Deserialize, Serialize};

/// Market notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketEvent {
    /// A visit was rolled.
    Opened {
        visit: u64,
        featured: Rarity,
        discount_percent: u8,
        offers: usize,
    },
    /// A purchase or refund went through.
    Completed {
        transaction: Transaction,
        currency: u32,
    },
    /// A purchase or refund was refused; nothing changed.
    Refused { name: String, reason: String },
}

impl MarketEvent {
    pub fn message(&self) -> String {
        match self {
            Self::Opened {
                featured,
                discount_percent,
                ..
            } => format!("{discount_percent}% off every {featured} item today!"),
            Self::Completed {
                transaction,
                currency,
            } => format!("{} {currency} € left.", transaction.message()),
            Self::Refused { reason, .. } => reason.clone(),
        }
    }
}
