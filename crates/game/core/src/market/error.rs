//! Market transaction errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::InventoryError;

/// Reasons a purchase or refund is refused. No state changes on error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransactionError {
    /// The player cannot afford the item.
    #[error("cannot afford '{name}': costs {price}, {available} available")]
    InsufficientFunds {
        name: String,
        price: u32,
        available: u32,
    },

    /// The current visit does not offer an item with this name.
    #[error("'{name}' is not on offer")]
    NotOffered { name: String },

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl GameError for TransactionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientFunds { .. } => ErrorSeverity::Recoverable,
            Self::NotOffered { .. } => ErrorSeverity::Validation,
            Self::Inventory(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientFunds { .. } => "MARKET_INSUFFICIENT_FUNDS",
            Self::NotOffered { .. } => "MARKET_NOT_OFFERED",
            Self::Inventory(error) => error.error_code(),
        }
    }
}
