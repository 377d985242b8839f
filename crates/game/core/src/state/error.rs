//! Player state errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised by inventory mutations.
///
/// Both variants leave the player untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    /// An item with this name is already held.
    #[error("'{name}' is already in the inventory")]
    AlreadyOwned { name: String },

    /// No held item matches this name.
    #[error("'{name}' is not in the inventory")]
    ItemNotFound { name: String },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyOwned { .. } => "INVENTORY_ALREADY_OWNED",
            Self::ItemNotFound { .. } => "INVENTORY_ITEM_NOT_FOUND",
        }
    }
}
