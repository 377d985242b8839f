//! Setup validation errors.

use crate::error::{ErrorSeverity, GameError};

/// Reasons an [`ArenaSetup`](super::ArenaSetup) is refused.
///
/// Every variant is fatal: the run does not start.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetupError {
    #[error("gladiator name '{name}' must start with an uppercase letter and hold 1-20 letters or spaces")]
    InvalidGladiatorName { name: String },

    #[error("player must start with more than 0 HP")]
    PlayerWithoutHitPoints,

    #[error("the roster has no adversaries")]
    EmptyRoster,

    #[error("adversary '{name}' must start with more than 0 HP")]
    AdversaryWithoutHitPoints { name: String },

    #[error("boss '{name}' has an invalid score multiplier {multiplier} (must be finite and > 0)")]
    InvalidMultiplier { name: String, multiplier: f64 },

    #[error("catalog lists '{name}' more than once")]
    DuplicateCatalogItem { name: String },

    #[error("discount range {min}%..={max}% is invalid (min must not exceed max, max must not exceed 100)")]
    InvalidDiscountRange { min: u8, max: u8 },
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidGladiatorName { .. } => "SETUP_INVALID_GLADIATOR_NAME",
            Self::PlayerWithoutHitPoints => "SETUP_PLAYER_WITHOUT_HP",
            Self::EmptyRoster => "SETUP_EMPTY_ROSTER",
            Self::AdversaryWithoutHitPoints { .. } => "SETUP_ADVERSARY_WITHOUT_HP",
            Self::InvalidMultiplier { .. } => "SETUP_INVALID_MULTIPLIER",
            Self::DuplicateCatalogItem { .. } => "SETUP_DUPLICATE_CATALOG_ITEM",
            Self::InvalidDiscountRange { .. } => "SETUP_INVALID_DISCOUNT_RANGE",
        }
    }
}
