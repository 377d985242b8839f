//! Battle start errors.

use crate::error::{ErrorSeverity, GameError};

/// Reasons a battle cannot start.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    /// One side is already at 0 HP.
    #[error("{name} cannot fight with 0 HP")]
    CombatantDown { name: String },

    /// Neither side can damage the other, so the loop would never end.
    #[error("neither {player} nor {adversary} can deal damage")]
    Stalemate { player: String, adversary: String },
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CombatantDown { .. } => ErrorSeverity::Internal,
            Self::Stalemate { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CombatantDown { .. } => "BATTLE_COMBATANT_DOWN",
            Self::Stalemate { .. } => "BATTLE_STALEMATE",
        }
    }
}
