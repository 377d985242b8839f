//! Run orchestration errors.

use crate::engine::BattleError;
use crate::env::SetupError;
use crate::error::{ErrorSeverity, GameError};
use crate::market::TransactionError;

use super::RunPhase;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RunError {
    /// The operation is not valid in the current phase.
    #[error("cannot {operation} while the run is {phase}")]
    WrongPhase {
        operation: &'static str,
        phase: RunPhase,
    },

    /// Shopping is only possible before the first encounter.
    #[error("the market is closed while the run is {phase}")]
    MarketClosed { phase: RunPhase },

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error(transparent)]
    Battle(#[from] BattleError),
}

impl GameError for RunError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::WrongPhase { .. } | Self::MarketClosed { .. } => ErrorSeverity::Validation,
            Self::Setup(error) => error.severity(),
            Self::Transaction(error) => error.severity(),
            Self::Battle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::WrongPhase { .. } => "RUN_WRONG_PHASE",
            Self::MarketClosed { .. } => "RUN_MARKET_CLOSED",
            Self::Setup(error) => error.error_code(),
            Self::Transaction(error) => error.error_code(),
            Self::Battle(error) => error.error_code(),
        }
    }
}
