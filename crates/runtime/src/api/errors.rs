//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the core rules, repositories and content loading so
//! clients can bubble them up with consistent context.
use arena_core::{ErrorSeverity, GameError, RunError, SetupError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid arena setup: {0}")]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("failed to load arena content: {0:#}")]
    Content(anyhow::Error),

    #[error("the run has not finished yet")]
    RunNotFinished,
}

impl RuntimeError {
    /// Severity of the underlying core error, if any.
    pub fn severity(&self) -> Option<ErrorSeverity> {
        match self {
            Self::Setup(error) => Some(error.severity()),
            Self::Run(error) => Some(error.severity()),
            Self::Repository(_) | Self::Content(_) | Self::RunNotFinished => None,
        }
    }
}
