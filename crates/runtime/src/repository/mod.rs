//! Repository layer for finished runs.
//!
//! Repositories store the leaderboard. Everything a run needs before it ends
//! lives in the core orchestrator and is discarded with it.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::RepositoryError;
pub use file::FileRankingRepository;
pub use memory::InMemoryRankingRepository;
pub use traits::RankingRepository;
pub use types::RankingEntry;
