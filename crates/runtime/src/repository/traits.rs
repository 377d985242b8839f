//! Repository contracts for the leaderboard.

use arena_core::RankingBoard;

use super::RankingEntry;
use super::error::Result;

/// Append-only store of finished runs.
pub trait RankingRepository: Send + Sync {
    /// Append an entry to the leaderboard.
    fn append(&self, entry: RankingEntry) -> Result<()>;

    /// Load every stored entry, in insertion order.
    fn load(&self) -> Result<RankingBoard<RankingEntry>>;

    /// Best `n` entries, highest total score first.
    fn top(&self, n: usize) -> Result<Vec<RankingEntry>> {
        let board = self.load()?;
        Ok(board.top(n).into_iter().cloned().collect())
    }
}
