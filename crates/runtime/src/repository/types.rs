use arena_core::{Rank, Ranked, ResultRecord, RunSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub record: ResultRecord,
    pub rank: Rank,
    pub recorded_at: DateTime<Utc>,
}

impl RankingEntry {
    pub fn new(record: ResultRecord, rank: Rank, recorded_at: DateTime<Utc>) -> Self {
        Self {
            record,
            rank,
            recorded_at,
        }
    }

    /// Entry for a finished run, stamped with the current time.
    pub fn from_summary(summary: &RunSummary) -> Self {
        Self::new(summary.record.clone(), summary.rank, Utc::now())
    }
}

impl Ranked for RankingEntry {
    fn total_score(&self) -> u32 {
        self.record.total_score
    }
}
