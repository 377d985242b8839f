//! In-memory ranking repository for tests and ephemeral sessions.

use std::sync::RwLock;

use arena_core::RankingBoard;

use super::error::{RepositoryError, Result};
use super::{RankingEntry, RankingRepository};

#[derive(Default)]
pub struct InMemoryRankingRepository {
    entries: RwLock<Vec<RankingEntry>>,
}

impl InMemoryRankingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RankingRepository for InMemoryRankingRepository {
    fn append(&self, entry: RankingEntry) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        entries.push(entry);
        Ok(())
    }

    fn load(&self) -> Result<RankingBoard<RankingEntry>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(RankingBoard::from_entries(entries.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{Rank, ResultRecord};
    use chrono::Utc;

    fn entry(name: &str, total_score: u32) -> RankingEntry {
        RankingEntry::new(
            ResultRecord {
                gladiator_name: name.into(),
                battle_score: total_score,
                remaining_currency: 0,
                total_score,
            },
            Rank::for_score(total_score, 500),
            Utc::now(),
        )
    }

    #[test]
    fn top_is_sorted_descending() {
        let repo = InMemoryRankingRepository::new();
        repo.append(entry("Crixus", 200)).unwrap();
        repo.append(entry("Spartacus", 700)).unwrap();
        repo.append(entry("Gannicus", 450)).unwrap();

        let top = repo.top(2).unwrap();
        assert_eq!(top[0].record.gladiator_name, "Spartacus");
        assert_eq!(top[1].record.gladiator_name, "Gannicus");
        assert_eq!(repo.load().unwrap().len(), 3);
    }
}
