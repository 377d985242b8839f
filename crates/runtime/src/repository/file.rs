//! File-based RankingRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use arena_core::RankingBoard;

use super::error::{RepositoryError, Result};
use super::{RankingEntry, RankingRepository};

/// Leaderboard stored as one JSON array.
///
/// Every append rewrites the file through a temp file and an atomic rename, so
/// a crash never leaves a half-written board behind.
pub struct FileRankingRepository {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileRankingRepository {
    /// Create a repository at `path`, creating parent directories as needed.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Vec<RankingEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.path)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes).map_err(|e| RepositoryError::CorruptedData {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn write_entries(&self, entries: &[RankingEntry]) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(entries)?;

        // Write to temp file
        fs::write(&temp_path, bytes)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl RankingRepository for FileRankingRepository {
    fn append(&self, entry: RankingEntry) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let mut entries = self.read_entries()?;
        entries.push(entry);
        self.write_entries(&entries)?;

        tracing::debug!(
            "Saved ranking entry #{} to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> Result<RankingBoard<RankingEntry>> {
        let entries = self.read_entries()?;
        tracing::debug!(
            "Loaded {} ranking entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(RankingBoard::from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{Rank, ResultRecord};
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn entry(name: &str, total_score: u32) -> RankingEntry {
        RankingEntry::new(
            ResultRecord {
                gladiator_name: name.into(),
                battle_score: total_score.saturating_sub(100),
                remaining_currency: total_score.min(100),
                total_score,
            },
            Rank::for_score(total_score, 500),
            Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn missing_file_is_an_empty_board() {
        let dir = tempdir().unwrap();
        let repo = FileRankingRepository::new(dir.path().join("ranking.json")).unwrap();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn entries_survive_reopening() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("ranking.json");

        let repo = FileRankingRepository::new(&path).unwrap();
        repo.append(entry("Crixus", 300)).unwrap();
        repo.append(entry("Spartacus", 650)).unwrap();
        drop(repo);

        let reopened = FileRankingRepository::new(&path).unwrap();
        let board = reopened.load().unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board.entries()[0], entry("Crixus", 300));
        assert_eq!(reopened.top(1).unwrap()[0].record.gladiator_name, "Spartacus");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn corrupted_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ranking.json");
        fs::write(&path, "{not json").unwrap();

        let repo = FileRankingRepository::new(&path).unwrap();
        assert!(matches!(
            repo.load(),
            Err(RepositoryError::CorruptedData { .. })
        ));
    }
}
