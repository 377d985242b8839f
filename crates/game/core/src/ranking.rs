//! Leaderboard ordering.
//!
//! The board only orders entries. Storing them is the runtime's job.

use crate::run::ResultRecord;

/// Anything that can be placed on the leaderboard.
pub trait Ranked {
    fn total_score(&self) -> u32;
}

impl Ranked for ResultRecord {
    fn total_score(&self) -> u32 {
        self.total_score
    }
}

/// Entries in insertion order, listed best first on request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RankingBoard<E = ResultRecord> {
    entries: Vec<E>,
}

impl<E> Default for RankingBoard<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E: Ranked> RankingBoard<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<E>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: E) {
        self.entries.push(entry);
    }

    /// Entries sorted by total score, highest first. Ties keep insertion order.
    pub fn sorted(&self) -> Vec<&E> {
        let mut sorted: Vec<&E> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.total_score().cmp(&a.total_score()));
        sorted
    }

    pub fn top(&self, n: usize) -> Vec<&E> {
        let mut sorted = self.sorted();
        sorted.truncate(n);
        sorted
    }

    /// One-based position `total_score` would take, after existing ties.
    pub fn position_of(&self, total_score: u32) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.total_score() >= total_score)
            .count()
            + 1
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<E> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, total_score: u32) -> ResultRecord {
        ResultRecord {
            gladiator_name: name.into(),
            battle_score: total_score,
            remaining_currency: 0,
            total_score,
        }
    }

    #[test]
    fn sorted_descending_and_stable() {
        let mut board = RankingBoard::new();
        board.push(record("Crixus", 300));
        board.push(record("Spartacus", 900));
        board.push(record("Gannicus", 300));
        board.push(record("Oenomaus", 450));

        let names: Vec<&str> = board
            .sorted()
            .into_iter()
            .map(|r| r.gladiator_name.as_str())
            .collect();
        assert_eq!(names, ["Spartacus", "Oenomaus", "Crixus", "Gannicus"]);
        // Insertion order is preserved underneath.
        assert_eq!(board.entries()[0].gladiator_name, "Crixus");
    }

    #[test]
    fn top_truncates() {
        let board =
            RankingBoard::from_entries(vec![record("A", 1), record("B", 2), record("C", 3)]);
        assert_eq!(board.top(2).len(), 2);
        assert_eq!(board.top(10).len(), 3);
        assert_eq!(board.top(1)[0].gladiator_name, "C");
    }

    #[test]
    fn position_counts_ties_ahead() {
        let board = RankingBoard::from_entries(vec![record("A", 500), record("B", 300)]);
        assert_eq!(board.position_of(600), 1);
        assert_eq!(board.position_of(500), 2);
        assert_eq!(board.position_of(100), 3);
    }
}
