//! Enemy roster loader.

use std::path::Path;

use arena_core::AdversaryTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Roster structure for RON files. Encounter order is file order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    pub adversaries: Vec<AdversaryTemplate>,
}

/// Loader for the enemy roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<AdversaryTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<AdversaryTemplate>> {
        let roster: RosterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        Ok(roster.adversaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boss_flags_and_multiplier_are_optional() {
        let roster = RosterLoader::parse(
            r#"(
                adversaries: [
                    (name: "Wolf", image: "img/wolf.png", hit_points: 40, attack: 8),
                    (name: "Hydra", image: "img/hydra.png", hit_points: 200, attack: 35, is_boss: true),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(roster.len(), 2);
        assert!(!roster[0].is_boss);
        assert!(roster[1].is_boss);
        assert_eq!(roster[1].multiplier, None);
        assert_eq!(roster[1].instantiate().score_multiplier(), Some(1.2));
    }
}
