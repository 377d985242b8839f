//! Run-level notifications.

use crate::combat::VictoryReward;
use crate::state::AdversaryProfile;

use super::record::RunSummary;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunEvent {
    RunStarted {
        gladiator: String,
        encounters: usize,
    },
    EncounterStarted {
        index: usize,
        adversary: AdversaryProfile,
    },
    EncounterWon {
        index: usize,
        adversary: String,
        is_boss: bool,
        reward: VictoryReward,
    },
    EncounterLost {
        index: usize,
        adversary: String,
    },
    /// Player HP was restored after a victory.
    Healed { hit_points: u32 },
    RunFinished { summary: RunSummary },
}

impl RunEvent {
    pub fn message(&self) -> String {
        match self {
            Self::RunStarted {
                gladiator,
                encounters,
            } => format!("{gladiator} enters the arena to face {encounters} opponents."),
            Self::EncounterStarted { index, adversary } => {
                format!("Encounter {}: {}", index + 1, adversary.name)
            }
            Self::EncounterWon {
                is_boss: true,
                reward,
                ..
            } => format!(
                "YOU DEFEATED THE BOSS! +{} points, +{} coins.",
                reward.score, reward.currency
            ),
            Self::EncounterWon { reward, .. } => format!(
                "Victory! +{} points, +{} coins.",
                reward.score, reward.currency
            ),
            Self::EncounterLost { adversary, .. } => format!("{adversary} wins the encounter."),
            Self::Healed { hit_points } => format!("Your wounds are tended: {hit_points} HP."),
            Self::RunFinished { summary } => format!(
                "{} Total score: {}",
                summary.rank.title(),
                summary.record.total_score
            ),
        }
    }
}
