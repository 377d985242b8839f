//! Victory rewards.

use crate::config::ArenaConfig;
use crate::state::{Adversary, AdversaryKind};

/// Score and currency granted for defeating one adversary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VictoryReward {
    pub score: u32,
    pub currency: u32,
}

impl VictoryReward {
    /// Computes the reward for beating `adversary`.
    ///
    /// The base score is `base_victory_score + attack`. A boss multiplies it
    /// by its score multiplier, rounding down, and pays the boss bounty
    /// instead of the regular one.
    pub fn for_adversary(adversary: &Adversary, config: &ArenaConfig) -> Self {
        let base = config.base_victory_score.saturating_add(adversary.attack);
        match adversary.kind {
            AdversaryKind::Regular => Self {
                score: base,
                currency: config.regular_bounty,
            },
            AdversaryKind::Boss { score_multiplier } => Self {
                // `as` saturates on overflow and maps NaN to 0.
                score: (base as f64 * score_multiplier).floor() as u32,
                currency: config.boss_bounty,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AssetRef;

    #[test]
    fn regular_reward_uses_base_score() {
        let lion = Adversary::regular("Lion", AssetRef::default(), 80, 20);
        let reward = VictoryReward::for_adversary(&lion, &ArenaConfig::default());
        assert_eq!(
            reward,
            VictoryReward {
                score: 120,
                currency: 5
            }
        );
    }

    #[test]
    fn boss_reward_is_multiplied_and_floored() {
        let boss = Adversary::boss("Centurion", AssetRef::default(), 150, 30, 2.0);
        let reward = VictoryReward::for_adversary(&boss, &ArenaConfig::default());
        assert_eq!(reward.score, 260);
        assert_eq!(reward.currency, 10);

        let boss = Adversary::boss("Minotaur", AssetRef::default(), 150, 25, 1.2);
        // 125 * 1.2 = 150.0
        assert_eq!(
            VictoryReward::for_adversary(&boss, &ArenaConfig::default()).score,
            150
        );

        let boss = Adversary::boss("Hydra", AssetRef::default(), 150, 33, 1.5);
        // 133 * 1.5 = 199.5
        assert_eq!(
            VictoryReward::for_adversary(&boss, &ArenaConfig::default()).score,
            199
        );
    }
}
