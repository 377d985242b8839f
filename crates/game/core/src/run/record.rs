//! Run results and rank tiers.

use crate::state::Player;

/// What a finished run hands to the ranking store.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultRecord {
    pub gladiator_name: String,
    pub battle_score: u32,
    pub remaining_currency: u32,
    /// `battle_score + remaining_currency`.
    pub total_score: u32,
}

impl ResultRecord {
    pub fn from_player(player: &Player) -> Self {
        let battle_score = player.score();
        let remaining_currency = player.currency();
        Self {
            gladiator_name: player.name.clone(),
            battle_score,
            remaining_currency,
            total_score: battle_score.saturating_add(remaining_currency),
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Rank {
    Veteran,
    Novice,
}

impl Rank {
    /// Veteran at or above `threshold`, novice below it.
    pub fn for_score(total_score: u32, threshold: u32) -> Self {
        if total_score >= threshold {
            Self::Veteran
        } else {
            Self::Novice
        }
    }

    /// Headline for the results screen.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Veteran => "Veteran of the Arena!",
            Self::Novice => "Novice... keep training.",
        }
    }
}

/// How the run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RunOutcome {
    /// Every adversary on the roster was defeated.
    Champion,
    /// The player fell during an encounter.
    Fallen,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub record: ResultRecord,
    pub rank: Rank,
    pub outcome: RunOutcome,
    /// Encounters won before the run ended.
    pub victories: usize,
}
