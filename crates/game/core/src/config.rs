//! Tunables shared by the market, rewards and ranking.

/// Arena tunables: reward sizes, rank cutoff and market discount range.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Total score (battle score + remaining gold) needed for the veteran rank.
    /// The comparison is inclusive.
    pub veteran_threshold: u32,
    /// Score granted for any victory before the adversary's attack is added.
    pub base_victory_score: u32,
    /// Gold granted for defeating a regular adversary.
    pub regular_bounty: u32,
    /// Gold granted for defeating a boss.
    pub boss_bounty: u32,
    /// Lowest discount percent a market visit may roll (inclusive).
    pub discount_min_percent: u8,
    /// Highest discount percent a market visit may roll (inclusive).
    pub discount_max_percent: u8,
    /// Restore the player to full HP after every won encounter.
    pub heal_between_encounters: bool,
}

impl ArenaConfig {
    // ===== reference values =====
    pub const DEFAULT_VETERAN_THRESHOLD: u32 = 500;
    pub const DEFAULT_BASE_VICTORY_SCORE: u32 = 100;
    pub const DEFAULT_REGULAR_BOUNTY: u32 = 5;
    pub const DEFAULT_BOSS_BOUNTY: u32 = 10;
    pub const DEFAULT_DISCOUNT_MIN_PERCENT: u8 = 10;
    pub const DEFAULT_DISCOUNT_MAX_PERCENT: u8 = 50;

    pub fn new() -> Self {
        Self {
            veteran_threshold: Self::DEFAULT_VETERAN_THRESHOLD,
            base_victory_score: Self::DEFAULT_BASE_VICTORY_SCORE,
            regular_bounty: Self::DEFAULT_REGULAR_BOUNTY,
            boss_bounty: Self::DEFAULT_BOSS_BOUNTY,
            discount_min_percent: Self::DEFAULT_DISCOUNT_MIN_PERCENT,
            discount_max_percent: Self::DEFAULT_DISCOUNT_MAX_PERCENT,
            heal_between_encounters: false,
        }
    }

    pub fn with_veteran_threshold(mut self, veteran_threshold: u32) -> Self {
        self.veteran_threshold = veteran_threshold;
        self
    }

    pub fn with_heal_between_encounters(mut self, heal: bool) -> Self {
        self.heal_between_encounters = heal;
        self
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}
