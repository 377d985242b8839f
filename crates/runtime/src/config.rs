//! Runtime settings read from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Pause between half-turns in the original game.
pub const DEFAULT_TURN_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_EVENT_BUFFER: usize = 100;
pub const RANKING_FILE_NAME: &str = "ranking.json";

#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Sleep between half-turns. Zero plays encounters without pausing.
    pub turn_delay: Duration,
    /// Capacity of each event bus topic.
    pub event_buffer_size: usize,
    /// Content directory; the built-in tables are used when unset.
    pub data_dir: Option<PathBuf>,
    /// Leaderboard file; the platform data directory is used when unset.
    pub ranking_path: Option<PathBuf>,
    /// Fixed market seed for reproducible visits.
    pub market_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            turn_delay: DEFAULT_TURN_DELAY,
            event_buffer_size: DEFAULT_EVENT_BUFFER,
            data_dir: None,
            ranking_path: None,
            market_seed: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_TURN_DELAY_MS` - Pause between half-turns (default: 1500)
    /// - `ARENA_EVENT_BUFFER` - Event bus capacity per topic (default: 100)
    /// - `ARENA_DATA_DIR` - Content directory (default: built-in tables)
    /// - `ARENA_RANKING_PATH` - Leaderboard file (default: platform data dir)
    /// - `ARENA_SEED` - Fixed market seed (default: random)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(millis) = read_env::<u64>("ARENA_TURN_DELAY_MS") {
            config.turn_delay = Duration::from_millis(millis);
        }
        if let Some(capacity) = read_env::<usize>("ARENA_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }
        config.data_dir = env::var("ARENA_DATA_DIR").ok().map(PathBuf::from);
        config.ranking_path = env::var("ARENA_RANKING_PATH").ok().map(PathBuf::from);
        config.market_seed = read_env::<u64>("ARENA_SEED");

        config
    }

    pub fn with_turn_delay(mut self, turn_delay: Duration) -> Self {
        self.turn_delay = turn_delay;
        self
    }

    pub fn with_market_seed(mut self, seed: u64) -> Self {
        self.market_seed = Some(seed);
        self
    }

    /// Leaderboard file, falling back to `<data dir>/arena/ranking.json`.
    ///
    /// Returns `None` when neither an explicit path nor a home directory exists.
    pub fn resolve_ranking_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.ranking_path {
            return Some(path.clone());
        }
        directories::ProjectDirs::from("", "", "arena")
            .map(|dirs| dirs.data_dir().join(RANKING_FILE_NAME))
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_pacing() {
        let config = RuntimeConfig::default();
        assert_eq!(config.turn_delay, Duration::from_millis(1500));
        assert_eq!(config.event_buffer_size, 100);
        assert!(config.market_seed.is_none());
    }

    #[test]
    fn explicit_ranking_path_wins() {
        let config = RuntimeConfig {
            ranking_path: Some(PathBuf::from("/tmp/board.json")),
            ..RuntimeConfig::default()
        };
        assert_eq!(
            config.resolve_ranking_path(),
            Some(PathBuf::from("/tmp/board.json"))
        );
    }
}
