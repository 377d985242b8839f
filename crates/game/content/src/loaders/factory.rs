//! Content factory for building an arena setup from data files.

use std::path::{Path, PathBuf};

use arena_core::{AdversaryTemplate, ArenaConfig, ArenaSetup, Item, PlayerTemplate};
use tracing::{debug, info};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, PlayerLoader, RosterLoader};

/// Content factory that loads all arena content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// ├── player.ron
/// ├── roster.ron
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load tunables from `config.toml`, or the defaults when the file is absent.
    pub fn load_config(&self) -> LoadResult<ArenaConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(ArenaConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the starting gladiator from `player.ron`.
    pub fn load_player(&self) -> LoadResult<PlayerTemplate> {
        PlayerLoader::load(&self.data_dir.join("player.ron"))
    }

    /// Load the enemy roster from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Vec<AdversaryTemplate>> {
        RosterLoader::load(&self.data_dir.join("roster.ron"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<Item>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load every file and assemble a validated setup.
    pub fn load_setup(&self) -> LoadResult<ArenaSetup> {
        let setup = ArenaSetup::new(
            self.load_config()?,
            self.load_player()?,
            self.load_roster()?,
            self.load_items()?,
        );
        setup.validate().map_err(|e| {
            anyhow::anyhow!("Invalid content in {}: {}", self.data_dir.display(), e)
        })?;

        info!(
            data_dir = %self.data_dir.display(),
            adversaries = setup.roster.len(),
            items = setup.catalog.len(),
            "arena content loaded"
        );
        Ok(setup)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let factory = ContentFactory::new("/nonexistent/arena-data");
        let error = factory.load_setup().unwrap_err();
        assert!(error.to_string().contains("player.ron"));
    }
}
