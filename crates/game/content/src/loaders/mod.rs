//! Content loaders for reading arena data from files.
//!
//! Every loader parses one file into arena-core types with serde. Paths are
//! attached to errors so a broken data directory is easy to pin down.

pub mod config;
pub mod factory;
pub mod items;
pub mod player;
pub mod roster;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use items::ItemLoader;
pub use player::PlayerLoader;
pub use roster::RosterLoader;

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}
