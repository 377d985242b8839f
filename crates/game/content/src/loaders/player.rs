//! Player template loader.

use std::path::Path;

use arena_core::PlayerTemplate;

use crate::loaders::{LoadResult, read_file};

/// Loader for the starting gladiator from a RON file.
pub struct PlayerLoader;

impl PlayerLoader {
    pub fn load(path: &Path) -> LoadResult<PlayerTemplate> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<PlayerTemplate> {
        let player: PlayerTemplate = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse player RON: {}", e))?;
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_currency_defaults_to_500() {
        let player = PlayerLoader::parse(
            r#"(
                name: "Crixus",
                image: "img/crixus.png",
                hit_points: 120,
                base_attack: 12,
                base_defense: 4,
            )"#,
        )
        .unwrap();
        assert_eq!(player.starting_currency, 500);
        assert_eq!(player.image.as_str(), "img/crixus.png");
    }
}
