//! Damage calculation.

use crate::state::{Adversary, Player};

/// Damage the player deals: its total attack, with no variance or miss chance.
pub fn player_damage(player: &Player) -> u32 {
    player.total_attack()
}

/// Damage an adversary deals to the player.
///
/// ```text
/// damage = max(0, attack - total_defense)
/// ```
///
/// Defense can absorb a hit completely but never turns it into healing.
pub fn enemy_damage(adversary: &Adversary, player: &Player) -> u32 {
    adversary.attack.saturating_sub(player.total_defense())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AssetRef, Item, ItemCategory, Rarity};

    fn gladiator() -> Player {
        Player::new("Spartacus", AssetRef::default(), 100, 10, 5, 500)
    }

    #[test]
    fn defense_is_subtracted_from_attack() {
        let lion = Adversary::regular("Lion", AssetRef::default(), 80, 20);
        assert_eq!(enemy_damage(&lion, &gladiator()), 15);
    }

    #[test]
    fn heavy_armor_absorbs_everything() {
        let mut player = gladiator();
        player
            .add_item(Item::new(
                "Scutum",
                AssetRef::default(),
                100,
                ItemCategory::Armor,
                40,
                Rarity::Rare,
            ))
            .unwrap();
        let lion = Adversary::regular("Lion", AssetRef::default(), 80, 20);
        assert_eq!(enemy_damage(&lion, &player), 0);
    }

    #[test]
    fn weapons_add_to_player_damage() {
        let mut player = gladiator();
        player
            .add_item(Item::new(
                "Gladius",
                AssetRef::default(),
                100,
                ItemCategory::Weapon,
                15,
                Rarity::Common,
            ))
            .unwrap();
        assert_eq!(player_damage(&player), 25);
    }
}
