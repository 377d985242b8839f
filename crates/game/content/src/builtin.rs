//! Reference content of the Colosseum, compiled in.
//!
//! The same tables ship as data files under `data/`; tests keep both in sync.

use arena_core::{
    AdversaryTemplate, ArenaConfig, ArenaSetup, AssetRef, Item, ItemCategory, PlayerTemplate,
    Rarity,
};

pub fn reference_player() -> PlayerTemplate {
    PlayerTemplate {
        name: "Apuleyo Diocles".into(),
        image: AssetRef::new("img/Gladiador.png"),
        hit_points: 100,
        base_attack: 10,
        base_defense: 5,
        starting_currency: PlayerTemplate::DEFAULT_STARTING_CURRENCY,
    }
}

/// Three regular fighters followed by the boss.
pub fn reference_roster() -> Vec<AdversaryTemplate> {
    vec![
        AdversaryTemplate::regular("León de Nemea", AssetRef::new("img/Leon.png"), 80, 20),
        AdversaryTemplate::regular(
            "Espartaco (Rebelde)",
            AssetRef::new("img/Esclavo_rebelde.png"),
            90,
            25,
        ),
        AdversaryTemplate::regular("Reciario Traidor", AssetRef::new("img/Reciario.png"), 100, 25),
        AdversaryTemplate::boss(
            "Centurión Maldito",
            AssetRef::new("img/Centurio_romano.png"),
            120,
            30,
            Some(2.0),
        ),
    ]
}

pub fn reference_catalog() -> Vec<Item> {
    use ItemCategory::{Armor, Consumable, Weapon};
    use Rarity::{Common, Legendary, Rare};

    [
        ("Gladius Hispaniensis", "img/Espada.png", 100, Weapon, 15, Common),
        ("Tridente de Neptuno", "img/Tridente.png", 250, Weapon, 30, Rare),
        ("Casco de Pretoriano", "img/Casco.png", 80, Armor, 10, Common),
        ("Escudo Scutum", "img/Escudo.png", 200, Armor, 15, Rare),
        ("Uvas del César", "img/Uvas.png", 50, Consumable, 20, Common),
        ("Poción de los Dioses", "img/Pocion.png", 100, Consumable, 50, Legendary),
    ]
    .into_iter()
    .map(|(name, image, price, category, bonus, rarity)| {
        Item::new(name, AssetRef::new(image), price, category, bonus, rarity)
    })
    .collect()
}

/// The complete reference arena with default tunables.
pub fn reference_setup() -> ArenaSetup {
    ArenaSetup::new(
        ArenaConfig::default(),
        reference_player(),
        reference_roster(),
        reference_catalog(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_setup_is_valid() {
        assert_eq!(reference_setup().validate(), Ok(()));
    }

    #[test]
    fn boss_closes_the_roster() {
        let roster = reference_roster();
        assert_eq!(roster.len(), 4);
        assert!(roster[..3].iter().all(|entry| !entry.is_boss));
        assert!(roster[3].is_boss);
        assert_eq!(roster[3].multiplier, Some(2.0));
    }

    #[test]
    fn every_rarity_is_stocked() {
        let catalog = reference_catalog();
        for rarity in Rarity::ALL {
            assert!(catalog.iter().any(|item| item.rarity == rarity));
        }
    }
}
