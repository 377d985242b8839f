//! Static starting data for the player and the roster.
//!
//! Templates are plain data supplied by the content layer. They become live
//! combatants only when a run is built from them.

use crate::state::{Adversary, AdversaryKind, AssetRef, Player};

use super::error::SetupError;

/// Starting stats of the gladiator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerTemplate {
    pub name: String,
    pub image: AssetRef,
    pub hit_points: u32,
    pub base_attack: u32,
    pub base_defense: u32,
    #[cfg_attr(feature = "serde", serde(default = "PlayerTemplate::default_currency"))]
    pub starting_currency: u32,
}

impl PlayerTemplate {
    pub const DEFAULT_STARTING_CURRENCY: u32 = 500;
    pub const MAX_NAME_CHARS: usize = 20;

    #[cfg(feature = "serde")]
    fn default_currency() -> u32 {
        Self::DEFAULT_STARTING_CURRENCY
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if !is_valid_gladiator_name(&self.name) {
            return Err(SetupError::InvalidGladiatorName {
                name: self.name.clone(),
            });
        }
        if self.hit_points == 0 {
            return Err(SetupError::PlayerWithoutHitPoints);
        }
        Ok(())
    }

    pub fn instantiate(&self) -> Player {
        Player::new(
            self.name.clone(),
            self.image.clone(),
            self.hit_points,
            self.base_attack,
            self.base_defense,
            self.starting_currency,
        )
    }

    /// Same template under another name, for player-chosen gladiators.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

/// Checks the gladiator naming rule: an uppercase first letter followed by
/// letters or whitespace, 20 characters at most.
pub fn is_valid_gladiator_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_uppercase()
        && chars.all(|c| c.is_alphabetic() || c.is_whitespace())
        && name.chars().count() <= PlayerTemplate::MAX_NAME_CHARS
}

/// One roster entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdversaryTemplate {
    pub name: String,
    pub image: AssetRef,
    pub hit_points: u32,
    pub attack: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_boss: bool,
    /// Boss score multiplier; bosses without one use the default of 1.2.
    #[cfg_attr(feature = "serde", serde(default))]
    pub multiplier: Option<f64>,
}

impl AdversaryTemplate {
    pub fn regular(name: impl Into<String>, image: AssetRef, hit_points: u32, attack: u32) -> Self {
        Self {
            name: name.into(),
            image,
            hit_points,
            attack,
            is_boss: false,
            multiplier: None,
        }
    }

    pub fn boss(
        name: impl Into<String>,
        image: AssetRef,
        hit_points: u32,
        attack: u32,
        multiplier: Option<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            image,
            hit_points,
            attack,
            is_boss: true,
            multiplier,
        }
    }

    fn kind(&self) -> AdversaryKind {
        if self.is_boss {
            AdversaryKind::Boss {
                score_multiplier: self
                    .multiplier
                    .unwrap_or(AdversaryKind::DEFAULT_BOSS_MULTIPLIER),
            }
        } else {
            AdversaryKind::Regular
        }
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if self.hit_points == 0 {
            return Err(SetupError::AdversaryWithoutHitPoints {
                name: self.name.clone(),
            });
        }
        if let AdversaryKind::Boss { score_multiplier } = self.kind()
            && !(score_multiplier.is_finite() && score_multiplier > 0.0)
        {
            return Err(SetupError::InvalidMultiplier {
                name: self.name.clone(),
                multiplier: score_multiplier,
            });
        }
        Ok(())
    }

    pub fn instantiate(&self) -> Adversary {
        Adversary::new(
            self.name.clone(),
            self.image.clone(),
            self.hit_points,
            self.attack,
            self.kind(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gladiator_name_rule() {
        assert!(is_valid_gladiator_name("Apuleyo Diocles"));
        assert!(is_valid_gladiator_name("Ñandú"));
        assert!(is_valid_gladiator_name("A"));
        assert!(!is_valid_gladiator_name(""));
        assert!(!is_valid_gladiator_name("apuleyo"));
        assert!(!is_valid_gladiator_name("Maximus 2"));
        assert!(!is_valid_gladiator_name("Gaius-Julius"));
        assert!(!is_valid_gladiator_name("Abcdefghijklmnopqrstu"));
        assert!(is_valid_gladiator_name("Abcdefghijklmnopqrst"));
    }

    #[test]
    fn boss_without_multiplier_uses_default() {
        let boss = AdversaryTemplate::boss("Centurion", AssetRef::default(), 120, 30, None);
        assert_eq!(boss.instantiate().score_multiplier(), Some(1.2));
    }

    #[test]
    fn invalid_multiplier_is_rejected() {
        for multiplier in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let boss = AdversaryTemplate::boss(
                "Centurion",
                AssetRef::default(),
                120,
                30,
                Some(multiplier),
            );
            assert!(matches!(
                boss.validate(),
                Err(SetupError::InvalidMultiplier { .. })
            ));
        }
    }

    #[test]
    fn multiplier_on_regular_entry_is_ignored() {
        let mut lion = AdversaryTemplate::regular("Lion", AssetRef::default(), 80, 20);
        lion.multiplier = Some(-3.0);
        assert!(lion.validate().is_ok());
        assert!(!lion.instantiate().is_boss());
    }

    #[test]
    fn zero_hp_templates_are_rejected() {
        let lion = AdversaryTemplate::regular("Lion", AssetRef::default(), 0, 20);
        assert!(matches!(
            lion.validate(),
            Err(SetupError::AdversaryWithoutHitPoints { .. })
        ));

        let player = PlayerTemplate {
            name: "Spartacus".into(),
            image: AssetRef::default(),
            hit_points: 0,
            base_attack: 10,
            base_defense: 5,
            starting_currency: 500,
        };
        assert_eq!(player.validate(), Err(SetupError::PlayerWithoutHitPoints));
    }
}
