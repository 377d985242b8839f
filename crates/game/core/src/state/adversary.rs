//! Arena adversaries.
//!
//! Regular enemies and bosses share one record; the boss variant is an explicit
//! tag carrying its score multiplier.

use super::character::{AssetRef, Combatant, Vitals};

/// Distinguishes regular adversaries from bosses.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdversaryKind {
    #[default]
    Regular,
    /// Boss whose victory score is multiplied by `score_multiplier`.
    Boss { score_multiplier: f64 },
}

impl AdversaryKind {
    /// Multiplier applied when a boss entry does not specify its own.
    pub const DEFAULT_BOSS_MULTIPLIER: f64 = 1.2;

    pub fn boss() -> Self {
        Self::Boss {
            score_multiplier: Self::DEFAULT_BOSS_MULTIPLIER,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adversary {
    pub name: String,
    pub image: AssetRef,
    vitals: Vitals,
    /// Fixed damage dealt every enemy turn, before the player's defense.
    pub attack: u32,
    pub kind: AdversaryKind,
}

impl Adversary {
    pub fn new(
        name: impl Into<String>,
        image: AssetRef,
        hit_points: u32,
        attack: u32,
        kind: AdversaryKind,
    ) -> Self {
        Self {
            name: name.into(),
            image,
            vitals: Vitals::full(hit_points),
            attack,
            kind,
        }
    }

    pub fn regular(name: impl Into<String>, image: AssetRef, hit_points: u32, attack: u32) -> Self {
        Self::new(name, image, hit_points, attack, AdversaryKind::Regular)
    }

    pub fn boss(
        name: impl Into<String>,
        image: AssetRef,
        hit_points: u32,
        attack: u32,
        score_multiplier: f64,
    ) -> Self {
        Self::new(
            name,
            image,
            hit_points,
            attack,
            AdversaryKind::Boss { score_multiplier },
        )
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.kind, AdversaryKind::Boss { .. })
    }

    pub fn score_multiplier(&self) -> Option<f64> {
        match self.kind {
            AdversaryKind::Boss { score_multiplier } => Some(score_multiplier),
            AdversaryKind::Regular => None,
        }
    }

    /// Gallery card for the pre-run enemy list.
    pub fn profile(&self) -> AdversaryProfile {
        AdversaryProfile {
            name: self.name.clone(),
            image: self.image.clone(),
            hit_points: self.vitals.maximum,
            attack: self.attack,
            is_boss: self.is_boss(),
        }
    }
}

impl Combatant for Adversary {
    fn name(&self) -> &str {
        &self.name
    }

    fn image(&self) -> &AssetRef {
        &self.image
    }

    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

/// Summary of an adversary shown before the run starts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdversaryProfile {
    pub name: String,
    pub image: AssetRef,
    pub hit_points: u32,
    pub attack: u32,
    pub is_boss: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_adversary_has_no_multiplier() {
        let lion = Adversary::regular("Nemean Lion", AssetRef::default(), 80, 20);
        assert!(!lion.is_boss());
        assert_eq!(lion.score_multiplier(), None);
        assert_eq!(lion.hit_points(), 80);
        assert!(lion.is_alive());
    }

    #[test]
    fn boss_carries_its_multiplier() {
        let centurion = Adversary::boss("Cursed Centurion", AssetRef::default(), 120, 30, 2.0);
        assert!(centurion.is_boss());
        assert_eq!(centurion.score_multiplier(), Some(2.0));
        assert_eq!(
            AdversaryKind::boss(),
            AdversaryKind::Boss {
                score_multiplier: 1.2
            }
        );
    }

    #[test]
    fn damage_is_clamped() {
        let mut lion = Adversary::regular("Nemean Lion", AssetRef::default(), 80, 20);
        lion.apply_damage(200);
        assert_eq!(lion.hit_points(), 0);
        assert!(!lion.is_alive());
    }

    #[test]
    fn profile_reports_maximum_hp() {
        let mut lion = Adversary::regular("Nemean Lion", AssetRef::new("img/lion.png"), 80, 20);
        lion.apply_damage(30);
        let profile = lion.profile();
        assert_eq!(profile.hit_points, 80);
        assert_eq!(profile.attack, 20);
        assert!(!profile.is_boss);
    }
}
