//! Shared combatant capabilities.
//!
//! Player and adversaries are distinct records; both expose their hit points
//! through [`Vitals`] and gain the common behaviour from [`Combatant`].

use core::fmt;

/// Opaque reference to an image asset. The core never interprets it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AssetRef(pub String);

impl AssetRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current and maximum hit points of a combatant.
///
/// `current` never exceeds `maximum` after construction and never drops below 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    pub current: u32,
    pub maximum: u32,
}

impl Vitals {
    /// Creates vitals at full health.
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Reduces current HP, clamped at zero.
    pub fn apply_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    pub fn restore(&mut self) {
        self.current = self.maximum;
    }

    /// Shifts both current and maximum HP up by the same amount.
    ///
    /// Both bounds saturate at `u32::MAX`, so a matching [`lower`](Self::lower)
    /// only restores the previous values while the sum stays below that cap.
    pub fn raise(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount);
        self.maximum = self.maximum.saturating_add(amount);
    }

    /// Shifts both current and maximum HP down by the same amount.
    pub fn lower(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
        self.maximum = self.maximum.saturating_sub(amount);
    }

    /// Remaining HP as a percentage of the maximum (0-100), for health bars.
    pub fn percent(&self) -> u32 {
        if self.maximum == 0 {
            return 0;
        }
        ((self.current as u64 * 100) / self.maximum as u64) as u32
    }
}

/// Capability set shared by every fighter in the arena.
pub trait Combatant {
    fn name(&self) -> &str;

    fn image(&self) -> &AssetRef;

    fn vitals(&self) -> &Vitals;

    fn vitals_mut(&mut self) -> &mut Vitals;

    fn is_alive(&self) -> bool {
        self.vitals().is_alive()
    }

    fn apply_damage(&mut self, amount: u32) {
        self.vitals_mut().apply_damage(amount);
    }

    fn hit_points(&self) -> u32 {
        self.vitals().current
    }

    fn max_hit_points(&self) -> u32 {
        self.vitals().maximum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn damage_clamps_at_zero() {
        let mut vitals = Vitals::full(50);
        vitals.apply_damage(20);
        assert_eq!(vitals.current, 30);
        assert!(vitals.is_alive());

        vitals.apply_damage(100);
        assert_eq!(vitals.current, 0);
        assert!(!vitals.is_alive());
    }

    #[test]
    fn raise_and_lower_move_both_bounds() {
        let mut vitals = Vitals::full(100);
        vitals.apply_damage(30);
        vitals.raise(20);
        assert_eq!(vitals, Vitals { current: 90, maximum: 120 });
        vitals.lower(20);
        assert_eq!(vitals, Vitals { current: 70, maximum: 100 });
    }

    #[test]
    fn percent_handles_empty_maximum() {
        assert_eq!(Vitals::full(0).percent(), 0);
        let mut vitals = Vitals::full(80);
        vitals.apply_damage(20);
        assert_eq!(vitals.percent(), 75);
    }

    proptest! {
        #[test]
        fn damage_never_goes_negative(hp in 0u32..10_000, damage in 0u32..20_000) {
            let mut vitals = Vitals::full(hp);
            vitals.apply_damage(damage);
            prop_assert_eq!(vitals.current, hp.saturating_sub(damage));
            prop_assert!(vitals.current <= vitals.maximum);
        }
    }
}
