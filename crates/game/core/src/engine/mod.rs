//! Battle loop.
//!
//! [`Battle`] resolves one encounter as an explicit state machine:
//!
//! ```text
//! NotStarted -> PlayerTurn <-> EnemyTurn -> Resolved(Victory | Defeat)
//! ```
//!
//! Each [`Battle::step`] call performs at most one half-turn and returns the
//! events it produced. The caller decides how long to wait before the next
//! call; the engine never sleeps.

mod errors;

pub use errors::BattleError;

use crate::combat::{enemy_damage, player_damage};
use crate::state::{Adversary, Combatant, Player};

/// Final result of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    NotStarted,
    PlayerTurn,
    EnemyTurn,
    Resolved(BattleOutcome),
}

impl BattlePhase {
    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self {
            Self::Resolved(outcome) => Some(*outcome),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Something the shell should show after a step.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// The adversary entered the arena.
    Engaged { adversary: String, is_boss: bool },
    /// The player hit the adversary.
    PlayerStruck {
        adversary: String,
        damage: u32,
        adversary_hp: u32,
    },
    /// The adversary hit the player.
    AdversaryStruck {
        adversary: String,
        damage: u32,
        player_hp: u32,
    },
    Resolved {
        adversary: String,
        outcome: BattleOutcome,
    },
}

impl BattleEvent {
    pub fn message(&self) -> String {
        match self {
            Self::Engaged { adversary, .. } => format!("A {adversary} appears!"),
            Self::PlayerStruck {
                adversary, damage, ..
            } => format!("You strike {adversary} for {damage} damage."),
            Self::AdversaryStruck {
                adversary, damage, ..
            } => format!("{adversary} strikes you for {damage} damage."),
            Self::Resolved {
                adversary,
                outcome: BattleOutcome::Victory,
            } => format!("{adversary} has fallen!"),
            Self::Resolved {
                outcome: BattleOutcome::Defeat,
                ..
            } => "You have fallen in the arena... Honor and glory.".to_string(),
        }
    }
}

/// HP of both sides after a step, for health bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatSnapshot {
    pub player_hp: u32,
    pub player_max_hp: u32,
    pub adversary_hp: u32,
    pub adversary_max_hp: u32,
}

impl CombatSnapshot {
    pub fn capture(player: &Player, adversary: &Adversary) -> Self {
        Self {
            player_hp: player.hit_points(),
            player_max_hp: player.max_hit_points(),
            adversary_hp: adversary.hit_points(),
            adversary_max_hp: adversary.max_hit_points(),
        }
    }
}

/// Outcome of one [`Battle::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    /// Phase after the step.
    pub phase: BattlePhase,
    pub events: Vec<BattleEvent>,
    pub snapshot: CombatSnapshot,
}

/// State machine for a single encounter.
///
/// The battle holds no combatants. The owner passes the same player and
/// adversary to every step.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Battle {
    phase: BattlePhase,
    half_turns: u32,
}

impl Battle {
    /// Prepares a battle between two live combatants.
    pub fn new(player: &Player, adversary: &Adversary) -> Result<Self, BattleError> {
        for (name, alive) in [
            (player.name(), player.is_alive()),
            (adversary.name(), adversary.is_alive()),
        ] {
            if !alive {
                return Err(BattleError::CombatantDown { name: name.into() });
            }
        }
        // Stats are frozen for the encounter, so zero damage on both sides never changes.
        if player_damage(player) == 0 && enemy_damage(adversary, player) == 0 {
            return Err(BattleError::Stalemate {
                player: player.name().into(),
                adversary: adversary.name().into(),
            });
        }

        Ok(Self {
            phase: BattlePhase::NotStarted,
            half_turns: 0,
        })
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Number of damage exchanges performed so far.
    pub fn half_turns(&self) -> u32 {
        self.half_turns
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.phase.outcome()
    }

    /// Advances by one half-turn.
    ///
    /// The first call only announces the adversary. Once resolved, further
    /// calls change nothing and return no events.
    pub fn step(&mut self, player: &mut Player, adversary: &mut Adversary) -> StepReport {
        let mut events = Vec::new();

        match self.phase {
            BattlePhase::NotStarted => {
                events.push(BattleEvent::Engaged {
                    adversary: adversary.name.clone(),
                    is_boss: adversary.is_boss(),
                });
                self.phase = BattlePhase::PlayerTurn;
            }
            BattlePhase::PlayerTurn => {
                let damage = player_damage(player);
                adversary.apply_damage(damage);
                self.half_turns += 1;
                events.push(BattleEvent::PlayerStruck {
                    adversary: adversary.name.clone(),
                    damage,
                    adversary_hp: adversary.hit_points(),
                });
                self.phase = if adversary.is_alive() {
                    BattlePhase::EnemyTurn
                } else {
                    self.resolve(adversary, BattleOutcome::Victory, &mut events)
                };
            }
            BattlePhase::EnemyTurn => {
                let damage = enemy_damage(adversary, player);
                player.apply_damage(damage);
                self.half_turns += 1;
                events.push(BattleEvent::AdversaryStruck {
                    adversary: adversary.name.clone(),
                    damage,
                    player_hp: player.hit_points(),
                });
                self.phase = if player.is_alive() {
                    BattlePhase::PlayerTurn
                } else {
                    self.resolve(adversary, BattleOutcome::Defeat, &mut events)
                };
            }
            BattlePhase::Resolved(_) => {}
        }

        StepReport {
            phase: self.phase,
            events,
            snapshot: CombatSnapshot::capture(player, adversary),
        }
    }

    /// Steps until resolved and returns the outcome plus every report.
    pub fn run_to_end(
        &mut self,
        player: &mut Player,
        adversary: &mut Adversary,
    ) -> (BattleOutcome, Vec<StepReport>) {
        let mut reports = Vec::new();
        loop {
            let report = self.step(player, adversary);
            let phase = report.phase;
            reports.push(report);
            if let BattlePhase::Resolved(outcome) = phase {
                return (outcome, reports);
            }
        }
    }

    fn resolve(
        &self,
        adversary: &Adversary,
        outcome: BattleOutcome,
        events: &mut Vec<BattleEvent>,
    ) -> BattlePhase {
        events.push(BattleEvent::Resolved {
            adversary: adversary.name.clone(),
            outcome,
        });
        BattlePhase::Resolved(outcome)
    }
}
