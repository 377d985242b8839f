//! Combat arithmetic.
//!
//! Pure functions only. The battle engine decides when they run; this module
//! decides what the numbers are.
//!
//! - [`player_damage`]: damage a player deals on its half-turn
//! - [`enemy_damage`]: damage an adversary deals after the player's defense
//! - [`VictoryReward`]: score and currency granted for a win

pub mod damage;
pub mod reward;

pub use damage::{enemy_damage, player_damage};
pub use reward::VictoryReward;
