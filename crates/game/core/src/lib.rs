//! Deterministic arena rules shared by every shell.
//!
//! `arena-core` defines the combatants, the market, the battle loop and the run
//! orchestrator as pure APIs with no I/O and no clock. A shell builds an
//! [`ArenaSetup`], hands it to [`RunOrchestrator`], and drives the run by
//! calling [`RunOrchestrator::step`] at whatever pace it likes.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod market;
pub mod ranking;
pub mod run;
pub mod state;

pub use combat::{VictoryReward, enemy_damage, player_damage};
pub use config::ArenaConfig;
pub use engine::{
    Battle, BattleError, BattleEvent, BattleOutcome, BattlePhase, CombatSnapshot, StepReport,
};
pub use env::{
    AdversaryTemplate, ArenaSetup, PcgRng, PlayerTemplate, RngOracle, SetupError, compute_seed,
    is_valid_gladiator_name,
};
pub use error::{ErrorSeverity, GameError};
pub use market::{Market, MarketVisit, Transaction, TransactionError, purchase_or_refund};
pub use ranking::{Ranked, RankingBoard};
pub use run::{
    Rank, ResultRecord, RunError, RunEvent, RunOrchestrator, RunOutcome, RunPhase, RunStep,
    RunSummary,
};
pub use state::{
    Adversary, AdversaryKind, AdversaryProfile, AssetRef, Combatant, Inventory, InventoryError,
    Item, ItemCategory, Player, PlayerSheet, Rarity, Vitals,
};
