//! Shell-side orchestration for the arena.
//!
//! The core resolves a run one half-turn at a time and never waits. This crate
//! supplies everything around it: pacing with a tokio timer, a topic event bus
//! for presentation layers, ranking persistence, and environment configuration.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts [`ArenaSession`], the async driver of one run
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`repository`] stores finished runs on the leaderboard
//! - [`config`] reads runtime settings from the environment
pub mod api;
pub mod config;
pub mod events;
pub mod repository;
pub mod session;

pub use api::{Result, RuntimeError};
pub use config::RuntimeConfig;
pub use events::{Event, EventBus, MarketEvent, Topic};
pub use repository::{
    FileRankingRepository, InMemoryRankingRepository, RankingEntry, RankingRepository,
    RepositoryError,
};
pub use session::ArenaSession;
