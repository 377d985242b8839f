//! Static arena content and the loaders that read it.
//!
//! - Built-in reference tables ([`builtin`]) that need no filesystem
//! - Player template (RON)
//! - Enemy roster (RON)
//! - Item catalog (RON)
//! - Arena tunables (TOML)
//!
//! Content is handed to the core as an [`arena_core::ArenaSetup`] and never
//! changes during a run.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::reference_setup;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemLoader, PlayerLoader, RosterLoader};
