//! Topic-based event bus for runtime events.
//!
//! Market, battle and run notifications are published to separate topics so a
//! consumer can subscribe only to what it renders.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::MarketEvent;
