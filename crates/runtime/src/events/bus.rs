//! Topic-based event bus implementation.

use std::sync::Arc;

use arena_core::{RunEvent, StepReport};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::MarketEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Market visits and transactions
    Market,
    /// Half-turn reports
    Battle,
    /// Encounter and run lifecycle
    Run,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Market(MarketEvent),
    Battle {
        /// Zero-based encounter index.
        encounter: usize,
        report: StepReport,
    },
    Run(RunEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Market(_) => Topic::Market,
            Event::Battle { .. } => Topic::Battle,
            Event::Run(_) => Topic::Run,
        }
    }

    /// Human readable lines for this event.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Event::Market(event) => vec![event.message()],
            Event::Battle { report, .. } => report.events.iter().map(|e| e.message()).collect(),
            Event::Run(event) => vec![event.message()],
        }
    }
}

struct Channels {
    market: broadcast::Sender<Event>,
    battle: broadcast::Sender<Event>,
    run: broadcast::Sender<Event>,
}

impl Channels {
    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Market => &self.market,
            Topic::Battle => &self.battle,
            Topic::Run => &self.run,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(crate::config::DEFAULT_EVENT_BUFFER)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                market: broadcast::channel(capacity).0,
                battle: broadcast::channel(capacity).0,
                run: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_only_reach_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut market = bus.subscribe(Topic::Market);
        let mut run = bus.subscribe(Topic::Run);

        bus.publish(Event::Market(MarketEvent::Refused {
            name: "Gladius".into(),
            reason: "too expensive".into(),
        }));

        assert!(matches!(market.recv().await.unwrap(), Event::Market(_)));
        assert!(run.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(Event::Market(MarketEvent::Refused {
            name: "Gladius".into(),
            reason: "too expensive".into(),
        }));
    }
}
