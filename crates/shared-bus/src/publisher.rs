//! # Event Publisher
//!
//! Publishing side of the bus. Stores hold an `Arc<dyn EventPublisher>` and
//! call `publish` at the end of every mutation.

use crate::events::{EventFilter, StorefrontEvent};
use crate::subscriber::{EventStream, Subscription};
use crate::DEFAULT_CHANNEL_CAPACITY;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::{debug, trace};

/// Sink for store notifications.
///
/// Never blocks and never fails: a notification nobody listens to is
/// dropped.
pub trait EventPublisher: Send + Sync {
    /// Publishes an event and returns how many receivers it was handed to.
    fn publish(&self, event: StorefrontEvent) -> usize;

    /// Total events passed to `publish`, delivered or not.
    fn events_published(&self) -> u64;
}

/// In-process bus over a `tokio::sync::broadcast` channel.
///
/// Every subscriber gets its own receiver; filtering happens on the
/// receiving side.
pub struct InMemoryEventBus {
    sender: broadcast::Sender<StorefrontEvent>,
    published: AtomicU64,
}

impl InMemoryEventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Bus whose subscribers may fall `capacity` events behind before they
    /// start missing events.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            published: AtomicU64::new(0),
        }
    }

    /// Subscribes with a filter. Only events published afterwards are seen.
    #[must_use]
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        debug!(topics = ?filter.topics, "Subscriber registered");
        Subscription::new(self.sender.subscribe(), filter)
    }

    /// Subscribes and wraps the subscription as a `Stream`.
    #[must_use]
    pub fn event_stream(&self, filter: EventFilter) -> EventStream {
        self.subscribe(filter).into_stream()
    }

    /// Live subscriptions of any kind.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventPublisher for InMemoryEventBus {
    fn publish(&self, event: StorefrontEvent) -> usize {
        let topic = event.topic();
        self.published.fetch_add(1, Ordering::Relaxed);

        match self.sender.send(event) {
            Ok(receivers) => {
                trace!(?topic, receivers, "Event published");
                receivers
            }
            Err(_) => {
                trace!(?topic, "Event dropped, no subscribers");
                0
            }
        }
    }

    fn events_published(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }
}
