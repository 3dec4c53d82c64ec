//! # Event Subscriber
//!
//! Receiving side of the bus. A `Subscription` is used synchronously by
//! presentation code (`try_recv`, `drain`) or awaited (`recv`); an
//! `EventStream` adapts it to `tokio_stream::Stream`.
//!
//! A subscriber that falls more than the channel capacity behind misses the
//! oldest events. The misses are counted; the subscriber should re-render
//! from a fresh snapshot when `missed()` grows.

use crate::events::{EventFilter, StorefrontEvent};
use std::pin::Pin;
use std::task::{Context, Poll};
use thiserror::Error;
use tokio::sync::broadcast;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::Stream;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The bus was dropped.
    #[error("Event bus closed")]
    Closed,
}

/// Handle for receiving filtered events.
pub struct Subscription {
    receiver: broadcast::Receiver<StorefrontEvent>,
    filter: EventFilter,
    missed: u64,
}

impl Subscription {
    pub(crate) fn new(receiver: broadcast::Receiver<StorefrontEvent>, filter: EventFilter) -> Self {
        Self {
            receiver,
            filter,
            missed: 0,
        }
    }

    /// Waits for the next matching event. `None` once the bus is gone.
    pub async fn recv(&mut self) -> Option<StorefrontEvent> {
        loop {
            let received = self.receiver.recv().await;
            match received {
                Ok(event) if self.filter.matches(&event) => return Some(event),
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(n)) => self.note_missed(n),
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Next matching event if one is buffered.
    ///
    /// `Ok(None)` means nothing is waiting right now.
    pub fn try_recv(&mut self) -> Result<Option<StorefrontEvent>, SubscriptionError> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if self.filter.matches(&event) => return Ok(Some(event)),
                Ok(_) => {}
                Err(broadcast::error::TryRecvError::Lagged(n)) => self.note_missed(n),
                Err(broadcast::error::TryRecvError::Empty) => return Ok(None),
                Err(broadcast::error::TryRecvError::Closed) => {
                    return Err(SubscriptionError::Closed)
                }
            }
        }
    }

    /// Every matching event currently buffered, oldest first.
    pub fn drain(&mut self) -> Vec<StorefrontEvent> {
        std::iter::from_fn(|| self.try_recv().ok().flatten()).collect()
    }

    /// Events lost because this subscriber fell behind.
    #[must_use]
    pub fn missed(&self) -> u64 {
        self.missed
    }

    #[must_use]
    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    /// Converts this subscription into a `Stream`.
    #[must_use]
    pub fn into_stream(self) -> EventStream {
        EventStream {
            inner: BroadcastStream::new(self.receiver),
            filter: self.filter,
            missed: self.missed,
        }
    }

    fn note_missed(&mut self, n: u64) {
        self.missed += n;
        debug!(missed = n, total = self.missed, "Subscriber fell behind");
    }
}

/// A `Subscription` as a `Stream` of matching events.
pub struct EventStream {
    inner: BroadcastStream<StorefrontEvent>,
    filter: EventFilter,
    missed: u64,
}

impl EventStream {
    #[must_use]
    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    /// Events lost because this stream fell behind.
    #[must_use]
    pub fn missed(&self) -> u64 {
        self.missed
    }
}

impl Stream for EventStream {
    type Item = StorefrontEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            match Pin::new(&mut self.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(event))) => {
                    if self.filter.matches(&event) {
                        return Poll::Ready(Some(event));
                    }
                }
                Poll::Ready(Some(Err(BroadcastStreamRecvError::Lagged(n)))) => {
                    self.missed += n;
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{CartChangeKind, EventTopic};
    use crate::publisher::InMemoryEventBus;
    use crate::EventPublisher;
    use shared_types::entities::{Money, ProductId};
    use std::time::Duration;
    use tokio::time::timeout;
    use tokio_stream::StreamExt;

    fn cart_changed(item_count: u32) -> StorefrontEvent {
        StorefrontEvent::CartChanged {
            kind: CartChangeKind::Added,
            product_id: Some(ProductId::new("1")),
            item_count: u64::from(item_count),
            subtotal: Money::from_major(10).times(item_count),
        }
    }

    #[tokio::test]
    async fn test_recv_skips_other_topics() {
        let bus = InMemoryEventBus::new();
        let mut sub = bus.subscribe(EventFilter::topics(vec![EventTopic::Cart]));

        bus.publish(StorefrontEvent::AdminLoggedOut);
        bus.publish(cart_changed(2));

        let received = timeout(Duration::from_millis(100), sub.recv()).await.unwrap();
        assert_eq!(received, Some(cart_changed(2)));
    }

    #[tokio::test]
    async fn test_recv_none_after_bus_dropped() {
        let bus = InMemoryEventBus::new();
        let mut sub = bus.subscribe(EventFilter::all());
        drop(bus);

        assert_eq!(sub.recv().await, None);
    }

    #[test]
    fn test_try_recv_states() {
        let bus = InMemoryEventBus::new();
        let mut sub = bus.subscribe(EventFilter::all());
        assert_eq!(sub.try_recv(), Ok(None));

        bus.publish(cart_changed(1));
        assert_eq!(sub.try_recv(), Ok(Some(cart_changed(1))));

        drop(bus);
        assert_eq!(sub.try_recv(), Err(SubscriptionError::Closed));
    }

    #[test]
    fn test_drain_in_publish_order() {
        let bus = InMemoryEventBus::new();
        let mut sub = bus.subscribe(EventFilter::topics(vec![EventTopic::Cart]));

        bus.publish(cart_changed(1));
        bus.publish(StorefrontEvent::AdminLoggedOut);
        bus.publish(cart_changed(2));

        assert_eq!(sub.drain(), vec![cart_changed(1), cart_changed(2)]);
        assert!(sub.drain().is_empty());
    }

    #[test]
    fn test_lagging_subscriber_counts_missed() {
        let bus = InMemoryEventBus::with_capacity(2);
        let mut sub = bus.subscribe(EventFilter::all());

        for count in 1..=5 {
            bus.publish(cart_changed(count));
        }

        assert_eq!(sub.drain(), vec![cart_changed(4), cart_changed(5)]);
        assert_eq!(sub.missed(), 3);
    }

    #[test]
    fn test_dropped_subscribers_leave_the_bus() {
        let bus = InMemoryEventBus::new();
        {
            let _cart = bus.subscribe(EventFilter::topics(vec![EventTopic::Cart]));
            let _stream = bus.event_stream(EventFilter::all());
            assert_eq!(bus.subscriber_count(), 2);
        }
        assert_eq!(bus.subscriber_count(), 0);
        assert_eq!(bus.publish(cart_changed(1)), 0);
    }

    #[tokio::test]
    async fn test_event_stream_counts_missed() {
        let bus = InMemoryEventBus::with_capacity(2);
        let mut stream = bus.event_stream(EventFilter::all());

        for count in 1..=4 {
            bus.publish(cart_changed(count));
        }

        let next = timeout(Duration::from_millis(100), stream.next()).await.unwrap();
        assert_eq!(next, Some(cart_changed(3)));
        assert_eq!(stream.missed(), 2);
    }

    #[tokio::test]
    async fn test_event_stream_filters() {
        let bus = InMemoryEventBus::new();
        let mut stream = bus.event_stream(EventFilter::topics(vec![EventTopic::Cart]));
        assert_eq!(EventStream::filter(&stream).topics, vec![EventTopic::Cart]);

        bus.publish(StorefrontEvent::AdminLoggedOut);
        bus.publish(cart_changed(3));

        let next = timeout(Duration::from_millis(100), stream.next()).await.unwrap();
        assert_eq!(next, Some(cart_changed(3)));
        assert_eq!(stream.missed(), 0);
    }
}
