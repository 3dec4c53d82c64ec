//! # Storefront Events
//!
//! Defines all event types that flow through the shared bus.
//!
//! Events are notifications, not state: they tell presentation code that
//! something changed and carry just enough to render a badge or a toast.
//! The authoritative view is always the owning store's snapshot.

use serde::{Deserialize, Serialize};
use shared_types::entities::{Money, ProductId};

/// Subsystem id of the catalog.
pub const CATALOG_SUBSYSTEM: u8 = 1;
/// Subsystem id of the cart store.
pub const CART_SUBSYSTEM: u8 = 2;
/// Subsystem id of the admin session guard.
pub const ADMIN_SUBSYSTEM: u8 = 3;

/// Which cart transition produced a `CartChanged` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartChangeKind {
    /// A product was added (new line or quantity + 1).
    Added,
    /// A line's quantity was replaced.
    QuantitySet,
    /// A line was removed.
    Removed,
    /// All lines were removed.
    Cleared,
}

/// All events that can be published to the event bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StorefrontEvent {
    // =========================================================================
    // SUBSYSTEM 1: CATALOG
    // =========================================================================
    /// An admin added a product to the catalog.
    ProductAdded {
        /// The new product's id.
        product_id: ProductId,
        /// The new product's name.
        name: String,
    },

    // =========================================================================
    // SUBSYSTEM 2: CART
    // =========================================================================
    /// The cart was restored (or found empty) at startup.
    CartHydrated {
        /// Number of restored lines.
        lines: usize,
        /// True if a corrupt record was discarded.
        discarded: bool,
    },

    /// The cart's line set changed.
    CartChanged {
        /// Transition that caused the change.
        kind: CartChangeKind,
        /// Product touched by the transition (`None` for clear).
        product_id: Option<ProductId>,
        /// Sum of all line quantities after the change.
        item_count: u64,
        /// Sum of quantity × unit price after the change.
        subtotal: Money,
    },

    /// Writing the cart to storage failed. In-memory state is unaffected.
    CartPersistFailed {
        /// Storage error description.
        reason: String,
    },

    // =========================================================================
    // SUBSYSTEM 3: ADMIN SESSION
    // =========================================================================
    /// An admin logged in.
    AdminLoggedIn {
        /// Username of the admin.
        username: String,
    },

    /// The admin session ended.
    AdminLoggedOut,
}

impl StorefrontEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::ProductAdded { .. } => EventTopic::Catalog,
            Self::CartHydrated { .. }
            | Self::CartChanged { .. }
            | Self::CartPersistFailed { .. } => EventTopic::Cart,
            Self::AdminLoggedIn { .. } | Self::AdminLoggedOut => EventTopic::Admin,
        }
    }

    /// Get the originating subsystem ID.
    #[must_use]
    pub fn source_subsystem(&self) -> u8 {
        match self.topic() {
            EventTopic::Catalog => CATALOG_SUBSYSTEM,
            EventTopic::Cart => CART_SUBSYSTEM,
            EventTopic::Admin | EventTopic::All => ADMIN_SUBSYSTEM,
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Subsystem 1 events.
    Catalog,
    /// Subsystem 2 events.
    Cart,
    /// Subsystem 3 events.
    Admin,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Source subsystems to include. Empty means all sources.
    pub source_subsystems: Vec<u8>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            source_subsystems: Vec::new(),
        }
    }

    /// Create a filter for events from specific subsystems.
    #[must_use]
    pub fn from_subsystems(subsystems: Vec<u8>) -> Self {
        Self {
            topics: Vec::new(),
            source_subsystems: subsystems,
        }
    }

    /// True if events of `topic` can pass this filter.
    #[must_use]
    pub fn accepts_topic(&self, topic: EventTopic) -> bool {
        self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || topic == EventTopic::All
            || self.topics.contains(&topic)
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &StorefrontEvent) -> bool {
        let source_match = self.source_subsystems.is_empty()
            || self.source_subsystems.contains(&event.source_subsystem());

        source_match && self.accepts_topic(event.topic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart_changed() -> StorefrontEvent {
        StorefrontEvent::CartChanged {
            kind: CartChangeKind::Added,
            product_id: Some(ProductId::new("1")),
            item_count: 1,
            subtotal: Money::from_minor(29_999),
        }
    }

    #[test]
    fn test_event_topic_mapping() {
        let event = cart_changed();
        assert_eq!(event.topic(), EventTopic::Cart);
        assert_eq!(event.source_subsystem(), CART_SUBSYSTEM);

        assert_eq!(StorefrontEvent::AdminLoggedOut.topic(), EventTopic::Admin);
        assert_eq!(
            StorefrontEvent::AdminLoggedOut.source_subsystem(),
            ADMIN_SUBSYSTEM
        );
    }

    #[test]
    fn test_filter_all() {
        let filter = EventFilter::all();
        assert!(filter.matches(&cart_changed()));
        assert!(filter.matches(&StorefrontEvent::AdminLoggedOut));
    }

    #[test]
    fn test_filter_by_topic() {
        let filter = EventFilter::topics(vec![EventTopic::Cart]);

        assert!(filter.matches(&cart_changed()));
        assert!(!filter.matches(&StorefrontEvent::AdminLoggedIn {
            username: "admin1".into()
        }));
    }

    #[test]
    fn test_filter_by_subsystem() {
        let filter = EventFilter::from_subsystems(vec![CATALOG_SUBSYSTEM]);

        let added = StorefrontEvent::ProductAdded {
            product_id: ProductId::new("9"),
            name: "Desk Lamp".into(),
        };
        assert!(filter.matches(&added));
        assert!(!filter.matches(&cart_changed()));
    }

    #[test]
    fn test_accepts_topic() {
        let cart_only = EventFilter::topics(vec![EventTopic::Cart]);
        assert!(cart_only.accepts_topic(EventTopic::Cart));
        assert!(!cart_only.accepts_topic(EventTopic::Admin));
        assert!(EventFilter::all().accepts_topic(EventTopic::Catalog));
        assert!(EventFilter::topics(vec![EventTopic::All]).accepts_topic(EventTopic::Admin));
    }

    #[test]
    fn test_persist_failed_is_cart_topic() {
        let event = StorefrontEvent::CartPersistFailed {
            reason: "quota".into(),
        };
        assert_eq!(event.topic(), EventTopic::Cart);
    }
}
