//! # Shared Bus - Change Notifications for Presentation Code
//!
//! Stores publish a `StorefrontEvent` at the end of every mutation;
//! presentation components subscribe and re-render from the store snapshot.
//! No polling.
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │  Cart Store  │                    │   Renderer   │
//! │              │    publish()       │              │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```
//!
//! Publishing is synchronous and never blocks; a publish with no subscribers
//! is dropped silently.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{CartChangeKind, EventFilter, EventTopic, StorefrontEvent};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before lagging.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

