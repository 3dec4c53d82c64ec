//! # Cart Store Subsystem
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! Tracks which products a shopper selected and in what quantities, keeps
//! the derived totals consistent with the line set, and persists/restores
//! the cart across sessions through client-local storage.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Every line has `quantity >= 1` | `domain/transition.rs` - zero/negative set removes the line |
//! | INVARIANT-2 | Lines unique by `product_id` | `domain/transition.rs` - add increments existing line |
//! | INVARIANT-3 | `item_count`/`subtotal` derived from lines only | `domain/entities.rs` - computed, never stored |
//! | INVARIANT-4 | Corrupt record never escapes the store | `service.rs` - `CartStore::hydrate()` |
//!
//! ## State Machine
//!
//! Each transition is a pure function `(CartState, payload) -> CartState`:
//!
//! | Transition | Payload | Effect |
//! |------------|---------|--------|
//! | `Add` | line snapshot, optional ceiling | New line with qty 1, or existing qty + 1 |
//! | `SetQuantity` | product id, target, optional ceiling | Replace qty; `<= 0` removes |
//! | `Remove` | product id | Drop line if present |
//! | `Clear` | - | Empty cart |
//!
//! ## Persistence Protocol
//!
//! ```text
//! start ──hydrate──→ [read "cart-state" once]
//!                        │ ok         → restored lines
//!                        │ absent     → empty
//!                        └ malformed  → empty + record removed
//!
//! add / set / remove ──→ write full line array
//! clear              ──→ remove record
//! ```
//!
//! Write failures leave the in-memory cart untouched; they are logged,
//! kept as `last_persist_error()` and published as `CartPersistFailed`.
//!
//! ## Outbound Dependencies
//!
//! | Dependency | Trait | Purpose |
//! |------------|-------|---------|
//! | Catalog (1) | `CatalogProvider` | Stock ceiling at quantity-set time |
//! | Storage | `shared_storage::KeyValueStore` | Durable `cart-state` slot |
//! | Bus | `shared_bus::EventPublisher` | Re-render notifications |

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::*;
pub use ports::*;
pub use service::*;
