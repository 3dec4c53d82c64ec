//! Cart Store Service
//!
//! Wraps the pure reducer with the catalog lookup, persistence and
//! notifications. Every mutation goes through `dispatch`.

use crate::domain::{
    codec, CartConfig, CartLineItem, CartSnapshot, CartState, CartTransition, OrderSummary,
};
use crate::ports::{CartApi, CatalogProvider};
use shared_bus::{EventPublisher, StorefrontEvent};
use shared_storage::KeyValueStore;
use shared_types::{Product, ProductId, StorageError};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// What `CartStore::hydrate` found in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HydrationOutcome {
    /// No record was present.
    Empty,
    /// A valid record was loaded.
    Restored { lines: usize },
    /// A corrupt record was found and removed.
    Discarded { reason: String },
    /// Storage could not be read. The record, if any, was left alone.
    Unreadable { reason: String },
}

/// Cart store bound to a storage handle, a catalog and a bus.
pub struct CartStore<S, C>
where
    S: KeyValueStore + ?Sized,
    C: CatalogProvider + ?Sized,
{
    config: CartConfig,
    state: CartState,
    storage: Arc<S>,
    catalog: Arc<C>,
    publisher: Arc<dyn EventPublisher>,
    hydration: HydrationOutcome,
    last_persist_error: Option<StorageError>,
}

impl<S, C> CartStore<S, C>
where
    S: KeyValueStore + ?Sized,
    C: CatalogProvider + ?Sized,
{
    /// Builds the store, reading the persisted record exactly once.
    ///
    /// Never fails. A record that does not decode is removed and the cart
    /// starts empty.
    pub fn hydrate(
        config: CartConfig,
        storage: Arc<S>,
        catalog: Arc<C>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        let key = config.storage_key.as_str();
        let (state, hydration) = match storage.get(key) {
            Ok(None) => (CartState::new(), HydrationOutcome::Empty),
            Ok(Some(raw)) => match codec::decode(&raw) {
                Ok(state) => {
                    let lines = state.line_count();
                    (state, HydrationOutcome::Restored { lines })
                }
                Err(e) => {
                    warn!(key, error = %e, "[sf-02] Discarding corrupt cart record");
                    if let Err(remove_err) = storage.remove(key) {
                        warn!(key, error = %remove_err, "[sf-02] Failed to remove corrupt cart record");
                    }
                    (
                        CartState::new(),
                        HydrationOutcome::Discarded {
                            reason: e.to_string(),
                        },
                    )
                }
            },
            Err(e) => {
                warn!(key, error = %e, "[sf-02] Cart storage unreadable, starting empty");
                (
                    CartState::new(),
                    HydrationOutcome::Unreadable {
                        reason: e.to_string(),
                    },
                )
            }
        };

        info!(
            lines = state.line_count(),
            item_count = state.item_count(),
            subtotal = %state.subtotal(),
            "[sf-02] Cart hydrated"
        );

        publisher.publish(StorefrontEvent::CartHydrated {
            lines: state.line_count(),
            discarded: matches!(hydration, HydrationOutcome::Discarded { .. }),
        });

        Self {
            config,
            state,
            storage,
            catalog,
            publisher,
            hydration,
            last_persist_error: None,
        }
    }

    /// Calls `add_to_cart` `count` times.
    pub fn add_many(&mut self, product: &Product, count: u32) {
        for _ in 0..count {
            self.add_to_cart(product);
        }
    }

    /// Totals for the order summary panel.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_snapshot(&self.snapshot())
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLineItem> {
        self.state.line(product_id)
    }

    /// Current authoritative state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// What was found in storage at startup.
    pub fn hydration(&self) -> &HydrationOutcome {
        &self.hydration
    }

    /// Error from the most recent persistence attempt, if it failed.
    pub fn last_persist_error(&self) -> Option<&StorageError> {
        self.last_persist_error.as_ref()
    }

    /// Writes the current cart to storage.
    ///
    /// Retry path after a failed write. Unlike mutations, the error is
    /// returned to the caller.
    pub fn flush(&mut self) -> Result<(), StorageError> {
        let result = self.write_record(false);
        self.record_persist_result(&result);
        result
    }

    fn dispatch(&mut self, transition: CartTransition) {
        let kind = transition.kind();
        let product_id = transition.product_id().cloned();
        let is_clear = matches!(transition, CartTransition::Clear);

        let next = self.state.clone().apply(transition);
        if next == self.state && !is_clear {
            trace!(?kind, product_id = ?product_id, "[sf-02] Transition left cart unchanged");
            return;
        }
        self.state = next;

        debug!(
            ?kind,
            product_id = ?product_id,
            item_count = self.state.item_count(),
            subtotal = %self.state.subtotal(),
            "[sf-02] Cart changed"
        );

        let result = self.write_record(is_clear);
        self.record_persist_result(&result);

        self.publisher.publish(StorefrontEvent::CartChanged {
            kind,
            product_id,
            item_count: self.state.item_count(),
            subtotal: self.state.subtotal(),
        });
    }

    fn write_record(&self, remove: bool) -> Result<(), StorageError> {
        let key = self.config.storage_key.as_str();
        if remove {
            return self.storage.remove(key);
        }
        let raw = codec::encode(self.state.items())
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.set(key, &raw)
    }

    fn record_persist_result(&mut self, result: &Result<(), StorageError>) {
        match result {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                warn!(
                    key = %self.config.storage_key,
                    error = %e,
                    "[sf-02] Failed to persist cart, keeping in-memory state"
                );
                self.last_persist_error = Some(e.clone());
                self.publisher.publish(StorefrontEvent::CartPersistFailed {
                    reason: e.to_string(),
                });
            }
        }
    }
}

impl<S, C> CartApi for CartStore<S, C>
where
    S: KeyValueStore + ?Sized,
    C: CatalogProvider + ?Sized,
{
    fn add_to_cart(&mut self, product: &Product) {
        let ceiling = self.config.enforce_stock_on_add.then_some(product.stock);
        self.dispatch(CartTransition::Add {
            item: CartLineItem::from_product(product),
            ceiling,
        });
    }

    fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        let ceiling = if self.config.enforce_stock_on_set {
            self.catalog.product(product_id).map(|p| p.stock)
        } else {
            None
        };
        self.dispatch(CartTransition::SetQuantity {
            product_id: product_id.clone(),
            quantity,
            ceiling,
        });
    }

    fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.dispatch(CartTransition::Remove {
            product_id: product_id.clone(),
        });
    }

    fn clear_cart(&mut self) {
        self.dispatch(CartTransition::Clear);
    }

    fn snapshot(&self) -> CartSnapshot {
        self.state.snapshot()
    }
}
