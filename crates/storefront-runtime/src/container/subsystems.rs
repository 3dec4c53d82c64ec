//! # Subsystem Container
//!
//! Holds every subsystem instance for one client session.
//!
//! ## Initialization Order
//!
//! ```text
//! Level 0: Event bus, storage area
//! Level 1: Catalog (publishes to the bus)
//! Level 2: Cart store (catalog adapter + storage), admin guard (storage)
//! ```
//!
//! The cart store and admin guard share one storage handle, the way one
//! browser storage area backs both.

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::RwLock;
use tracing::info;

use sf_01_catalog::InMemoryCatalog;
use sf_02_cart::CartStore;
use sf_03_admin_session::AdminSessionGuard;
use shared_bus::{EventFilter, InMemoryEventBus, StorefrontEvent, Subscription};
use shared_storage::{FileBackedStore, InMemoryStore, KeyValueStore};

use crate::adapters::CatalogAdapter;
use crate::container::config::{StorageBackend, StorefrontConfig};

/// Cart store over the shared storage handle and the catalog adapter.
pub type StorefrontCart = CartStore<dyn KeyValueStore, CatalogAdapter>;

/// Admin guard over the shared storage handle.
pub type StorefrontAdmin = AdminSessionGuard<dyn KeyValueStore>;

/// Central container holding all subsystem instances.
pub struct StorefrontContainer {
    /// Shared event bus.
    pub bus: Arc<InMemoryEventBus>,
    /// Client-local storage area.
    pub storage: Arc<dyn KeyValueStore>,
    /// Product catalog, writable from the admin console.
    pub catalog: Arc<RwLock<InMemoryCatalog>>,
    /// Cart store.
    pub cart: StorefrontCart,
    /// Admin session guard.
    pub admin: StorefrontAdmin,
    notices: Subscription,
    missed_reported: u64,
}

impl StorefrontContainer {
    /// Builds every subsystem and hydrates the stores from storage.
    pub fn new(config: &StorefrontConfig) -> Result<Self> {
        let storage = open_storage(config)?;
        Ok(Self::with_storage(config, storage))
    }

    /// Builds every subsystem over an existing storage area.
    pub fn with_storage(config: &StorefrontConfig, storage: Arc<dyn KeyValueStore>) -> Self {
        let bus = Arc::new(InMemoryEventBus::with_capacity(config.event_capacity));
        let notices = bus.subscribe(EventFilter::all());

        let catalog = Arc::new(RwLock::new(
            InMemoryCatalog::seeded().with_publisher(bus.clone()),
        ));

        let cart = CartStore::hydrate(
            config.cart.clone(),
            storage.clone(),
            Arc::new(CatalogAdapter::new(catalog.clone())),
            bus.clone(),
        );

        let admin = AdminSessionGuard::hydrate(config.admin.clone(), storage.clone(), bus.clone());

        info!(
            products = catalog.read().len(),
            cart_lines = cart.state().line_count(),
            "Storefront container initialized"
        );

        Self {
            bus,
            storage,
            catalog,
            cart,
            admin,
            notices,
            missed_reported: 0,
        }
    }

    /// Events published since the last call.
    pub fn drain_events(&mut self) -> Vec<StorefrontEvent> {
        self.notices.drain()
    }

    /// Events lost from the notice queue since the last call.
    pub fn take_missed_events(&mut self) -> u64 {
        let total = self.notices.missed();
        let fresh = total.saturating_sub(self.missed_reported);
        self.missed_reported = total;
        fresh
    }
}

fn open_storage(config: &StorefrontConfig) -> Result<Arc<dyn KeyValueStore>> {
    match config.storage.backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryStore::new())),
        StorageBackend::File => {
            let dir = &config.storage.data_dir;
            fs::create_dir_all(dir)
                .with_context(|| format!("creating data directory {}", dir.display()))?;
            Ok(Arc::new(FileBackedStore::open(config.storage.file_path())))
        }
    }
}
