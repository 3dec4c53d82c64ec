//! # Cart Integration Flows
//!
//! Cart store wired to the real catalog through the runtime adapter, over
//! the file-backed storage area, across simulated restarts.

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use parking_lot::RwLock;
    use proptest::prelude::*;

    use sf_01_catalog::{CatalogApi, InMemoryCatalog, NewProductForm};
    use sf_02_cart::{codec, CartApi, CartConfig, CartStore, HydrationOutcome};
    use shared_bus::InMemoryEventBus;
    use shared_storage::{FileBackedStore, InMemoryStore, KeyValueStore};
    use shared_types::{Money, Product, ProductId};
    use storefront_runtime::adapters::CatalogAdapter;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    type FileCart = CartStore<FileBackedStore, CatalogAdapter>;

    struct Shop {
        catalog: Arc<RwLock<InMemoryCatalog>>,
    }

    impl Shop {
        fn new() -> Self {
            Self {
                catalog: Arc::new(RwLock::new(InMemoryCatalog::seeded())),
            }
        }

        fn product(&self, id: &str) -> Product {
            self.catalog
                .read()
                .product(&ProductId::new(id))
                .cloned()
                .unwrap()
        }

        /// Opens the storage file fresh, as a new process would.
        fn open_cart(&self, path: &Path) -> FileCart {
            CartStore::hydrate(
                CartConfig::default(),
                Arc::new(FileBackedStore::open(path)),
                Arc::new(CatalogAdapter::new(self.catalog.clone())),
                Arc::new(InMemoryEventBus::new()),
            )
        }
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_cart_survives_restart_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let shop = Shop::new();

        {
            let mut cart = shop.open_cart(&path);
            cart.add_many(&shop.product("1"), 3);
            cart.add_to_cart(&shop.product("5"));
        }

        let cart = shop.open_cart(&path);
        let snapshot = cart.snapshot();
        assert_eq!(cart.hydration(), &HydrationOutcome::Restored { lines: 2 });
        assert_eq!(snapshot.item_count, 4);
        assert_eq!(snapshot.subtotal, Money::from_minor(3 * 29_999 + 8_999));
        assert_eq!(snapshot.items[0].product_id.as_str(), "1");
        assert_eq!(snapshot.items[1].product_id.as_str(), "5");
    }

    #[test]
    fn test_clear_then_restart_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let shop = Shop::new();

        {
            let mut cart = shop.open_cart(&path);
            cart.add_many(&shop.product("2"), 2);
            cart.clear_cart();
        }

        let cart = shop.open_cart(&path);
        assert_eq!(cart.hydration(), &HydrationOutcome::Empty);
        assert!(cart.snapshot().is_empty());
    }

    #[test]
    fn test_corrupt_record_on_disk_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        {
            let store = FileBackedStore::open(&path);
            store.set("cart-state", "[{\"productId\": 1}]").unwrap();
            store.set("admin-session", "{\"id\":\"1\",\"username\":\"admin1\",\"name\":\"Admin One\"}").unwrap();
        }

        let shop = Shop::new();
        let cart = shop.open_cart(&path);
        assert!(cart.snapshot().is_empty());
        assert!(matches!(cart.hydration(), HydrationOutcome::Discarded { .. }));

        let reopened = FileBackedStore::open(&path);
        assert_eq!(reopened.get("cart-state").unwrap(), None);
        assert!(reopened.get("admin-session").unwrap().is_some());
    }

    #[test]
    fn test_set_quantity_clamped_by_live_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let shop = Shop::new();
        let mut cart = shop.open_cart(&dir.path().join("storage.json"));

        let lamp = shop
            .catalog
            .write()
            .add_product(NewProductForm {
                name: "Desk Lamp".into(),
                price: "14.99".into(),
                stock: "4".into(),
                category: "home".into(),
                ..NewProductForm::default()
            })
            .unwrap();

        cart.add_to_cart(&lamp);
        cart.update_quantity(&lamp.id, 12);
        assert_eq!(cart.line(&lamp.id).map(|l| l.quantity), Some(4));

        // Adding past stock is allowed by default
        cart.add_many(&lamp, 3);
        assert_eq!(cart.line(&lamp.id).map(|l| l.quantity), Some(7));
    }

    #[test]
    fn test_cart_and_session_share_one_storage_area() {
        let storage = Arc::new(InMemoryStore::new());
        let shop = Shop::new();
        let mut cart = CartStore::hydrate(
            CartConfig::default(),
            storage.clone(),
            Arc::new(CatalogAdapter::new(shop.catalog.clone())),
            Arc::new(InMemoryEventBus::new()),
        );

        cart.add_to_cart(&shop.product("4"));
        storage.set("admin-session", "{}").unwrap();
        cart.clear_cart();

        assert_eq!(storage.get("cart-state").unwrap(), None);
        assert_eq!(storage.get("admin-session").unwrap().as_deref(), Some("{}"));
    }

    fn op_strategy() -> impl Strategy<Value = (u8, usize, i64)> {
        (0..4u8, 0..8usize, -1..20i64)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn persisted_cart_matches_memory(ops in proptest::collection::vec(op_strategy(), 1..30)) {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("storage.json");
            let shop = Shop::new();
            let products = shop.catalog.read().products().to_vec();

            let expected = {
                let mut cart = shop.open_cart(&path);
                for (op, index, quantity) in ops {
                    let product = &products[index];
                    match op {
                        0 => cart.add_to_cart(product),
                        1 => cart.update_quantity(&product.id, quantity),
                        2 => cart.remove_from_cart(&product.id),
                        _ => cart.add_many(product, 2),
                    }
                }
                cart.snapshot()
            };

            let restored = shop.open_cart(&path).snapshot();
            prop_assert_eq!(&restored, &expected);

            let raw = FileBackedStore::open(&path).get("cart-state").unwrap();
            if let Some(raw) = raw {
                let decoded = codec::decode(&raw).unwrap();
                prop_assert_eq!(decoded.items(), expected.items.as_slice());
            }
        }
    }
}
