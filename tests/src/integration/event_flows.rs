//! # Event Flows
//!
//! Async subscribers observing cart and admin notifications through the bus.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::time::timeout;
    use tokio_stream::StreamExt;

    use sf_02_cart::{CartApi, CartConfig, CartStore, NoCatalog};
    use sf_03_admin_session::{AdminConfig, AdminSessionApi, AdminSessionGuard};
    use shared_bus::{
        CartChangeKind, EventFilter, EventPublisher, EventTopic, InMemoryEventBus, StorefrontEvent,
    };
    use shared_storage::InMemoryStore;
    use shared_types::{Money, Product, ProductId};

    fn speaker() -> Product {
        Product {
            id: ProductId::new("7"),
            name: "Bluetooth Speaker".into(),
            description: String::new(),
            price: Money::from_minor(12_999),
            image_url: "/assets/bluetooth-speaker.jpg".into(),
            stock: 18,
            category: "audio".into(),
        }
    }

    #[tokio::test]
    async fn test_cart_changes_reach_async_subscriber() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut sub = bus.subscribe(EventFilter::topics(vec![EventTopic::Cart]));
        let mut cart = CartStore::hydrate(
            CartConfig::default(),
            Arc::new(InMemoryStore::new()),
            Arc::new(NoCatalog),
            bus.clone(),
        );

        cart.add_to_cart(&speaker());
        cart.update_quantity(&speaker().id, 4);

        let hydrated = timeout(Duration::from_secs(1), sub.recv()).await.unwrap();
        assert!(matches!(hydrated, Some(StorefrontEvent::CartHydrated { .. })));

        let added = timeout(Duration::from_secs(1), sub.recv()).await.unwrap();
        let set = timeout(Duration::from_secs(1), sub.recv()).await.unwrap();
        assert!(matches!(
            added,
            Some(StorefrontEvent::CartChanged { kind: CartChangeKind::Added, item_count: 1, .. })
        ));
        assert_eq!(
            set,
            Some(StorefrontEvent::CartChanged {
                kind: CartChangeKind::QuantitySet,
                product_id: Some(ProductId::new("7")),
                item_count: 4,
                subtotal: Money::from_minor(4 * 12_999),
            })
        );
    }

    #[tokio::test]
    async fn test_admin_stream_filters_cart_events() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut stream = bus.event_stream(EventFilter::topics(vec![EventTopic::Admin]));
        let storage = Arc::new(InMemoryStore::new());

        let mut cart = CartStore::hydrate(
            CartConfig::default(),
            storage.clone(),
            Arc::new(NoCatalog),
            bus.clone(),
        );
        let mut admin = AdminSessionGuard::hydrate(AdminConfig::default(), storage, bus.clone());

        cart.add_to_cart(&speaker());
        admin.login("admin3", "admin789").unwrap();
        cart.clear_cart();
        admin.logout();

        let first = timeout(Duration::from_secs(1), stream.next()).await.unwrap();
        let second = timeout(Duration::from_secs(1), stream.next()).await.unwrap();
        assert_eq!(
            first,
            Some(StorefrontEvent::AdminLoggedIn {
                username: "admin3".into()
            })
        );
        assert_eq!(second, Some(StorefrontEvent::AdminLoggedOut));
        assert_eq!(bus.events_published(), 5);
    }
}
