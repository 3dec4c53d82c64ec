//! # Admin Session Integration Flows
//!
//! The admin guard and the runtime container over a shared storage area.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sf_01_catalog::CatalogApi;
    use sf_02_cart::CartApi;
    use sf_03_admin_session::{AdminConfig, AdminSessionApi, AdminSessionGuard, SessionError};
    use shared_bus::InMemoryEventBus;
    use shared_storage::{InMemoryStore, KeyValueStore};
    use shared_types::ProductId;
    use storefront_runtime::cli::{execute, AdminCommand, Command};
    use storefront_runtime::container::StorageBackend;
    use storefront_runtime::{StorefrontConfig, StorefrontContainer};

    fn run(container: &mut StorefrontContainer, command: Command) -> String {
        let mut out = Vec::new();
        execute(container, command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_logout_keeps_cart() {
        let storage: Arc<InMemoryStore> = Arc::new(InMemoryStore::new());
        let config = StorefrontConfig::default();
        let mut container = StorefrontContainer::with_storage(&config, storage.clone());

        run(&mut container, Command::Add { id: "6".into(), qty: 2 });
        run(
            &mut container,
            Command::Login {
                username: "admin4".into(),
                password: "admin101".into(),
            },
        );
        run(&mut container, Command::Logout);

        assert!(!container.admin.is_logged_in());
        assert_eq!(container.cart.snapshot().item_count, 2);
        assert!(storage.get("cart-state").unwrap().is_some());
        assert_eq!(storage.get("admin-session").unwrap(), None);
    }

    #[test]
    fn test_session_and_cart_restored_together() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StorefrontConfig::default();
        config.storage.data_dir = dir.path().to_path_buf();

        {
            let mut container = StorefrontContainer::new(&config).unwrap();
            run(
                &mut container,
                Command::Login {
                    username: "admin1".into(),
                    password: "admin123".into(),
                },
            );
            run(&mut container, Command::Add { id: "8".into(), qty: 1 });
        }

        let mut container = StorefrontContainer::new(&config).unwrap();
        assert_eq!(run(&mut container, Command::Whoami), "Admin One (admin1)\n");
        assert!(container.cart.line(&ProductId::new("8")).is_some());
        assert!(run(&mut container, Command::Admin(AdminCommand::Products)).contains("Laptop Stand"));
    }

    #[test]
    fn test_admin_added_product_is_sellable() {
        let mut config = StorefrontConfig::default();
        config.storage.backend = StorageBackend::Memory;
        let mut container = StorefrontContainer::new(&config).unwrap();

        run(
            &mut container,
            Command::Login {
                username: "admin2".into(),
                password: "admin456".into(),
            },
        );
        let output = run(
            &mut container,
            Command::Admin(AdminCommand::AddProduct {
                name: "Yoga Mat".into(),
                description: String::new(),
                price: "999".into(),
                stock: "2".into(),
                category: "fitness".into(),
                image_url: String::new(),
            }),
        );
        assert!(output.starts_with("Added product Yoga Mat"));

        let mat = container
            .catalog
            .read()
            .products()
            .last()
            .cloned()
            .unwrap();
        assert_eq!(mat.image_url, "/placeholder.svg");

        container.cart.add_to_cart(&mat);
        container.cart.update_quantity(&mat.id, 5);
        assert_eq!(container.cart.snapshot().item_count, 2);
    }

    #[test]
    fn test_guard_rejects_then_accepts() {
        let storage = Arc::new(InMemoryStore::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let mut guard = AdminSessionGuard::hydrate(AdminConfig::default(), storage.clone(), bus);

        assert_eq!(guard.login("admin1", "admin124"), Err(SessionError::InvalidCredentials));
        assert!(storage.is_empty());
        assert!(guard.login("admin1", "admin123").is_ok());
        assert_eq!(storage.len(), 1);
    }
}
