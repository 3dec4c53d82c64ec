//! Built-in mock catalog.

use shared_types::{Money, Product, ProductId};

struct SeedEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price_minor: u64,
    image_url: &'static str,
    stock: u32,
    category: &'static str,
}

const SEED: &[SeedEntry] = &[
    SeedEntry {
        id: "1",
        name: "Premium Wireless Headphones",
        description: "High-quality wireless headphones with noise cancellation and premium sound quality. Perfect for music lovers and professionals.",
        price_minor: 29_999,
        image_url: "/assets/headphones.jpg",
        stock: 15,
        category: "electronics",
    },
    SeedEntry {
        id: "2",
        name: "Smart Fitness Watch",
        description: "Advanced fitness tracking with heart rate monitoring, GPS, and 7-day battery life. Your perfect workout companion.",
        price_minor: 19_999,
        image_url: "/assets/smartwatch.jpg",
        stock: 8,
        category: "wearables",
    },
    SeedEntry {
        id: "3",
        name: "Professional Camera Lens",
        description: "High-performance 85mm lens for portrait photography. Sharp, fast, and perfect for professional photographers.",
        price_minor: 129_999,
        image_url: "/assets/camera-lens.jpg",
        stock: 3,
        category: "photography",
    },
    SeedEntry {
        id: "4",
        name: "Ergonomic Office Chair",
        description: "Comfortable ergonomic office chair with lumbar support and adjustable height. Perfect for long work sessions.",
        price_minor: 44_999,
        image_url: "/assets/office-chair.jpg",
        stock: 12,
        category: "furniture",
    },
    SeedEntry {
        id: "5",
        name: "Wireless Gaming Mouse",
        description: "High-precision wireless gaming mouse with RGB lighting and programmable buttons. Built for competitive gaming.",
        price_minor: 8_999,
        image_url: "/assets/gaming-mouse.jpg",
        stock: 25,
        category: "gaming",
    },
    SeedEntry {
        id: "6",
        name: "Premium Coffee Maker",
        description: "Professional-grade coffee maker with temperature control and multiple brewing options. Perfect coffee every time.",
        price_minor: 34_999,
        image_url: "/assets/coffee-maker.jpg",
        stock: 7,
        category: "kitchen",
    },
    SeedEntry {
        id: "7",
        name: "Bluetooth Speaker",
        description: "Portable Bluetooth speaker with 360-degree sound and waterproof design. Perfect for outdoor adventures.",
        price_minor: 12_999,
        image_url: "/assets/bluetooth-speaker.jpg",
        stock: 18,
        category: "audio",
    },
    SeedEntry {
        id: "8",
        name: "Laptop Stand",
        description: "Adjustable aluminum laptop stand with cooling design. Improve your posture and productivity.",
        price_minor: 5_999,
        image_url: "/assets/laptop-stand.jpg",
        stock: 30,
        category: "accessories",
    },
];

/// Returns the built-in mock products in display order.
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|entry| Product {
            id: ProductId::new(entry.id),
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            price: Money::from_minor(entry.price_minor),
            image_url: entry.image_url.to_string(),
            stock: entry.stock,
            category: entry.category.to_string(),
        })
        .collect()
}
