//! # Storefront Test Suite
//!
//! Cross-subsystem flows that no single crate can test on its own.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── cart_flows.rs     # Cart + catalog + storage across restarts
//!     ├── session_flows.rs  # Admin guard sharing storage with the cart
//!     └── event_flows.rs    # Bus notifications seen by async subscribers
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sf-tests
//! cargo test -p sf-tests integration::cart_flows
//! ```

pub mod integration;
