//! # Storefront Runtime Library
//!
//! Exposes the runtime's modules for the binary and for tests.
//!
//! - `container/` - configuration and the subsystem container
//! - `adapters/` - port implementations connecting subsystems
//! - `cli` - command definitions, rendering and the interactive shell

pub mod adapters;
pub mod cli;
pub mod container;

pub use container::{load_config, StorefrontConfig, StorefrontContainer};
