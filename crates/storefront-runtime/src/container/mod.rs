//! # Storefront Container
//!
//! Configuration and the container that wires every subsystem.

pub mod config;
pub mod subsystems;

pub use config::*;
pub use subsystems::*;
