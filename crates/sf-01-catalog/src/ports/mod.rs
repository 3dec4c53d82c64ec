//! Ports layer for the Catalog subsystem.

pub mod inbound;

pub use inbound::*;
