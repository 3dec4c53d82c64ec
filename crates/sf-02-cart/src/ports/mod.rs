//! Ports layer for the Cart subsystem.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
