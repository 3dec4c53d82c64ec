//! Integration flows.

pub mod cart_flows;
pub mod event_flows;
pub mod session_flows;
