//! # Admin Session Guard
//!
//! **Subsystem ID:** 3
//!
//! Checks admin credentials against a fixed allow-list and keeps a minimal
//! session record in client storage. This is a route guard for the admin
//! console, not an authentication mechanism.
//!
//! ## Lifecycle
//!
//! ```text
//! start ──hydrate──→ read "admin-session" once (corrupt → removed, logged out)
//! login  ──match──→ persist {id, username, name}, logged in
//! logout ─────────→ remove record, logged out
//! ```

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::*;
pub use ports::*;
pub use service::*;
