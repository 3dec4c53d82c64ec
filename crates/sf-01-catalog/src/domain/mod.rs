//! # Domain Layer - Catalog Subsystem

pub mod catalog;
pub mod errors;
pub mod form;
pub mod seed;

pub use catalog::*;
pub use errors::*;
pub use form::*;
pub use seed::*;
