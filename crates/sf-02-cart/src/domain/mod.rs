//! # Domain Layer - Cart Subsystem
//!
//! Pure business logic. Nothing in here touches storage, the bus or the
//! catalog.
//!
//! ## Components
//!
//! - `entities`: CartLineItem, CartState, CartSnapshot, CartConfig
//! - `transition`: CartTransition and the pure reducer
//! - `summary`: OrderSummary (GST, shipping, total)
//! - `codec`: JSON encoding of the persisted line array
//! - `errors`: CodecError

pub mod codec;
pub mod entities;
pub mod errors;
pub mod summary;
pub mod transition;

pub use codec::*;
pub use entities::*;
pub use errors::*;
pub use summary::*;
pub use transition::*;
