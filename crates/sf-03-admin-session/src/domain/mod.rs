pub mod accounts;
pub mod errors;
pub mod session;

pub use accounts::*;
pub use errors::*;
pub use session::*;
