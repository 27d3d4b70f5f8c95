//! Static catalog of error page texts.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{ErrorEntry, ErrorPageText};
pub use services::ErrorCatalog;
pub use value_objects::{ErrorCode, Referrer};
