//! Language service client
//!
//! All remote calls go through [`Gateway`], which normalizes every failure
//! into a [`ServiceError`].

pub mod endpoint;
pub mod error;
pub mod gateway;

pub use endpoint::Endpoint;
pub use error::ServiceError;
pub use gateway::{resolve_locator, Gateway, HttpTransport, Transport};
