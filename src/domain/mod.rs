//! Domain layer — pure types, errors, and path construction.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`. All
//! functions are synchronous and take data in, returning data out.

pub mod error;
pub mod instance;

pub use error::ProvisionError;
pub use instance::InstanceLayout;
