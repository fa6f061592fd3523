//! # Murmur Core
//!
//! The domain layer of the Murmur post service.
//! This crate contains the post model, pagination rules and the storage port,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, StorageError};
