//! Bind registry for consumer/repository/distributor associations.
//!
//! A bind records that a consumer receives content from a specific
//! distributor of a repository. This crate stores binds in an embedded
//! document store and keeps them consistent when consumers, repositories,
//! or distributors are deleted elsewhere in the system.

pub mod bind;
pub mod config;
pub mod db_operations;
pub mod error;
pub mod testing_utils;

pub use bind::{Bind, BindManager, ConsumerLookup, DistributorLookup};
pub use config::{load_bind_config, BindStoreConfig, ConfigError};
pub use db_operations::DbOperations;
pub use error::{BindError, BindResult};
