//! Collaborator seams for existence checks.
//!
//! Consumer and distributor records are owned by other subsystems; the
//! bind manager only needs to know whether they exist. Implementations
//! are injected at construction time.

use crate::error::BindResult;

/// Existence lookup for consumers.
pub trait ConsumerLookup: Send + Sync {
    fn consumer_exists(&self, consumer_id: &str) -> BindResult<bool>;
}

/// Existence lookup for repository-scoped distributors.
pub trait DistributorLookup: Send + Sync {
    fn distributor_exists(&self, repo_id: &str, distributor_id: &str) -> BindResult<bool>;
}
