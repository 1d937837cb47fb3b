use serde::{Deserialize, Serialize};

/// Association of a consumer with a repository's distributor.
///
/// Binds are unique per (consumer_id, repo_id, distributor_id) triple and
/// carry no state beyond it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bind {
    /// Uniquely identifies the consumer.
    pub consumer_id: String,
    /// Uniquely identifies the repository.
    pub repo_id: String,
    /// Uniquely identifies a distributor within the repository.
    pub distributor_id: String,
}

impl Bind {
    pub fn new(consumer_id: &str, repo_id: &str, distributor_id: &str) -> Self {
        Self {
            consumer_id: consumer_id.to_string(),
            repo_id: repo_id.to_string(),
            distributor_id: distributor_id.to_string(),
        }
    }

    /// Composite key for the binds collection.
    ///
    /// The unit separator keeps keys unambiguous for ids containing
    /// printable separator characters; queries never parse this key.
    pub(crate) fn storage_key(&self) -> String {
        storage_key(&self.consumer_id, &self.repo_id, &self.distributor_id)
    }
}

pub(crate) fn storage_key(consumer_id: &str, repo_id: &str, distributor_id: &str) -> String {
    format!("{}\u{1f}{}\u{1f}{}", consumer_id, repo_id, distributor_id)
}
