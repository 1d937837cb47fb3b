//! Consolidated testing utilities for database setup and collaborator stubs.

use std::collections::HashSet;

use crate::bind::{ConsumerLookup, DistributorLookup};
use crate::db_operations::DbOperations;
use crate::error::BindResult;

/// Temporary database creation for tests.
pub struct TestDatabaseFactory;

impl TestDatabaseFactory {
    /// Create a temporary sled database for testing.
    pub fn create_temp_sled_db() -> Result<sled::Db, sled::Error> {
        sled::Config::new().temporary(true).open()
    }

    /// Create temporary DbOperations for testing.
    pub fn create_temp_db_ops() -> Result<DbOperations, sled::Error> {
        let db = Self::create_temp_sled_db()?;
        DbOperations::new(db)
    }
}

/// In-memory consumer lookup seeded with a fixed id set.
#[derive(Default)]
pub struct StaticConsumerLookup {
    consumers: HashSet<String>,
}

impl StaticConsumerLookup {
    pub fn with_consumers<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            consumers: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl ConsumerLookup for StaticConsumerLookup {
    fn consumer_exists(&self, consumer_id: &str) -> BindResult<bool> {
        Ok(self.consumers.contains(consumer_id))
    }
}

/// In-memory distributor lookup seeded with fixed (repo, distributor) pairs.
#[derive(Default)]
pub struct StaticDistributorLookup {
    distributors: HashSet<(String, String)>,
}

impl StaticDistributorLookup {
    pub fn with_distributors<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            distributors: pairs
                .into_iter()
                .map(|(repo, dist)| (repo.into(), dist.into()))
                .collect(),
        }
    }
}

impl DistributorLookup for StaticDistributorLookup {
    fn distributor_exists(&self, repo_id: &str, distributor_id: &str) -> BindResult<bool> {
        Ok(self
            .distributors
            .contains(&(repo_id.to_string(), distributor_id.to_string())))
    }
}
