//! Common test utilities and fixtures for bind manager tests.

use std::sync::Arc;

use tempfile::TempDir;

use repobind::db_operations::DbOperations;
use repobind::testing_utils::{StaticConsumerLookup, StaticDistributorLookup};
use repobind::{BindManager, BindStoreConfig};

/// Shared fixture: a bind manager over a temporary store, with seeded
/// consumer and distributor lookups.
pub struct CommonTestFixture {
    pub manager: BindManager,
    pub db_ops: Arc<DbOperations>,
    pub _temp_dir: TempDir,
}

impl CommonTestFixture {
    /// Known ids seeded into the lookups: consumers `consumer-1..3`,
    /// distributors `repo-1/dist-1`, `repo-1/dist-2`, `repo-2/dist-1`.
    pub fn new() -> Self {
        // Capture manager log output when tests run with RUST_LOG set.
        let _ = env_logger::builder().is_test(true).try_init();

        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let config = BindStoreConfig::new(temp_dir.path().join("binds"));
        let db_ops = Arc::new(DbOperations::open(&config).expect("Failed to open store"));

        let manager = BindManager::new(
            Arc::clone(&db_ops),
            Arc::new(StaticConsumerLookup::with_consumers([
                "consumer-1",
                "consumer-2",
                "consumer-3",
            ])),
            Arc::new(StaticDistributorLookup::with_distributors([
                ("repo-1", "dist-1"),
                ("repo-1", "dist-2"),
                ("repo-2", "dist-1"),
            ])),
        );

        Self {
            manager,
            db_ops,
            _temp_dir: temp_dir,
        }
    }
}
