//! Manage consumer repo/distributor binds.

use std::sync::Arc;

use log::{debug, info};

use super::lookup::{ConsumerLookup, DistributorLookup};
use super::types::Bind;
use crate::db_operations::DbOperations;
use crate::error::{BindError, BindResult};

/// CRUD manager for the binds collection.
///
/// Creation verifies the referenced consumer and distributor through the
/// injected lookups; deletion notifications cascade the removal of
/// dependent binds. Every mutating operation is idempotent: a repeated
/// call with the same arguments produces the same end state and no error.
pub struct BindManager {
    db_ops: Arc<DbOperations>,
    consumers: Arc<dyn ConsumerLookup>,
    distributors: Arc<dyn DistributorLookup>,
}

impl BindManager {
    pub fn new(
        db_ops: Arc<DbOperations>,
        consumers: Arc<dyn ConsumerLookup>,
        distributors: Arc<dyn DistributorLookup>,
    ) -> Self {
        Self {
            db_ops,
            consumers,
            distributors,
        }
    }

    /// Bind a consumer to a specific distributor associated with a repository.
    ///
    /// Fails with [`BindError::MissingResource`] when the consumer or the
    /// repository's distributor does not exist. Binding an already-bound
    /// triple succeeds without changing the store.
    ///
    /// Returns the bind record.
    pub fn bind(
        &self,
        consumer_id: &str,
        repo_id: &str,
        distributor_id: &str,
    ) -> BindResult<Bind> {
        self.ensure_consumer(consumer_id)?;
        self.ensure_distributor(repo_id, distributor_id)?;

        let bind = Bind::new(consumer_id, repo_id, distributor_id);
        let inserted = self.db_ops.insert_bind(&bind)?;
        if inserted {
            info!(
                "Bound consumer '{}' to distributor '{}/{}'",
                consumer_id, repo_id, distributor_id
            );
        } else {
            debug!(
                "Consumer '{}' already bound to distributor '{}/{}'",
                consumer_id, repo_id, distributor_id
            );
        }
        Ok(bind)
    }

    /// Unbind a consumer from a repository's distributor.
    ///
    /// Returns the deleted record, or `None` when the triple was not bound
    /// (a successful no-op).
    pub fn unbind(
        &self,
        consumer_id: &str,
        repo_id: &str,
        distributor_id: &str,
    ) -> BindResult<Option<Bind>> {
        let bind = match self.db_ops.get_bind(consumer_id, repo_id, distributor_id)? {
            Some(bind) => bind,
            None => return Ok(None),
        };
        self.db_ops.delete_bind(&bind)?;
        info!(
            "Unbound consumer '{}' from distributor '{}/{}'",
            consumer_id, repo_id, distributor_id
        );
        Ok(Some(bind))
    }

    /// Notification that a consumer has been deleted.
    /// Associated binds are removed.
    pub fn consumer_deleted(&self, consumer_id: &str) -> BindResult<()> {
        let removed = self.remove_matching(|bind| bind.consumer_id == consumer_id)?;
        debug!(
            "Removed {} bind(s) for deleted consumer '{}'",
            removed, consumer_id
        );
        Ok(())
    }

    /// Notification that a repository has been deleted.
    /// Associated binds are removed.
    pub fn repo_deleted(&self, repo_id: &str) -> BindResult<()> {
        let removed = self.remove_matching(|bind| bind.repo_id == repo_id)?;
        debug!("Removed {} bind(s) for deleted repo '{}'", removed, repo_id);
        Ok(())
    }

    /// Notification that a repository's distributor has been deleted.
    /// Associated binds are removed.
    pub fn distributor_deleted(&self, repo_id: &str, distributor_id: &str) -> BindResult<()> {
        let removed = self.remove_matching(|bind| {
            bind.repo_id == repo_id && bind.distributor_id == distributor_id
        })?;
        debug!(
            "Removed {} bind(s) for deleted distributor '{}/{}'",
            removed, repo_id, distributor_id
        );
        Ok(())
    }

    /// Find all binds.
    pub fn find_all(&self) -> BindResult<Vec<Bind>> {
        self.db_ops.list_binds()
    }

    /// Find all binds for a consumer.
    pub fn find_by_consumer(&self, consumer_id: &str) -> BindResult<Vec<Bind>> {
        self.find_matching(|bind| bind.consumer_id == consumer_id)
    }

    /// Find all binds for a repository.
    pub fn find_by_repo(&self, repo_id: &str) -> BindResult<Vec<Bind>> {
        self.find_matching(|bind| bind.repo_id == repo_id)
    }

    /// Find all binds for a repository's distributor.
    pub fn find_by_distributor(
        &self,
        repo_id: &str,
        distributor_id: &str,
    ) -> BindResult<Vec<Bind>> {
        self.find_matching(|bind| {
            bind.repo_id == repo_id && bind.distributor_id == distributor_id
        })
    }

    fn find_matching<F>(&self, predicate: F) -> BindResult<Vec<Bind>>
    where
        F: Fn(&Bind) -> bool,
    {
        Ok(self
            .db_ops
            .list_binds()?
            .into_iter()
            .filter(|bind| predicate(bind))
            .collect())
    }

    fn remove_matching<F>(&self, predicate: F) -> BindResult<usize>
    where
        F: Fn(&Bind) -> bool,
    {
        let matching = self.find_matching(predicate)?;
        let count = matching.len();
        for bind in matching {
            self.db_ops.delete_bind(&bind)?;
        }
        Ok(count)
    }

    fn ensure_consumer(&self, consumer_id: &str) -> BindResult<()> {
        if self.consumers.consumer_exists(consumer_id)? {
            Ok(())
        } else {
            Err(BindError::MissingResource(consumer_id.to_string()))
        }
    }

    fn ensure_distributor(&self, repo_id: &str, distributor_id: &str) -> BindResult<()> {
        if self.distributors.distributor_exists(repo_id, distributor_id)? {
            Ok(())
        } else {
            Err(BindError::MissingResource(format!(
                "{}/{}",
                repo_id, distributor_id
            )))
        }
    }
}
