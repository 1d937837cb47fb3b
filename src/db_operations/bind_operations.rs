use super::core::DbOperations;
use crate::bind::types::{storage_key, Bind};
use crate::error::BindResult;

impl DbOperations {
    /// Inserts a bind record.
    ///
    /// The keyed tree enforces uniqueness of the triple: inserting an
    /// already-present bind is a no-op. Returns whether the record was new.
    pub fn insert_bind(&self, bind: &Bind) -> BindResult<bool> {
        self.insert_unique_in_tree(&self.binds_tree, &bind.storage_key(), bind)
    }

    /// Gets the bind for an exact triple, `None` when absent.
    pub fn get_bind(
        &self,
        consumer_id: &str,
        repo_id: &str,
        distributor_id: &str,
    ) -> BindResult<Option<Bind>> {
        let key = storage_key(consumer_id, repo_id, distributor_id);
        self.get_from_tree(&self.binds_tree, &key)
    }

    /// Deletes the bind for an exact triple. Returns whether it existed.
    pub fn delete_bind(&self, bind: &Bind) -> BindResult<bool> {
        self.delete_from_tree(&self.binds_tree, &bind.storage_key())
    }

    /// Lists every stored bind.
    pub fn list_binds(&self) -> BindResult<Vec<Bind>> {
        self.list_items_in_tree(&self.binds_tree)
    }
}
