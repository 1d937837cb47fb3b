use crate::config::BindStoreConfig;
use crate::error::BindResult;
use serde::{de::DeserializeOwned, Serialize};

/// Unified access to the underlying document store.
///
/// Holds cached sled trees, one tree per collection. Records are stored
/// as JSON documents keyed by a collection-specific string key.
#[derive(Clone)]
pub struct DbOperations {
    pub(crate) binds_tree: sled::Tree,
}

impl DbOperations {
    /// Creates a new DbOperations instance with all required trees.
    ///
    /// The tree handles keep the database alive; the `Db` itself is not
    /// retained.
    pub fn new(db: sled::Db) -> Result<Self, sled::Error> {
        let binds_tree = db.open_tree("binds")?;
        Ok(Self { binds_tree })
    }

    /// Opens the store at the configured storage path.
    pub fn open(config: &BindStoreConfig) -> BindResult<Self> {
        let db = sled::open(&config.storage_path)?;
        Ok(Self::new(db)?)
    }

    /// Stores a serializable record in a tree, replacing any existing
    /// record under the same key.
    pub(crate) fn store_in_tree<T: Serialize>(
        &self,
        tree: &sled::Tree,
        key: &str,
        item: &T,
    ) -> BindResult<()> {
        let bytes = serde_json::to_vec(item)?;
        tree.insert(key.as_bytes(), bytes)?;
        tree.flush()?;
        Ok(())
    }

    /// Inserts a record only if the key is not already present.
    ///
    /// Returns `true` when the record was inserted, `false` when a record
    /// already existed under the key. This is the uniqueness constraint for
    /// keyed collections; the losing insert leaves the tree untouched.
    pub(crate) fn insert_unique_in_tree<T: Serialize>(
        &self,
        tree: &sled::Tree,
        key: &str,
        item: &T,
    ) -> BindResult<bool> {
        let bytes = serde_json::to_vec(item)?;
        let outcome = tree.compare_and_swap(
            key.as_bytes(),
            None as Option<&[u8]>,
            Some(bytes),
        )?;
        match outcome {
            Ok(()) => {
                tree.flush()?;
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }

    /// Retrieves a record from a tree, `None` when the key is absent.
    pub(crate) fn get_from_tree<T: DeserializeOwned>(
        &self,
        tree: &sled::Tree,
        key: &str,
    ) -> BindResult<Option<T>> {
        match tree.get(key.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Deletes a record from a tree. Returns whether the key existed.
    pub(crate) fn delete_from_tree(&self, tree: &sled::Tree, key: &str) -> BindResult<bool> {
        let existed = tree.remove(key.as_bytes())?.is_some();
        tree.flush()?;
        Ok(existed)
    }

    /// Lists every record in a tree, in key order.
    pub(crate) fn list_items_in_tree<T: DeserializeOwned>(
        &self,
        tree: &sled::Tree,
    ) -> BindResult<Vec<T>> {
        let mut items = Vec::new();
        for result in tree.iter() {
            let (_, value) = result?;
            items.push(serde_json::from_slice(&value)?);
        }
        Ok(items)
    }
}
