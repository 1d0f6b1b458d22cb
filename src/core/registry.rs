use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use tracing::{debug, info};
use crate::core::config::IndexConfig;
use crate::core::error::Result;
use crate::core::search_index::SearchIndex;

/// Handle to one index; writers take the write lock, searches the read lock
pub type SharedIndex = Arc<RwLock<SearchIndex>>;

/// Registry for managing named, independent indexes
pub struct IndexRegistry {
    config: IndexConfig,
    indexes: RwLock<HashMap<String, SharedIndex>>,
}

impl Default for IndexRegistry {
    fn default() -> Self {
        IndexRegistry {
            config: IndexConfig::default(),
            indexes: RwLock::new(HashMap::new()),
        }
    }
}

impl IndexRegistry {
    pub fn new() -> Self {
        IndexRegistry::default()
    }

    /// Every index created by this registry uses `config`.
    pub fn with_config(config: IndexConfig) -> Result<Self> {
        config.validate()?;
        Ok(IndexRegistry {
            config,
            indexes: RwLock::new(HashMap::new()),
        })
    }

    fn new_index(&self) -> SharedIndex {
        let index = SearchIndex::with_config(self.config.clone()).unwrap_or_default();
        Arc::new(RwLock::new(index))
    }

    /// Returns the named index, creating an empty one on first use.
    pub fn get_index(&self, name: &str) -> SharedIndex {
        // Fast path: already registered
        if let Some(index) = self.indexes.read().get(name) {
            return Arc::clone(index);
        }

        let mut indexes = self.indexes.write();
        Arc::clone(indexes.entry(name.to_string()).or_insert_with(|| {
            debug!(name, "index created on first use");
            self.new_index()
        }))
    }

    /// Creates a fresh index under `name`, clearing any index it replaces.
    pub fn create_index(&self, name: &str) -> SharedIndex {
        let index = self.new_index();
        let replaced = self.indexes.write().insert(name.to_string(), Arc::clone(&index));
        if let Some(old) = replaced {
            old.write().clear();
            info!(name, "index replaced");
        } else {
            info!(name, "index created");
        }
        index
    }

    /// Clears and drops the named index. Returns false if it did not exist.
    pub fn delete_index(&self, name: &str) -> bool {
        let removed = self.indexes.write().remove(name);
        match removed {
            Some(index) => {
                index.write().clear();
                info!(name, "index deleted");
                true
            }
            None => false,
        }
    }

    pub fn clear_all(&self) {
        let indexes = self.indexes.read();
        for index in indexes.values() {
            index.write().clear();
        }
        info!(count = indexes.len(), "all indexes cleared");
    }

    /// Registered index names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.indexes.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.indexes.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.indexes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.read().is_empty()
    }
}
