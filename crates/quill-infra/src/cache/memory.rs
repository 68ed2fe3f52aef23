//! In-memory cache implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::ports::Cache;

/// In-memory cache using a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryCache {
    store: RwLock<HashMap<String, String>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        self.store.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        let mut store = self.store.write().await;
        store.insert(key.to_string(), value.to_string());
    }

    async fn delete(&self, key: &str) {
        let mut store = self.store.write().await;
        store.remove(key);
    }

    async fn clear(&self) {
        self.store.write().await.clear();
    }
}
