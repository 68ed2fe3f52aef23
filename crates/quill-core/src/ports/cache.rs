use async_trait::async_trait;

/// Cache trait - abstraction over key/value caching backends.
///
/// Entries live until they are deleted or the cache is cleared.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Get a value from the cache.
    async fn get(&self, key: &str) -> Option<String>;

    /// Set a value, replacing any previous entry for `key`.
    async fn set(&self, key: &str, value: &str);

    /// Delete a key from the cache.
    async fn delete(&self, key: &str);

    /// Drop every entry.
    async fn clear(&self);
}
