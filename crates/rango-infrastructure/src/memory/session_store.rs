//! In-memory session store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use rango_core::error::DomainError;
use rango_core::repositories::SessionStore;

/// One caller's session as a plain key/value map.
#[derive(Default)]
pub struct MemorySessionStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_returns_none_for_unset_key() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get("visits").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemorySessionStore::new();
        store.set("visits", "3").await.unwrap();
        assert_eq!(store.get("visits").await.unwrap(), Some("3".to_string()));
    }
}
