// ============================================================================
// Rango Infrastructure - Redis Session Store
// File: crates/rango-infrastructure/src/cache/redis_session_store.rs
// ============================================================================
//! Server-side session storage backed by Redis.
//!
//! Each instance is scoped to one caller's session: keys are namespaced
//! under the session id, so the hosting layer constructs one store per
//! request from a shared connection manager.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::time::Duration;
use tracing::error;

use rango_core::error::DomainError;
use rango_core::repositories::SessionStore;

pub struct RedisSessionStore {
    conn: ConnectionManager,
    prefix: String,
}

impl RedisSessionStore {
    /// Scope a store to one session id over a shared connection manager.
    pub fn for_session(conn: ConnectionManager, session_id: &str) -> Self {
        Self {
            conn,
            prefix: format!("session:{}:", session_id),
        }
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

/// Open a managed connection to the Redis session backend.
pub async fn connect(redis_url: &str) -> Result<ConnectionManager, redis::RedisError> {
    let config = redis::aio::ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Some(Duration::from_millis(100)));

    let client = redis::Client::open(redis_url)?;
    client.get_connection_manager_with_config(config).await
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let mut conn = self.conn.clone();
        conn.get(self.namespaced(key)).await.map_err(|e| {
            error!("Redis error reading session key {}: {}", key, e);
            DomainError::SessionError(e.to_string())
        })
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(self.namespaced(key), value)
            .await
            .map_err(|e| {
                error!("Redis error writing session key {}: {}", key, e);
                DomainError::SessionError(e.to_string())
            })
    }
}
