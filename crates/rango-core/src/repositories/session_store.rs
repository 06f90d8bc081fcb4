//! Session store trait (port)
//!
//! Key/value view over one caller's session, mirroring the get/set
//! semantics of a server-side cookie store. An implementation is scoped to
//! a single session; lifetime and expiry are the transport layer's problem.

use async_trait::async_trait;

use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read a session value, `Ok(None)` when the key was never set.
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;
}
