//! # Rango Infrastructure
//!
//! Storage and session adapters: PostgreSQL repositories, a Redis-backed
//! session store, and in-memory equivalents for tests and embedding.

pub mod cache;
pub mod database;
pub mod memory;

pub use cache::RedisSessionStore;
pub use database::{create_pool, PgCategoryRepository, PgPageRepository};
pub use memory::{MemoryCategoryRepository, MemoryPageRepository, MemorySessionStore};
