//! Database adapters

pub mod connection;
pub mod postgres;

pub use connection::create_pool;
pub use postgres::{PgCategoryRepository, PgPageRepository};
