//! In-memory adapters
//!
//! Back the same ports as the PostgreSQL/Redis adapters with plain maps,
//! for tests and for embedding without external services.

pub mod category_repo;
pub mod page_repo;
pub mod session_store;

pub use category_repo::MemoryCategoryRepository;
pub use page_repo::MemoryPageRepository;
pub use session_store::MemorySessionStore;
