//! Repository traits (ports)

pub mod category_repository;
pub mod page_repository;
pub mod session_store;

pub use category_repository::CategoryRepository;
pub use page_repository::PageRepository;
pub use session_store::SessionStore;
