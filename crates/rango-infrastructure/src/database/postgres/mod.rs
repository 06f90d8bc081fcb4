//! PostgreSQL repository implementations

pub mod category_repo_impl;
pub mod page_repo_impl;

pub use category_repo_impl::PgCategoryRepository;
pub use page_repo_impl::PgPageRepository;
