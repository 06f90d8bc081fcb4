//! # Rango Core - Domain Module
//!
//! Domain entities for the catalogue.

pub mod category;
pub mod page;
pub mod slug;
pub mod visit;

// Re-export all entities
pub use category::Category;
pub use page::Page;
pub use slug::slugify;
pub use visit::{VisitPolicy, VisitState};
