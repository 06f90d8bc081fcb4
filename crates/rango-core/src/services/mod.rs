//! Domain services (business logic)

pub mod catalogue_service;
pub mod seed_service;
pub mod visitor_service;

pub use catalogue_service::{CatalogueService, CategoryView, IndexView};
pub use seed_service::SeedService;
pub use visitor_service::VisitorService;
