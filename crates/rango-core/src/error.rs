//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Category not found: {0}")]
    CategoryNotFoundBySlug(String),

    #[error("Category name already exists: {0}")]
    CategoryNameAlreadyExists(String),

    #[error("Category slug already exists: {0}")]
    CategorySlugAlreadyExists(String),

    #[error("Page not found")]
    PageNotFound,

    #[error("Category name produces an empty slug: {0:?}")]
    UnsluggableName(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
