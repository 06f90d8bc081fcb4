//! Category repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Category;
use crate::error::DomainError;

/// Persistence port for categories. Absence is reported as `Ok(None)`;
/// uniqueness violations surface from the backing store as
/// `CategoryNameAlreadyExists` / `CategorySlugAlreadyExists`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Category>, DomainError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, DomainError>;
    async fn list_all(&self) -> Result<Vec<Category>, DomainError>;
    /// Categories with the most likes first.
    async fn list_top_by_likes(&self, limit: i64) -> Result<Vec<Category>, DomainError>;
    async fn create(&self, category: &Category) -> Result<Category, DomainError>;
    async fn update(&self, category: &Category) -> Result<Category, DomainError>;
}
