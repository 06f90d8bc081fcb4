//! Page repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Page;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageRepository: Send + Sync {
    async fn find_by_category_and_title(
        &self,
        category_id: &Uuid,
        title: &str,
    ) -> Result<Option<Page>, DomainError>;
    async fn list_by_category(&self, category_id: &Uuid) -> Result<Vec<Page>, DomainError>;
    /// Pages with the most views first.
    async fn list_top_by_views(&self, limit: i64) -> Result<Vec<Page>, DomainError>;
    async fn create(&self, page: &Page) -> Result<Page, DomainError>;
    async fn update(&self, page: &Page) -> Result<Page, DomainError>;
}
