//! In-memory page repository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use rango_core::domain::Page;
use rango_core::error::DomainError;
use rango_core::repositories::PageRepository;

#[derive(Default)]
pub struct MemoryPageRepository {
    pages: RwLock<HashMap<Uuid, Page>>,
}

impl MemoryPageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PageRepository for MemoryPageRepository {
    async fn find_by_category_and_title(
        &self,
        category_id: &Uuid,
        title: &str,
    ) -> Result<Option<Page>, DomainError> {
        Ok(self
            .pages
            .read()
            .await
            .values()
            .find(|p| p.category_id == *category_id && p.title == title)
            .cloned())
    }

    async fn list_by_category(&self, category_id: &Uuid) -> Result<Vec<Page>, DomainError> {
        let mut pages: Vec<Page> = self
            .pages
            .read()
            .await
            .values()
            .filter(|p| p.category_id == *category_id)
            .cloned()
            .collect();
        pages.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(pages)
    }

    async fn list_top_by_views(&self, limit: i64) -> Result<Vec<Page>, DomainError> {
        let mut pages: Vec<Page> = self.pages.read().await.values().cloned().collect();
        pages.sort_by(|a, b| b.views.cmp(&a.views));
        pages.truncate(limit.max(0) as usize);
        Ok(pages)
    }

    async fn create(&self, page: &Page) -> Result<Page, DomainError> {
        self.pages.write().await.insert(page.id, page.clone());
        Ok(page.clone())
    }

    async fn update(&self, page: &Page) -> Result<Page, DomainError> {
        let mut pages = self.pages.write().await;
        if !pages.contains_key(&page.id) {
            return Err(DomainError::PageNotFound);
        }
        pages.insert(page.id, page.clone());
        Ok(page.clone())
    }
}
