//! In-memory category repository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use rango_core::domain::Category;
use rango_core::error::DomainError;
use rango_core::repositories::CategoryRepository;

/// Map-backed `CategoryRepository` enforcing the same name/slug uniqueness
/// the relational schema does.
#[derive(Default)]
pub struct MemoryCategoryRepository {
    categories: RwLock<HashMap<Uuid, Category>>,
}

impl MemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Category>, DomainError> {
        Ok(self.categories.read().await.get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        Ok(self
            .categories
            .read()
            .await
            .values()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, DomainError> {
        Ok(self
            .categories
            .read()
            .await
            .values()
            .find(|c| c.slug == slug)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Category>, DomainError> {
        let mut all: Vec<Category> = self.categories.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn list_top_by_likes(&self, limit: i64) -> Result<Vec<Category>, DomainError> {
        let mut all: Vec<Category> = self.categories.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.likes.cmp(&a.likes));
        all.truncate(limit.max(0) as usize);
        Ok(all)
    }

    async fn create(&self, category: &Category) -> Result<Category, DomainError> {
        let mut categories = self.categories.write().await;
        if categories.values().any(|c| c.name == category.name) {
            return Err(DomainError::CategoryNameAlreadyExists(category.name.clone()));
        }
        if categories.values().any(|c| c.slug == category.slug) {
            return Err(DomainError::CategorySlugAlreadyExists(category.slug.clone()));
        }
        categories.insert(category.id, category.clone());
        Ok(category.clone())
    }

    async fn update(&self, category: &Category) -> Result<Category, DomainError> {
        let mut categories = self.categories.write().await;
        if !categories.contains_key(&category.id) {
            return Err(DomainError::CategoryNotFound);
        }
        if categories
            .values()
            .any(|c| c.id != category.id && c.name == category.name)
        {
            return Err(DomainError::CategoryNameAlreadyExists(category.name.clone()));
        }
        if categories
            .values()
            .any(|c| c.id != category.id && c.slug == category.slug)
        {
            return Err(DomainError::CategorySlugAlreadyExists(category.slug.clone()));
        }
        categories.insert(category.id, category.clone());
        Ok(category.clone())
    }
}
