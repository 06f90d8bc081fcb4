// ============================================================================
// Rango Core - Catalogue Service
// File: crates/rango-core/src/services/catalogue_service.rs
// ============================================================================
//! Browse and edit operations over the category/page catalogue

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use rango_shared::constants::TOP_ITEMS_LIMIT;

use crate::domain::{Category, Page};
use crate::error::DomainError;
use crate::repositories::{CategoryRepository, PageRepository};

/// Data behind the home view: the most-liked categories and the
/// most-viewed pages.
#[derive(Debug, Serialize)]
pub struct IndexView {
    pub categories: Vec<Category>,
    pub pages: Vec<Page>,
}

/// Data behind the category view. An unknown slug is represented by
/// `category: None` with no pages; the caller renders an absent-category
/// state instead of failing.
#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub category: Option<Category>,
    pub pages: Vec<Page>,
}

/// Catalogue browsing and editing, called by the hosting web layer.
pub struct CatalogueService<C: CategoryRepository, P: PageRepository> {
    category_repo: Arc<C>,
    page_repo: Arc<P>,
}

impl<C: CategoryRepository, P: PageRepository> CatalogueService<C, P> {
    pub fn new(category_repo: Arc<C>, page_repo: Arc<P>) -> Self {
        Self {
            category_repo,
            page_repo,
        }
    }

    /// Top five categories by likes and top five pages by views.
    pub async fn index_view(&self) -> Result<IndexView, DomainError> {
        let categories = self.category_repo.list_top_by_likes(TOP_ITEMS_LIMIT).await?;
        let pages = self.page_repo.list_top_by_views(TOP_ITEMS_LIMIT).await?;
        Ok(IndexView { categories, pages })
    }

    /// Look up a category by slug together with its pages.
    ///
    /// An unknown slug is a recoverable outcome, not an error.
    pub async fn show_category(&self, slug: &str) -> Result<CategoryView, DomainError> {
        match self.category_repo.find_by_slug(slug).await? {
            Some(category) => {
                let pages = self.page_repo.list_by_category(&category.id).await?;
                Ok(CategoryView {
                    category: Some(category),
                    pages,
                })
            }
            None => {
                warn!("Category not found for slug: {}", slug);
                Ok(CategoryView {
                    category: None,
                    pages: Vec::new(),
                })
            }
        }
    }

    /// Create a category from a display name, deriving its slug.
    pub async fn add_category(&self, name: &str) -> Result<Category, DomainError> {
        let category = Category::new(name)?;

        if self.category_repo.find_by_name(&category.name).await?.is_some() {
            warn!("Category name already exists: {}", category.name);
            return Err(DomainError::CategoryNameAlreadyExists(category.name));
        }

        let created = self.category_repo.create(&category).await?;
        info!("Category added: {} ({})", created.name, created.slug);
        Ok(created)
    }

    /// Create a page under an existing category, with views starting at 0.
    pub async fn add_page(
        &self,
        category_slug: &str,
        title: &str,
        url: &str,
    ) -> Result<Page, DomainError> {
        let category = self
            .category_repo
            .find_by_slug(category_slug)
            .await?
            .ok_or_else(|| DomainError::CategoryNotFoundBySlug(category_slug.to_string()))?;

        let page = Page::new(category.id, title, url)?;
        let created = self.page_repo.create(&page).await?;
        info!("Page added to {}: {}", category.name, created.title);
        Ok(created)
    }

    /// The defined update operation for the likes counter.
    pub async fn like_category(&self, slug: &str) -> Result<Category, DomainError> {
        let mut category = self
            .category_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::CategoryNotFoundBySlug(slug.to_string()))?;

        category.record_like();
        self.category_repo.update(&category).await
    }

    /// The defined update operation for the views counter.
    pub async fn record_category_view(&self, slug: &str) -> Result<Category, DomainError> {
        let mut category = self
            .category_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::CategoryNotFoundBySlug(slug.to_string()))?;

        category.record_view();
        self.category_repo.update(&category).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::category_repository::MockCategoryRepository;
    use crate::repositories::page_repository::MockPageRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_show_category_unknown_slug_is_not_an_error() {
        let mut category_repo = MockCategoryRepository::new();
        category_repo
            .expect_find_by_slug()
            .with(eq("no-such-category"))
            .returning(|_| Ok(None));
        let page_repo = MockPageRepository::new();

        let service = CatalogueService::new(Arc::new(category_repo), Arc::new(page_repo));
        let view = service.show_category("no-such-category").await.unwrap();

        assert!(view.category.is_none());
        assert!(view.pages.is_empty());
    }

    #[tokio::test]
    async fn test_show_category_returns_category_with_pages() {
        let category = Category::new("Python").unwrap();
        let category_id = category.id;
        let page = Page::new(category_id, "Official Python Tutorial", "http://docs.python.org/2/tutorial/").unwrap();

        let mut category_repo = MockCategoryRepository::new();
        let found = category.clone();
        category_repo
            .expect_find_by_slug()
            .with(eq("python"))
            .returning(move |_| Ok(Some(found.clone())));

        let mut page_repo = MockPageRepository::new();
        let listed = page.clone();
        page_repo
            .expect_list_by_category()
            .with(eq(category_id))
            .returning(move |_| Ok(vec![listed.clone()]));

        let service = CatalogueService::new(Arc::new(category_repo), Arc::new(page_repo));
        let view = service.show_category("python").await.unwrap();

        assert_eq!(view.category.unwrap().name, "Python");
        assert_eq!(view.pages.len(), 1);
    }

    #[tokio::test]
    async fn test_add_category_rejects_duplicate_name() {
        let existing = Category::new("Python").unwrap();

        let mut category_repo = MockCategoryRepository::new();
        category_repo
            .expect_find_by_name()
            .with(eq("Python"))
            .returning(move |_| Ok(Some(existing.clone())));
        let page_repo = MockPageRepository::new();

        let service = CatalogueService::new(Arc::new(category_repo), Arc::new(page_repo));
        let result = service.add_category("Python").await;

        assert!(matches!(
            result,
            Err(DomainError::CategoryNameAlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_add_page_requires_existing_category() {
        let mut category_repo = MockCategoryRepository::new();
        category_repo
            .expect_find_by_slug()
            .with(eq("missing"))
            .returning(|_| Ok(None));
        let page_repo = MockPageRepository::new();

        let service = CatalogueService::new(Arc::new(category_repo), Arc::new(page_repo));
        let result = service.add_page("missing", "Flask", "http://flask.pocoo.org").await;

        assert!(matches!(
            result,
            Err(DomainError::CategoryNotFoundBySlug(_))
        ));
    }

    #[tokio::test]
    async fn test_like_category_increments_and_persists() {
        let category = Category::new("Django").unwrap();

        let mut category_repo = MockCategoryRepository::new();
        let found = category.clone();
        category_repo
            .expect_find_by_slug()
            .with(eq("django"))
            .returning(move |_| Ok(Some(found.clone())));
        category_repo
            .expect_update()
            .withf(|c| c.likes == 1)
            .returning(|c| Ok(c.clone()));
        let page_repo = MockPageRepository::new();

        let service = CatalogueService::new(Arc::new(category_repo), Arc::new(page_repo));
        let updated = service.like_category("django").await.unwrap();

        assert_eq!(updated.likes, 1);
    }
}
