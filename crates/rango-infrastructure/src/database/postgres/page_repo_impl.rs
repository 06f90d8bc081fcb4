// ============================================================================
// Rango Infrastructure - PostgreSQL Page Repository
// File: crates/rango-infrastructure/src/database/postgres/page_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use rango_core::domain::Page;
use rango_core::error::DomainError;
use rango_core::repositories::PageRepository;

pub struct PgPageRepository {
    pool: PgPool,
}

impl PgPageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct PageRow {
    pub id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub url: String,
    pub views: i32,
}

impl From<PageRow> for Page {
    fn from(row: PageRow) -> Self {
        Page {
            id: row.id,
            category_id: row.category_id,
            title: row.title,
            url: row.url,
            views: row.views,
        }
    }
}

#[async_trait]
impl PageRepository for PgPageRepository {
    async fn find_by_category_and_title(
        &self,
        category_id: &Uuid,
        title: &str,
    ) -> Result<Option<Page>, DomainError> {
        let row: Option<PageRow> = sqlx::query_as(
            r#"
            SELECT id, category_id, title, url, views
            FROM pages
            WHERE category_id = $1 AND title = $2
            "#,
        )
        .bind(category_id)
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding page by category and title: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_by_category(&self, category_id: &Uuid) -> Result<Vec<Page>, DomainError> {
        let rows: Vec<PageRow> = sqlx::query_as(
            r#"
            SELECT id, category_id, title, url, views
            FROM pages
            WHERE category_id = $1
            ORDER BY title
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing pages by category: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn list_top_by_views(&self, limit: i64) -> Result<Vec<Page>, DomainError> {
        let rows: Vec<PageRow> = sqlx::query_as(
            r#"
            SELECT id, category_id, title, url, views
            FROM pages
            ORDER BY views DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing top pages: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, page: &Page) -> Result<Page, DomainError> {
        info!("Creating page: {}", page.title);

        let row: PageRow = sqlx::query_as(
            r#"
            INSERT INTO pages (id, category_id, title, url, views)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, category_id, title, url, views
            "#,
        )
        .bind(page.id)
        .bind(page.category_id)
        .bind(&page.title)
        .bind(&page.url)
        .bind(page.views)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating page: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    async fn update(&self, page: &Page) -> Result<Page, DomainError> {
        let row: PageRow = sqlx::query_as(
            r#"
            UPDATE pages
            SET category_id = $2, title = $3, url = $4, views = $5
            WHERE id = $1
            RETURNING id, category_id, title, url, views
            "#,
        )
        .bind(page.id)
        .bind(page.category_id)
        .bind(&page.title)
        .bind(&page.url)
        .bind(page.views)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating page: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }
}
