// ============================================================================
// Rango Core - Seed Service
// File: crates/rango-core/src/services/seed_service.rs
// ============================================================================
//! Idempotent population of the catalogue with the sample data set

use std::sync::Arc;

use tracing::info;

use crate::domain::{Category, Page};
use crate::error::DomainError;
use crate::repositories::{CategoryRepository, PageRepository};

/// One category of the fixed sample catalogue.
struct SeedCategory {
    name: &'static str,
    views: i32,
    likes: i32,
    pages: &'static [(&'static str, &'static str)],
}

/// The sample catalogue: 3 categories, 8 pages.
const SEED_DATA: &[SeedCategory] = &[
    SeedCategory {
        name: "Python",
        views: 128,
        likes: 64,
        pages: &[
            ("Official Python Tutorial", "http://docs.python.org/2/tutorial/"),
            ("How to think like a Computer Scientist", "http://www.greenteapress.com/thinkpython/"),
            ("Learn Python in 10 minutes", "http://www.korokithakia.net/tutorials/python/"),
        ],
    },
    SeedCategory {
        name: "Django",
        views: 64,
        likes: 32,
        pages: &[
            ("Official Django tutorial", "https://docs.djangoproject.com/en/1.9/intro/tutorial01/"),
            ("Django Rocks", "http://www.djangorocks.com/"),
            ("How to Tango with Django", "http://www.tangowithdjango.com/"),
        ],
    },
    SeedCategory {
        name: "Other Frameworks",
        views: 32,
        likes: 16,
        pages: &[
            ("Bottle", "http://bottlepy.org/docs/dev/"),
            ("Flask", "http://flask.pocoo.org"),
        ],
    },
];

/// Populates the catalogue with the fixed sample data. Re-running converges
/// on the same final state: categories and pages are matched up by their
/// natural keys and overwritten, never duplicated.
pub struct SeedService<C: CategoryRepository, P: PageRepository> {
    category_repo: Arc<C>,
    page_repo: Arc<P>,
}

impl<C: CategoryRepository, P: PageRepository> SeedService<C, P> {
    pub fn new(category_repo: Arc<C>, page_repo: Arc<P>) -> Self {
        Self {
            category_repo,
            page_repo,
        }
    }

    /// Ensure every seed category and page exists with the fixed field
    /// values.
    pub async fn seed(&self) -> Result<(), DomainError> {
        for entry in SEED_DATA {
            let category = self.ensure_category(entry).await?;
            for (title, url) in entry.pages {
                self.ensure_page(&category, title, url).await?;
            }
        }
        Ok(())
    }

    /// Get-or-create by name, then overwrite counters and save. The save
    /// goes through the entity, so the slug it carries was derived from the
    /// current name.
    async fn ensure_category(&self, entry: &SeedCategory) -> Result<Category, DomainError> {
        let mut category = match self.category_repo.find_by_name(entry.name).await? {
            Some(existing) => existing,
            None => {
                let created = self.category_repo.create(&Category::new(entry.name)?).await?;
                info!("Created category: {}", created.name);
                created
            }
        };

        category.overwrite_counters(entry.views, entry.likes);
        self.category_repo.update(&category).await
    }

    /// Get-or-create by (category, title), then overwrite the url and reset
    /// the view counter.
    async fn ensure_page(
        &self,
        category: &Category,
        title: &str,
        url: &str,
    ) -> Result<Page, DomainError> {
        let mut page = match self
            .page_repo
            .find_by_category_and_title(&category.id, title)
            .await?
        {
            Some(existing) => existing,
            None => {
                let created = self.page_repo.create(&Page::new(category.id, title, url)?).await?;
                info!("Created page: {} - {}", category.name, created.title);
                created
            }
        };

        page.set_url(url)?;
        page.reset_views();
        self.page_repo.update(&page).await
    }

    /// Human-readable `"{category} - {page}"` lines for everything stored,
    /// printed by the population script after seeding.
    pub async fn listing(&self) -> Result<Vec<String>, DomainError> {
        let mut lines = Vec::new();
        for category in self.category_repo.list_all().await? {
            for page in self.page_repo.list_by_category(&category.id).await? {
                lines.push(format!("{} - {}", category, page));
            }
        }
        Ok(lines)
    }
}
