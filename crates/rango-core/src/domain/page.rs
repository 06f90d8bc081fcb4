// ============================================================================
// Rango Core - Page Entity
// File: crates/rango-core/src/domain/page.rs
// Description: A link stored under a category
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use rango_shared::constants::TITLE_MAX_LENGTH;

use crate::error::DomainError;

/// Page entity. `category_id` must reference an existing category; no
/// cascade behavior is defined when a category disappears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Page {
    pub id: Uuid,

    pub category_id: Uuid,

    #[validate(length(min = 1, max = TITLE_MAX_LENGTH, message = "Page title must be between 1 and 128 characters"))]
    pub title: String,

    #[validate(url(message = "Page url must be a valid URL"))]
    pub url: String,

    #[validate(range(min = 0))]
    pub views: i32,
}

impl Page {
    pub fn new(category_id: Uuid, title: &str, url: &str) -> Result<Self, DomainError> {
        let page = Self {
            id: Uuid::new_v4(),
            category_id,
            title: title.trim().to_string(),
            url: url.trim().to_string(),
            views: 0,
        };

        page.validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        Ok(page)
    }

    /// Count one display of this page.
    pub fn record_view(&mut self) {
        self.views += 1;
    }

    /// Point the page at a different URL.
    pub fn set_url(&mut self, url: &str) -> Result<(), DomainError> {
        self.url = url.trim().to_string();
        self.validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        Ok(())
    }

    /// Zero the view counter, used by the seeding routine.
    pub fn reset_views(&mut self) {
        self.views = 0;
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_page() {
        let category_id = Uuid::new_v4();
        let page = Page::new(category_id, "Flask", "http://flask.pocoo.org").unwrap();
        assert_eq!(page.category_id, category_id);
        assert_eq!(page.views, 0);
    }

    #[test]
    fn test_rejects_invalid_url() {
        let page = Page::new(Uuid::new_v4(), "Bottle", "not a url");
        assert!(matches!(page, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_set_url_and_reset_views() {
        let mut page = Page::new(Uuid::new_v4(), "Flask", "http://flask.pocoo.org").unwrap();
        page.record_view();
        page.record_view();
        assert_eq!(page.views, 2);

        page.set_url("http://bottlepy.org/docs/dev/").unwrap();
        page.reset_views();
        assert_eq!(page.url, "http://bottlepy.org/docs/dev/");
        assert_eq!(page.views, 0);
    }
}
