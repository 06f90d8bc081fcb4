// ============================================================================
// Rango Core - Category Entity
// File: crates/rango-core/src/domain/category.rs
// Description: Catalogue category with denormalized view/like counters
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use rango_shared::constants::NAME_MAX_LENGTH;

use crate::domain::slug::slugify;
use crate::error::DomainError;

/// Category entity.
///
/// The slug is always the slugified form of the current name: the
/// constructor derives it and [`Category::rename`] re-derives it, so the
/// value handed to a repository is consistent by construction. Both name
/// and slug are unique in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Category {
    pub id: Uuid,

    #[validate(length(min = 1, max = NAME_MAX_LENGTH, message = "Category name must be between 1 and 128 characters"))]
    pub name: String,

    pub slug: String,

    #[validate(range(min = 0))]
    pub views: i32,

    #[validate(range(min = 0))]
    pub likes: i32,
}

impl Category {
    /// Create a category with zeroed counters and a freshly derived slug.
    ///
    /// Names that slugify to an empty string (empty or symbol-only input)
    /// are rejected rather than persisted with a degenerate slug.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let name = name.trim().to_string();
        let slug = slugify(&name);

        if slug.is_empty() {
            return Err(DomainError::UnsluggableName(name));
        }

        let category = Self {
            id: Uuid::new_v4(),
            name,
            slug,
            views: 0,
            likes: 0,
        };

        category
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        Ok(category)
    }

    /// Change the display name, re-deriving the slug in the same step.
    pub fn rename(&mut self, name: &str) -> Result<(), DomainError> {
        let name = name.trim().to_string();
        let slug = slugify(&name);

        if slug.is_empty() {
            return Err(DomainError::UnsluggableName(name));
        }

        self.name = name;
        self.slug = slug;
        self.validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        Ok(())
    }

    /// Count one display of this category.
    pub fn record_view(&mut self) {
        self.views += 1;
    }

    /// Count one like.
    pub fn record_like(&mut self) {
        self.likes += 1;
    }

    /// Overwrite both counters, used by the seeding routine.
    pub fn overwrite_counters(&mut self, views: i32, likes: i32) {
        self.views = views.max(0);
        self.likes = likes.max(0);
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
