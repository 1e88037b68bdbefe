//! Category catalogue backing the storefront filter bar.
//!
//! The catalogue is fixed for the lifetime of a session: categories are
//! enumerated to render the filter pills and looked up by slug to derive the
//! product section heading. There is no mutation and no backend sync.

/// Slug of the sentinel category that disables category filtering.
pub const ALL_CATEGORIES_SLUG: &str = "all";

/// Section heading shown when no registered category is selected.
pub const DEFAULT_SECTION_TITLE: &str = "The Curated Edit";

/// A category offered on the storefront filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    slug: String,
}

impl Category {
    /// Creates a category from its display name and slug.
    #[must_use]
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }

    /// Display name shown to shoppers.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stable identifier sent as the `category` query parameter.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

/// Ordered, read-only category set for one storefront session.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Builds a registry from an ordered category list.
    #[must_use]
    pub const fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Enumerates categories in filter-bar order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by its slug.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.slug == slug)
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new(vec![
            Category::new("All", ALL_CATEGORIES_SLUG),
            Category::new("Fashion", "fashion"),
            Category::new("Beauty", "beauty"),
            Category::new("Home Decor", "home"),
            Category::new("Electronics", "electronics"),
        ])
    }
}
