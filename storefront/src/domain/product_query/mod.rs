//! Product query controller: filter state, fetch triggers, and the grid.
//!
//! A fetch runs on every category change (the initial load included) and on
//! explicit search submission or refresh. Typing query text never fetches by
//! itself; the text is held until the shopper submits. Every failure
//! collapses to an empty grid at this boundary, so consumers only ever see
//! products or nothing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::domain::catalogue::{
    ALL_CATEGORIES_SLUG, Category, CategoryRegistry, DEFAULT_SECTION_TITLE,
};
use crate::domain::ports::{ProductFilter, ProductSource};
use crate::domain::product::Product;

#[derive(Debug, Default)]
struct QueryState {
    filter: ProductFilter,
    products: Vec<Product>,
    loading: bool,
}

/// Owns the filter state and the query result set for one storefront
/// session.
///
/// Share the controller behind an [`Arc`] to observe the loading flag and
/// product snapshots while a fetch is in flight. Overlapping fetches are not
/// cancelled: all of them run to completion and whichever resolves last
/// overwrites the grid. No request tagging discards stale responses.
///
/// ```rust,ignore
/// let controller = ProductQueryController::new(source, CategoryRegistry::default());
/// controller.start().await;
/// controller.set_active_category("fashion").await;
/// assert_eq!(controller.section_title(), "Fashion");
/// ```
pub struct ProductQueryController {
    source: Arc<dyn ProductSource>,
    registry: CategoryRegistry,
    state: Mutex<QueryState>,
}

impl ProductQueryController {
    /// Wires a controller. Performs no I/O until [`start`](Self::start).
    #[must_use]
    pub fn new(source: Arc<dyn ProductSource>, registry: CategoryRegistry) -> Self {
        Self {
            source,
            registry,
            state: Mutex::new(QueryState::default()),
        }
    }

    /// Runs the automatic initial fetch with the default filter.
    pub async fn start(&self) {
        self.fetch_products().await;
    }

    /// Selects a category and immediately refetches with the updated state.
    ///
    /// Slugs are forwarded without validation; an unregistered slug simply
    /// yields whatever the backend returns for it.
    pub async fn set_active_category(&self, slug: impl Into<String>) {
        {
            let mut state = self.state_guard();
            state.filter.active_category = slug.into();
        }
        self.fetch_products().await;
    }

    /// Holds new query text without fetching.
    ///
    /// Text only reaches the API on an explicit
    /// [`submit_search`](Self::submit_search) or [`refresh`](Self::refresh),
    /// never per keystroke.
    pub fn set_query_text(&self, text: impl Into<String>) {
        self.state_guard().filter.query_text = text.into();
    }

    /// Fetches with the current filter state; the search form's submit.
    pub async fn submit_search(&self) {
        self.fetch_products().await;
    }

    /// Refetches with the current filter state, unchanged.
    pub async fn refresh(&self) {
        self.fetch_products().await;
    }

    /// Snapshot of the current grid, in API order.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.state_guard().products.clone()
    }

    /// True strictly while a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state_guard().loading
    }

    /// Currently selected category slug.
    #[must_use]
    pub fn active_category(&self) -> String {
        self.state_guard().filter.active_category.clone()
    }

    /// Currently held query text.
    #[must_use]
    pub fn query_text(&self) -> String {
        self.state_guard().filter.query_text.clone()
    }

    /// Categories for the filter bar, in registry order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        self.registry.categories()
    }

    /// Section heading derived from the active category.
    ///
    /// The sentinel slug and any slug the registry does not know both fall
    /// back to [`DEFAULT_SECTION_TITLE`].
    #[must_use]
    pub fn section_title(&self) -> String {
        let active = self.active_category();
        if active == ALL_CATEGORIES_SLUG {
            return DEFAULT_SECTION_TITLE.to_owned();
        }
        self.registry.find_by_slug(&active).map_or_else(
            || DEFAULT_SECTION_TITLE.to_owned(),
            |category| category.name().to_owned(),
        )
    }

    /// Single entry point that talks to the source and updates the grid.
    ///
    /// The lock is released across the await so snapshots stay readable
    /// while the request is in flight. The outcome lands in one scope so the
    /// grid and the loading flag always change together, on the failure path
    /// too.
    async fn fetch_products(&self) {
        let filter = {
            let mut state = self.state_guard();
            state.loading = true;
            state.filter.clone()
        };

        let products = match self.source.search(&filter).await {
            Ok(products) => {
                debug!(count = products.len(), "product fetch resolved");
                products
            }
            Err(error) => {
                // Consumers cannot tell failures from empty results; the log
                // line is where the distinction survives.
                warn!(%error, "product fetch failed; clearing the grid");
                Vec::new()
            }
        };

        let mut state = self.state_guard();
        state.products = products;
        state.loading = false;
    }

    fn state_guard(&self) -> MutexGuard<'_, QueryState> {
        // State writes are plain field assignments that cannot panic
        // mid-update, so a poisoned guard still holds consistent data.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
