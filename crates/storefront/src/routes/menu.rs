//! Menu section route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use sweet_treats_core::{CategoryFilter, MenuCategory};
use tracing::instrument;

use super::{CategoryQuery, TabView, tabs};
use crate::catalog::{Catalog, MenuItem};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Menu tabs and cards fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/menu_grid.html")]
pub struct MenuGridTemplate {
    pub tabs: Vec<TabView>,
    pub items: Vec<&'static MenuItem>,
}

impl MenuGridTemplate {
    #[must_use]
    pub fn new(catalog: &Catalog, filter: CategoryFilter<MenuCategory>) -> Self {
        Self {
            tabs: tabs(filter),
            items: catalog.menu_in(filter),
        }
    }
}

/// Parse `?category=` for the menu. Missing or empty means all.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for an unknown category.
pub fn menu_filter(query: &CategoryQuery) -> Result<CategoryFilter<MenuCategory>> {
    CategoryFilter::from_query(query.category.as_deref())
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Menu grid for a category tab (HTMX).
#[instrument(skip(state))]
pub async fn grid(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<MenuGridTemplate> {
    let filter = menu_filter(&query)?;
    Ok(MenuGridTemplate::new(state.catalog(), filter))
}
