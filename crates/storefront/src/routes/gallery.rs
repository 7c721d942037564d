//! Gallery route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use sweet_treats_core::{CategoryFilter, GalleryCategory};
use tracing::instrument;

use super::{CategoryQuery, TabView, scroll_event, tabs};
use crate::catalog::{Catalog, GalleryItem, GalleryKey};
use crate::error::{AppError, Result};
use crate::middleware::Shopper;
use crate::models::ShopSession;
use crate::state::AppState;

/// Gallery tabs and picture grid fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/gallery_grid.html")]
pub struct GalleryGridTemplate {
    pub tabs: Vec<TabView>,
    pub category: &'static str,
    pub items: Vec<&'static GalleryItem>,
}

impl GalleryGridTemplate {
    #[must_use]
    pub fn new(catalog: &Catalog, filter: CategoryFilter<GalleryCategory>) -> Self {
        Self {
            tabs: tabs(filter),
            category: filter.slug(),
            items: catalog.gallery_in(filter),
        }
    }
}

/// Full-screen viewer fragment (for HTMX). Empty while closed.
#[derive(Template, WebTemplate)]
#[template(path = "partials/gallery_viewer.html")]
pub struct GalleryViewerTemplate {
    pub item: Option<&'static GalleryItem>,
    /// Label of the tab being browsed.
    pub tab: &'static str,
    pub position: String,
    pub fullscreen: bool,
}

impl GalleryViewerTemplate {
    #[must_use]
    pub fn new(session: &ShopSession) -> Self {
        session.gallery().map_or(
            Self {
                item: None,
                tab: "",
                position: String::new(),
                fullscreen: false,
            },
            |viewer| Self {
                item: Some(viewer.current()),
                tab: viewer.filter().label(),
                position: viewer.position(),
                fullscreen: viewer.is_fullscreen(),
            },
        )
    }
}

fn gallery_filter(category: Option<&str>) -> Result<CategoryFilter<GalleryCategory>> {
    CategoryFilter::from_query(category).map_err(|e| AppError::BadRequest(e.to_string()))
}

fn viewer_response(session: &ShopSession) -> Response {
    (
        AppendHeaders([("HX-Trigger", scroll_event(session))]),
        GalleryViewerTemplate::new(session),
    )
        .into_response()
}

/// Which picture to open.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ViewQuery {
    pub category: Option<String>,
    pub index: usize,
}

/// A key pressed while the viewer is open.
#[derive(Debug, Deserialize)]
pub struct KeyForm {
    pub key: String,
}

/// Gallery grid for a category tab (HTMX).
#[instrument(skip(state))]
pub async fn grid(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<GalleryGridTemplate> {
    let filter = gallery_filter(query.category.as_deref())?;
    Ok(GalleryGridTemplate::new(state.catalog(), filter))
}

/// Open the viewer on one picture of a tab (HTMX).
#[instrument(skip(state, shopper), fields(shopper_id = %shopper.id))]
pub async fn view(
    State(state): State<AppState>,
    shopper: Shopper,
    Query(query): Query<ViewQuery>,
) -> Result<Response> {
    let filter = gallery_filter(query.category.as_deref())?;
    let mut session = shopper.lock().await;
    if !session.open_gallery(state.catalog(), filter, query.index) {
        return Err(AppError::NotFound(format!("no pictures under {filter}")));
    }
    Ok(viewer_response(&session))
}

/// Keyboard shortcut on the viewer (HTMX).
///
/// Keys the viewer does not know are ignored.
#[instrument(skip(shopper), fields(shopper_id = %shopper.id))]
pub async fn key(shopper: Shopper, Form(form): Form<KeyForm>) -> Response {
    let mut session = shopper.lock().await;
    if let Some(key) = GalleryKey::from_key(&form.key) {
        session.gallery_key(key);
    }
    viewer_response(&session)
}

/// Close the viewer (HTMX).
#[instrument(skip(shopper), fields(shopper_id = %shopper.id))]
pub async fn close(shopper: Shopper) -> Response {
    let mut session = shopper.lock().await;
    session.close_gallery();
    viewer_response(&session)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_filters_by_tab() {
        let catalog = Catalog::default();
        let grid =
            GalleryGridTemplate::new(&catalog, CategoryFilter::Only(GalleryCategory::Cakes));
        assert_eq!(grid.category, "cakes");
        assert!(grid.items.iter().all(|i| i.category == GalleryCategory::Cakes));

        let html = grid.render().unwrap();
        assert!(html.contains("/gallery/view?category=cakes&index=0"));
    }

    #[test]
    fn test_viewer_follows_session() {
        let catalog = Catalog::default();
        let mut session = ShopSession::default();
        assert!(GalleryViewerTemplate::new(&session).item.is_none());

        assert!(session.open_gallery(&catalog, CategoryFilter::All, 1));
        let viewer = GalleryViewerTemplate::new(&session);
        assert_eq!(viewer.item.map(|i| i.id), catalog.gallery.get(1).map(|i| i.id));
        assert!(viewer.position.starts_with("2 / "));
        assert_eq!(viewer.tab, "All");
        assert!(viewer.render().unwrap().contains("<span class=\"viewer-tab\">All</span>"));

        session.gallery_key(GalleryKey::Close);
        assert!(GalleryViewerTemplate::new(&session).item.is_none());
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!(gallery_filter(Some("sushi")).is_err());
        assert_eq!(gallery_filter(None).unwrap(), CategoryFilter::All);
    }
}
