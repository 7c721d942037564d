//! Home page route handler.
//!
//! The shop is one page. Each section is rendered from the same partial its
//! HTMX endpoint serves, so a tab click swaps in exactly what the first
//! render showed.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use sweet_treats_core::{CategoryFilter, Theme};
use tracing::instrument;

use super::cart::CartModalTemplate;
use super::gallery::{GalleryGridTemplate, GalleryViewerTemplate};
use super::menu::MenuGridTemplate;
use super::videos::VideoGridTemplate;
use crate::catalog::{Carousel, Catalog, MenuItem, Testimonial};
use crate::content::{self, HeroSlide, Location};
use crate::error::Result;
use crate::filters;
use crate::middleware::{CspNonce, Shopper};
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub nonce: String,
    pub page_title: &'static str,
    pub shop_name: &'static str,
    pub tagline: &'static str,
    pub theme_class: &'static str,
    pub body_class: &'static str,
    pub cart_count: u32,
    pub hero_slides: &'static [HeroSlide],
    pub hero_interval_ms: u32,
    pub popular: Vec<&'static MenuItem>,
    pub about_image: &'static str,
    pub about_paragraphs: &'static [&'static str],
    pub about_stats: &'static [(&'static str, &'static str)],
    pub store_hours: &'static [(&'static str, &'static str)],
    pub location: Location,
    // Pre-rendered partials
    pub theme_toggle: String,
    pub menu: String,
    pub gallery: String,
    pub gallery_viewer: String,
    pub testimonials: String,
    pub videos: String,
    pub cart_modal: String,
}

/// Theme switch button fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/theme_toggle.html")]
pub struct ThemeToggleTemplate {
    /// Class for `<html>`.
    pub class: &'static str,
    /// Label for the switch, naming the theme it switches to.
    pub switch_label: &'static str,
}

impl From<Theme> for ThemeToggleTemplate {
    fn from(theme: Theme) -> Self {
        Self {
            class: theme.class(),
            switch_label: match theme.toggled() {
                Theme::Light => "Light mode",
                Theme::Dark => "Dark mode",
            },
        }
    }
}

/// Testimonial carousel fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/testimonials.html")]
pub struct TestimonialsTemplate {
    pub current: Option<&'static Testimonial>,
    /// Filled and empty stars for the current rating.
    pub stars: String,
    pub index: usize,
    pub previous: usize,
    pub next: usize,
    pub count: usize,
}

impl TestimonialsTemplate {
    /// The carousel at slide `index`, wrapped into range.
    #[must_use]
    pub fn new(catalog: &Catalog, index: usize) -> Self {
        let carousel = Carousel::new(index, catalog.testimonials.len());
        let current = catalog.testimonials.get(carousel.index());
        Self {
            current,
            stars: current.map_or_else(String::new, |t| {
                t.stars()
                    .iter()
                    .map(|filled| if *filled { '★' } else { '☆' })
                    .collect()
            }),
            index: carousel.index(),
            previous: carousel.previous(),
            next: carousel.next(),
            count: catalog.testimonials.len(),
        }
    }
}

/// `?index=` on the testimonial carousel.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CarouselQuery {
    pub index: usize,
}

/// Display the home page.
#[instrument(skip(state, shopper, nonce), fields(shopper_id = %shopper.id))]
pub async fn home(
    State(state): State<AppState>,
    shopper: Shopper,
    CspNonce(nonce): CspNonce,
) -> Result<IndexTemplate> {
    let catalog = state.catalog();
    let session = shopper.lock().await;

    Ok(IndexTemplate {
        nonce,
        page_title: content::PAGE_TITLE,
        shop_name: content::SHOP_NAME,
        tagline: content::TAGLINE,
        theme_class: session.theme.class(),
        body_class: session.scroll().body_class(),
        cart_count: session.cart().item_count(),
        hero_slides: content::HERO_SLIDES,
        hero_interval_ms: content::HERO_INTERVAL_SECS * 1000,
        popular: catalog.popular(),
        about_image: content::ABOUT_IMAGE,
        about_paragraphs: content::ABOUT_PARAGRAPHS,
        about_stats: content::ABOUT_STATS,
        store_hours: content::STORE_HOURS,
        location: content::LOCATION,
        theme_toggle: ThemeToggleTemplate::from(session.theme).render()?,
        menu: MenuGridTemplate::new(catalog, CategoryFilter::All).render()?,
        gallery: GalleryGridTemplate::new(catalog, CategoryFilter::All).render()?,
        gallery_viewer: GalleryViewerTemplate::new(&session).render()?,
        testimonials: TestimonialsTemplate::new(catalog, 0).render()?,
        videos: VideoGridTemplate::new(catalog, CategoryFilter::All, &session.player).render()?,
        cart_modal: CartModalTemplate::new(&session, state.pricing()).render()?,
    })
}

/// Testimonial carousel at a slide (HTMX).
#[instrument(skip(state))]
pub async fn testimonials(
    State(state): State<AppState>,
    Query(query): Query<CarouselQuery>,
) -> TestimonialsTemplate {
    TestimonialsTemplate::new(state.catalog(), query.index)
}

/// Toggle light/dark for this shopper (HTMX).
///
/// Returns the switch and triggers `theme-changed` with the new class so the
/// page swaps its root class.
#[instrument(skip(shopper), fields(shopper_id = %shopper.id))]
pub async fn toggle_theme(shopper: Shopper) -> Response {
    let theme = shopper.lock().await.toggle_theme();
    tracing::debug!(?theme, "Theme toggled");
    let trigger = serde_json::json!({ "theme-changed": theme.class() }).to_string();
    (
        AppendHeaders([("HX-Trigger", trigger)]),
        ThemeToggleTemplate::from(theme),
    )
        .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonials_wrap() {
        let catalog = Catalog::default();
        let count = catalog.testimonials.len();

        let first = TestimonialsTemplate::new(&catalog, 0);
        assert_eq!(first.previous, count - 1);
        assert_eq!(first.next, 1 % count);

        let wrapped = TestimonialsTemplate::new(&catalog, count);
        assert_eq!(wrapped.index, 0);
        assert_eq!(
            wrapped.current.map(|t| t.id),
            catalog.testimonials.first().map(|t| t.id)
        );
    }

    #[test]
    fn test_testimonials_render_stars() {
        let html = TestimonialsTemplate::new(&Catalog::default(), 0)
            .render()
            .unwrap();
        assert!(html.contains("/testimonials?index="));
        assert!(html.contains("★"));
    }

    #[test]
    fn test_theme_toggle_names_other_theme() {
        let light = ThemeToggleTemplate::from(Theme::Light);
        assert_eq!(light.switch_label, "Dark mode");
        let dark = ThemeToggleTemplate::from(Theme::Dark);
        assert_eq!(dark.class, Theme::Dark.class());
        assert_eq!(dark.switch_label, "Light mode");
    }
}
