//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Home page
//! GET  /health                   - Health check
//!
//! # Menu
//! GET  /menu?category=           - Menu grid fragment
//!
//! # Cart (HTMX fragments)
//! GET  /cart                     - Cart modal (current step)
//! GET  /cart/count               - Cart count badge
//! POST /cart/add                 - Add one of an item (returns badge, triggers cart-updated)
//! POST /cart/order               - Add one of an item and open the cart
//! POST /cart/update              - Set a quantity (returns modal)
//! POST /cart/remove              - Remove a line (returns modal)
//! POST /cart/open                - Publish open-cart / open-order-modal
//! POST /cart/close               - Close the modal
//!
//! # Checkout (HTMX fragments, all return the modal)
//! POST /checkout/delivery        - Cart -> Delivery
//! POST /checkout/payment         - Save delivery info, Delivery -> Payment
//! POST /checkout/back            - One step back
//! POST /checkout/pay             - Save payment selection, start processing
//! GET  /checkout/status          - Poll while processing
//! POST /checkout/complete        - Continue shopping
//!
//! # Gallery
//! GET  /gallery?category=        - Gallery grid fragment
//! GET  /gallery/view             - Open the viewer (category, index)
//! POST /gallery/key              - Keyboard shortcut (key)
//! POST /gallery/close            - Close the viewer
//!
//! # Videos and testimonials
//! GET  /videos?tab=              - Video grid fragment
//! POST /videos/{id}/play         - Select and play a clip
//! POST /videos/player/{control}  - play | mute | fullscreen | close
//! GET  /testimonials?index=      - Testimonial carousel fragment
//!
//! # Misc
//! POST /contact                  - Contact form
//! POST /theme                    - Toggle light/dark
//! ```

pub mod cart;
pub mod checkout;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod menu;
pub mod videos;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;
use sweet_treats_core::{Category, CategoryFilter};

use crate::models::ShopSession;
use crate::state::AppState;

/// `HX-Trigger` event telling the badge to refresh.
pub const CART_UPDATED: &str = "cart-updated";

/// `HX-Trigger` event telling the page whether a modal holds the scroll.
#[must_use]
pub fn scroll_event(session: &ShopSession) -> &'static str {
    if session.scroll().is_locked() {
        "scroll-locked"
    } else {
        "scroll-unlocked"
    }
}

/// `?category=` on the menu and gallery fragments.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// A category filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub slug: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Filter buttons for `C`, with `selected` marked active.
#[must_use]
pub fn tabs<C: Category>(selected: CategoryFilter<C>) -> Vec<TabView> {
    CategoryFilter::<C>::options()
        .into_iter()
        .map(|option| TabView {
            slug: option.slug(),
            label: option.label(),
            active: option == selected,
        })
        .collect()
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/order", post(cart::order))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/delivery", post(checkout::delivery))
        .route("/payment", post(checkout::payment))
        .route("/back", post(checkout::back))
        .route("/pay", post(checkout::pay))
        .route("/status", get(checkout::status))
        .route("/complete", post(checkout::complete))
}

/// Create the gallery routes router.
pub fn gallery_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::grid))
        .route("/view", get(gallery::view))
        .route("/key", post(gallery::key))
        .route("/close", post(gallery::close))
}

/// Create the video routes router.
pub fn video_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(videos::grid))
        .route("/{id}/play", post(videos::play))
        .route("/player/{control}", post(videos::control))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/menu", get(menu::grid))
        .route("/testimonials", get(home::testimonials))
        .route("/contact", post(contact::submit))
        .route("/theme", post(home::toggle_theme))
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .nest("/gallery", gallery_routes())
        .nest("/videos", video_routes())
}

#[cfg(test)]
mod tests {
    use sweet_treats_core::{GalleryCategory, MenuCategory};

    use super::*;

    #[test]
    fn test_tabs_mark_selection() {
        let tabs = tabs(CategoryFilter::Only(MenuCategory::Coffee));
        assert_eq!(tabs.len(), MenuCategory::ALL.len() + 1);
        assert_eq!(tabs.first().map(|t| t.slug), Some("all"));
        assert_eq!(tabs.iter().filter(|t| t.active).count(), 1);
        assert!(tabs.iter().any(|t| t.active && t.slug == "coffee"));
    }

    #[test]
    fn test_tabs_default_all() {
        let tabs = tabs::<GalleryCategory>(CategoryFilter::All);
        assert!(tabs.first().is_some_and(|t| t.active && t.label == "All"));
    }

    #[test]
    fn test_scroll_event_follows_lock() {
        let mut session = ShopSession::default();
        assert_eq!(scroll_event(&session), "scroll-unlocked");
        session.publish(crate::events::ShopEvent::OpenCart);
        assert_eq!(scroll_event(&session), "scroll-locked");
    }
}
