//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart lives in the shopper's in-memory session; every change sends an
//! `HX-Trigger: cart-updated` so the badge refreshes itself.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use sweet_treats_core::{CheckoutStep, MenuItemId, PaymentMethod};
use tracing::instrument;

use super::{CART_UPDATED, scroll_event};
use crate::cart::Cart;
use crate::checkout::{
    CheckoutError, DeliveryInfo, OrderConfirmation, OrderSummary, PaymentSelection, PricingPolicy,
};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::events::ShopEvent;
use crate::filters;
use crate::middleware::Shopper;
use crate::models::ShopSession;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub id: MenuItemId,
    pub name: &'static str,
    pub image: &'static str,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub is_empty: bool,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart
                .lines()
                .iter()
                .map(|line| CartLineView {
                    id: line.item.id,
                    name: line.item.name,
                    image: line.item.image_src(),
                    unit_price: cart.format_currency(line.item.unit_price()),
                    quantity: line.quantity(),
                    line_total: cart.format_currency(line.line_total()),
                })
                .collect(),
            item_count: cart.item_count(),
            is_empty: cart.is_empty(),
        }
    }
}

/// Order totals, formatted.
#[derive(Clone)]
pub struct SummaryView {
    pub subtotal: String,
    pub delivery_fee: String,
    pub tax: String,
    pub total: String,
}

impl From<OrderSummary> for SummaryView {
    fn from(summary: OrderSummary) -> Self {
        Self {
            subtotal: summary.subtotal.to_string(),
            delivery_fee: summary.delivery_fee.to_string(),
            tax: summary.tax.to_string(),
            total: summary.total.to_string(),
        }
    }
}

/// A payment method radio button.
#[derive(Clone)]
pub struct MethodOption {
    pub slug: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// The placed order, formatted.
#[derive(Clone)]
pub struct ConfirmationView {
    pub order_number: String,
    pub date: String,
    pub payment_label: &'static str,
    pub total: String,
}

impl From<&OrderConfirmation> for ConfirmationView {
    fn from(confirmation: &OrderConfirmation) -> Self {
        Self {
            order_number: confirmation.order_number_display(),
            date: confirmation.date_display(),
            payment_label: confirmation.payment_label(),
            total: confirmation.summary.total.to_string(),
        }
    }
}

/// Cart modal fragment template (for HTMX).
///
/// Renders nothing visible while the modal is closed.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_modal.html")]
pub struct CartModalTemplate {
    pub open: bool,
    pub step: CheckoutStep,
    pub title: &'static str,
    pub cart: CartView,
    pub summary: SummaryView,
    pub tax_label: String,
    pub can_go_back: bool,
    pub delivery: DeliveryInfo,
    /// Whether "Continue to Payment" starts out enabled.
    pub delivery_ready: bool,
    pub payment: PaymentSelection,
    /// Whether "Pay" starts out enabled.
    pub payment_ready: bool,
    pub methods: Vec<MethodOption>,
    pub processing: bool,
    pub confirmation: Option<ConfirmationView>,
    pub error: Option<String>,
}

impl CartModalTemplate {
    #[must_use]
    pub fn new(session: &ShopSession, pricing: &PricingPolicy) -> Self {
        let checkout = session.checkout();
        let selected = checkout.payment().method;
        Self {
            open: checkout.is_open(),
            step: checkout.step(),
            title: checkout.step().title(),
            cart: CartView::from(session.cart()),
            summary: session.summary(pricing).into(),
            tax_label: format!("Tax ({}%)", (pricing.tax_rate * Decimal::ONE_HUNDRED).normalize()),
            can_go_back: !checkout.is_processing()
                && matches!(checkout.step(), CheckoutStep::Delivery | CheckoutStep::Payment),
            delivery: checkout.delivery().clone(),
            delivery_ready: checkout.delivery().is_complete(),
            payment: checkout.payment().clone(),
            payment_ready: checkout.payment().is_complete(),
            methods: PaymentMethod::ALL
                .iter()
                .map(|method| MethodOption {
                    slug: method.slug(),
                    label: method.label(),
                    selected: *method == selected,
                })
                .collect(),
            processing: checkout.is_processing(),
            confirmation: checkout.confirmation().map(ConfirmationView::from),
            error: None,
        }
    }

    /// Show `message` above the current step.
    #[must_use]
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Render the modal for `session` along with the page-level triggers.
pub(super) fn modal_response(
    session: &ShopSession,
    pricing: &PricingPolicy,
    refusal: Option<CheckoutError>,
) -> Response {
    let mut modal = CartModalTemplate::new(session, pricing);
    if let Some(err) = refusal {
        modal = modal.with_error(err.to_string());
    }
    (
        AppendHeaders([("HX-Trigger", CART_UPDATED), ("HX-Trigger", scroll_event(session))]),
        modal,
    )
        .into_response()
}

/// Split a checkout result into "show the message" and "fail the request".
///
/// Missing form fields and an empty cart are the shopper's to fix, so the
/// modal is re-rendered with the message. Anything else is a stale or forged
/// request.
pub(super) fn refusal(
    result: std::result::Result<(), CheckoutError>,
) -> Result<Option<CheckoutError>> {
    match result {
        Ok(()) => Ok(None),
        Err(
            err @ (CheckoutError::EmptyCart
            | CheckoutError::IncompleteDelivery(_)
            | CheckoutError::IncompletePayment(_)),
        ) => Ok(Some(err)),
        Err(err) => Err(AppError::Checkout(err)),
    }
}

/// Add/order form data.
#[derive(Debug, Deserialize)]
pub struct ItemForm {
    pub item_id: MenuItemId,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub item_id: MenuItemId,
    /// Below one removes the line.
    pub quantity: i64,
}

/// Open-cart form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OpenForm {
    /// Signal name; `open-cart` when omitted.
    pub signal: Option<String>,
}

/// Display the cart modal in its current step.
#[instrument(skip(state, shopper), fields(shopper_id = %shopper.id))]
pub async fn show(State(state): State<AppState>, shopper: Shopper) -> CartModalTemplate {
    let session = shopper.lock().await;
    CartModalTemplate::new(&session, state.pricing())
}

/// Cart count badge (HTMX).
#[instrument(skip(shopper), fields(shopper_id = %shopper.id))]
pub async fn count(shopper: Shopper) -> CartCountTemplate {
    let session = shopper.lock().await;
    CartCountTemplate {
        count: session.cart().item_count(),
    }
}

/// Add one of an item to the cart (HTMX).
///
/// Returns the badge and triggers `cart-updated` so other elements refresh.
/// Refused while a payment is processing.
#[instrument(skip(state, shopper), fields(shopper_id = %shopper.id))]
pub async fn add(
    State(state): State<AppState>,
    shopper: Shopper,
    Form(form): Form<ItemForm>,
) -> Result<Response> {
    let item = state
        .catalog()
        .menu_item(form.item_id)
        .ok_or_else(|| AppError::NotFound(format!("menu item {}", form.item_id)))?;

    let mut session = shopper.lock().await;
    let quantity = session.add_to_cart(item)?;
    add_breadcrumb("cart", "Added item", Some(&[("item", item.name)]));
    tracing::info!(item = item.name, quantity, "Added to cart");

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED)]),
        CartCountTemplate {
            count: session.cart().item_count(),
        },
    )
        .into_response())
}

/// Order an item from the menu: add one and bring up the cart (HTMX).
#[instrument(skip(state, shopper), fields(shopper_id = %shopper.id))]
pub async fn order(
    State(state): State<AppState>,
    shopper: Shopper,
    Form(form): Form<ItemForm>,
) -> Result<Response> {
    let item = state
        .catalog()
        .menu_item(form.item_id)
        .ok_or_else(|| AppError::NotFound(format!("menu item {}", form.item_id)))?;

    let mut session = shopper.lock().await;
    let quantity = session.order_item(item);
    add_breadcrumb("cart", "Ordered item", Some(&[("item", item.name)]));
    tracing::info!(item = item.name, quantity, "Ordered from menu");

    Ok(modal_response(&session, state.pricing(), None))
}

/// Set a line's quantity; anything below one removes it (HTMX).
#[instrument(skip(state, shopper), fields(shopper_id = %shopper.id))]
pub async fn update(
    State(state): State<AppState>,
    shopper: Shopper,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let mut session = shopper.lock().await;
    session.update_cart_quantity(form.item_id, form.quantity)?;
    Ok(modal_response(&session, state.pricing(), None))
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(state, shopper), fields(shopper_id = %shopper.id))]
pub async fn remove(
    State(state): State<AppState>,
    shopper: Shopper,
    Form(form): Form<ItemForm>,
) -> Result<Response> {
    let mut session = shopper.lock().await;
    if !session.remove_from_cart(form.item_id)? {
        tracing::debug!(item_id = %form.item_id, "Item was not in the cart");
    }
    Ok(modal_response(&session, state.pricing(), None))
}

/// Publish a cart-opening signal and show the modal (HTMX).
#[instrument(skip(state, shopper), fields(shopper_id = %shopper.id))]
pub async fn open(
    State(state): State<AppState>,
    shopper: Shopper,
    Form(form): Form<OpenForm>,
) -> Result<Response> {
    let name = form.signal.as_deref().unwrap_or(ShopEvent::OpenCart.name());
    let event = ShopEvent::from_name(name)
        .ok_or_else(|| AppError::BadRequest(format!("unknown signal {name:?}")))?;

    let mut session = shopper.lock().await;
    let reached = session.publish(event);
    tracing::debug!(signal = event.name(), reached, "Signal published");

    Ok(modal_response(&session, state.pricing(), None))
}

/// Close the cart modal (HTMX).
///
/// A payment still processing is abandoned; closing the confirmation
/// screen finishes the order.
#[instrument(skip(state, shopper), fields(shopper_id = %shopper.id))]
pub async fn close(State(state): State<AppState>, shopper: Shopper) -> Response {
    let mut session = shopper.lock().await;
    session.close_cart();
    modal_response(&session, state.pricing(), None)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sweet_treats_core::Price;

    use super::*;
    use crate::catalog::Catalog;

    fn session_with_items() -> ShopSession {
        let catalog = Catalog::default();
        let mut session = ShopSession::default();
        let item = catalog.menu_item(MenuItemId::new(1)).unwrap();
        session.add_to_cart(item).unwrap();
        session.add_to_cart(item).unwrap();
        session
    }

    #[test]
    fn test_cart_view_formats_money() {
        let session = session_with_items();
        let view = CartView::from(session.cart());
        assert_eq!(view.item_count, 2);
        assert!(!view.is_empty);
        let line = view.lines.first().unwrap();
        assert_eq!(line.quantity, 2);
        assert!(line.line_total.starts_with("KSh "));
    }

    #[test]
    fn test_closed_modal_renders_nothing_visible() {
        let session = ShopSession::default();
        let html = CartModalTemplate::new(&session, &PricingPolicy::default())
            .render()
            .unwrap();
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn test_open_modal_shows_summary() {
        let mut session = session_with_items();
        session.publish(ShopEvent::OpenCart);
        let modal = CartModalTemplate::new(&session, &PricingPolicy::default());
        assert!(modal.open);
        assert_eq!(modal.title, "Your Cart");
        assert_eq!(modal.summary.delivery_fee, Price::kes(Decimal::from(200)).to_string());

        let html = modal.render().unwrap();
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Your Cart"));
        assert!(html.contains(&modal.summary.total));
        assert!(html.contains("Tax (16%)"));
        assert!(!modal.can_go_back);
    }

    #[test]
    fn test_continue_controls_follow_form_state() {
        let mut session = session_with_items();
        session.publish(ShopEvent::OpenCart);
        session.proceed_to_delivery().unwrap();
        let modal = CartModalTemplate::new(&session, &PricingPolicy::default());
        assert!(!modal.delivery_ready);
        let html = modal.render().unwrap();
        assert!(html.contains("data-gated disabled"));

        session
            .submit_delivery(DeliveryInfo {
                name: "Amina".to_owned(),
                email: "amina@example.com".to_owned(),
                phone: "0712345678".to_owned(),
                address: "12 Kenyatta Highway".to_owned(),
                city: "Thika".to_owned(),
                postal_code: "01000".to_owned(),
                ..DeliveryInfo::default()
            })
            .unwrap();
        let modal = CartModalTemplate::new(&session, &PricingPolicy::default());
        assert!(modal.delivery_ready);
        // M-Pesa is preselected and still needs a number
        assert!(!modal.payment_ready);
        let html = modal.render().unwrap();
        assert!(html.contains("data-gated disabled"));
        assert!(html.contains("name=\"phone_number\""));
    }

    #[test]
    fn test_methods_mark_selected() {
        let session = ShopSession::default();
        let modal = CartModalTemplate::new(&session, &PricingPolicy::default());
        let selected: Vec<_> = modal.methods.iter().filter(|m| m.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected.first().map(|m| m.slug), Some("mpesa"));
    }

    #[test]
    fn test_refusal_split() {
        assert_eq!(refusal(Ok(())).unwrap(), None);
        assert_eq!(
            refusal(Err(CheckoutError::EmptyCart)).unwrap(),
            Some(CheckoutError::EmptyCart)
        );
        assert!(refusal(Err(CheckoutError::Processing)).is_err());
        assert!(refusal(Err(CheckoutError::Closed)).is_err());
    }
}
