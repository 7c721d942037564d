//! Everything one shopper has going on.

use std::sync::{Arc, Weak};

use chrono::NaiveDate;
use sweet_treats_core::{CategoryFilter, CheckoutStep, GalleryCategory, MenuItemId, Theme};
use tokio::sync::{Mutex, broadcast};
use tokio::task::AbortHandle;

use crate::cart::Cart;
use crate::catalog::gallery::ViewerOutcome;
use crate::catalog::{Catalog, GalleryKey, GalleryViewer, MenuItem, VideoPlayer};
use crate::checkout::{
    CheckoutError, CheckoutWizard, DeliveryInfo, OrderConfirmation, OrderSummary,
    PaymentSelection, PaymentTicket, PricingPolicy, SimulatedProcessor,
};
use crate::events::{self, EventBus, ShopEvent};
use crate::ui::{ScrollGuard, ScrollLock};

/// Shared, lockable handle to a shopper's state.
pub type SessionHandle = Arc<Mutex<ShopSession>>;

/// Cart, checkout and open modals for one shopper.
///
/// The cart modal subscribes to the shopper's [`EventBus`] when the session
/// is created and handles every event as soon as it is published. Dropping
/// the session stops any payment still being processed and releases the
/// scroll locks held by its modals.
#[derive(Debug)]
pub struct ShopSession {
    cart: Cart,
    pub player: VideoPlayer,
    pub theme: Theme,
    checkout: CheckoutWizard,
    gallery: Option<GalleryViewer>,
    scroll: ScrollLock,
    cart_scroll: Option<ScrollGuard>,
    events: EventBus,
    cart_inbox: broadcast::Receiver<ShopEvent>,
    payment_task: Option<AbortHandle>,
}

impl Default for ShopSession {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ShopSession {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let events = EventBus::new();
        let cart_inbox = events.subscribe();
        Self {
            cart: Cart::new(),
            player: VideoPlayer::default(),
            theme,
            checkout: CheckoutWizard::new(),
            gallery: None,
            scroll: ScrollLock::new(),
            cart_scroll: None,
            events,
            cart_inbox,
            payment_task: None,
        }
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn checkout(&self) -> &CheckoutWizard {
        &self.checkout
    }

    #[must_use]
    pub const fn events(&self) -> &EventBus {
        &self.events
    }

    #[must_use]
    pub const fn scroll(&self) -> &ScrollLock {
        &self.scroll
    }

    /// Publish `event` and let the cart modal react to it.
    ///
    /// Returns the number of subscribers reached.
    pub fn publish(&mut self, event: ShopEvent) -> usize {
        let reached = self.events.publish(event);
        self.dispatch();
        reached
    }

    fn dispatch(&mut self) {
        for event in events::drain(&mut self.cart_inbox) {
            tracing::debug!(event = event.name(), "Cart received event");
            if event.opens_cart() {
                self.open_cart();
            }
        }
    }

    /// Add one of `item` from the menu's order button and bring up the cart.
    ///
    /// Opening the cart abandons a payment in flight first, so the item never
    /// lands in a cart that is already being charged.
    pub fn order_item(&mut self, item: &MenuItem) -> u32 {
        self.publish(ShopEvent::AddToOrder { item: item.id });
        self.cart.add_item(item)
    }

    /// Add one of `item`. Returns the line's new quantity.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::Processing`] while a payment is in flight: the amount
    /// being charged was fixed when it started.
    pub fn add_to_cart(&mut self, item: &MenuItem) -> Result<u32, CheckoutError> {
        self.ensure_cart_editable()?;
        Ok(self.cart.add_item(item))
    }

    /// Set a line's quantity. Anything below one removes the line.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::Processing`] while a payment is in flight.
    pub fn update_cart_quantity(
        &mut self,
        id: MenuItemId,
        quantity: i64,
    ) -> Result<(), CheckoutError> {
        self.ensure_cart_editable()?;
        if quantity < 1 {
            self.cart.remove_item(id);
        } else {
            self.cart
                .update_quantity(id, u32::try_from(quantity).unwrap_or(u32::MAX));
        }
        Ok(())
    }

    /// Drop a line. Returns `false` if the item was not in the cart.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::Processing`] while a payment is in flight.
    pub fn remove_from_cart(&mut self, id: MenuItemId) -> Result<bool, CheckoutError> {
        self.ensure_cart_editable()?;
        Ok(self.cart.remove_item(id))
    }

    const fn ensure_cart_editable(&self) -> Result<(), CheckoutError> {
        if self.checkout.is_processing() {
            return Err(CheckoutError::Processing);
        }
        Ok(())
    }

    fn open_cart(&mut self) {
        if self.checkout.open().is_some() {
            self.stop_payment_task();
        }
        if self.cart_scroll.is_none() {
            self.cart_scroll = Some(self.scroll.acquire());
        }
    }

    /// Close the cart modal.
    ///
    /// Closing on the confirmation screen finishes the order the same way
    /// "continue shopping" does, rather than only hiding the modal, which
    /// would leave the paid-for cart behind for the next visit.
    pub fn close_cart(&mut self) {
        if self.checkout.step() == CheckoutStep::Confirmation && self.checkout.is_open() {
            if let Err(error) = self.complete_order() {
                tracing::warn!(%error, "Could not finish order on close");
            }
            return;
        }
        if self.checkout.close().is_some() {
            self.stop_payment_task();
        }
        self.cart_scroll = None;
    }

    /// # Errors
    ///
    /// See [`CheckoutWizard::proceed_to_delivery`].
    pub fn proceed_to_delivery(&mut self) -> Result<(), CheckoutError> {
        self.checkout.proceed_to_delivery(&self.cart)
    }

    /// # Errors
    ///
    /// See [`CheckoutWizard::submit_delivery`].
    pub fn submit_delivery(&mut self, info: DeliveryInfo) -> Result<(), CheckoutError> {
        self.checkout.submit_delivery(info)
    }

    /// # Errors
    ///
    /// See [`CheckoutWizard::back`].
    pub fn back(&mut self) -> Result<CheckoutStep, CheckoutError> {
        self.checkout.back()
    }

    /// # Errors
    ///
    /// See [`CheckoutWizard::begin_payment`].
    pub fn begin_payment(
        &mut self,
        selection: PaymentSelection,
        pricing: &PricingPolicy,
    ) -> Result<PaymentTicket, CheckoutError> {
        self.checkout.begin_payment(selection, &self.cart, pricing)
    }

    /// Move to the confirmation step if `ticket` is still current.
    pub fn finish_payment(
        &mut self,
        ticket: PaymentTicket,
        order_number: u32,
        placed_on: NaiveDate,
    ) -> bool {
        let finished = self.checkout.finish_payment(ticket, order_number, placed_on);
        if finished {
            self.payment_task = None;
        }
        finished
    }

    /// "Continue shopping".
    ///
    /// # Errors
    ///
    /// See [`CheckoutWizard::complete`].
    pub fn complete_order(&mut self) -> Result<(), CheckoutError> {
        self.checkout.complete(&mut self.cart)?;
        self.cart_scroll = None;
        self.stop_payment_task();
        Ok(())
    }

    /// Totals as shown on the current step.
    #[must_use]
    pub fn summary(&self, pricing: &PricingPolicy) -> OrderSummary {
        self.checkout.summary(&self.cart, pricing)
    }

    /// Open the gallery viewer. Returns `false` for an empty tab.
    pub fn open_gallery(
        &mut self,
        catalog: &Catalog,
        filter: CategoryFilter<GalleryCategory>,
        index: usize,
    ) -> bool {
        // the old viewer's guard is released when it is replaced
        self.gallery = GalleryViewer::open(catalog, filter, index, &self.scroll);
        self.gallery.is_some()
    }

    #[must_use]
    pub const fn gallery(&self) -> Option<&GalleryViewer> {
        self.gallery.as_ref()
    }

    /// Apply a keyboard shortcut to the open viewer. Ignored when closed.
    pub fn gallery_key(&mut self, key: GalleryKey) {
        let outcome = self
            .gallery
            .as_mut()
            .map(|viewer| viewer.handle_key(key));
        if outcome == Some(ViewerOutcome::Close) {
            self.gallery = None;
        }
    }

    pub fn close_gallery(&mut self) {
        self.gallery = None;
    }

    /// Switch between light and dark.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    fn stop_payment_task(&mut self) {
        if let Some(task) = self.payment_task.take() {
            task.abort();
        }
    }
}

impl Drop for ShopSession {
    fn drop(&mut self) {
        self.stop_payment_task();
    }
}

/// Run `ticket` through `processor` in the background.
///
/// The task only holds a weak reference, so an evicted session is not kept
/// alive by it. When the processor approves, the task moves the wizard to
/// the confirmation step unless the ticket went stale in the meantime.
pub fn spawn_payment(
    handle: &SessionHandle,
    session: &mut ShopSession,
    processor: SimulatedProcessor,
    ticket: PaymentTicket,
) {
    let Some((method, amount)) = session.checkout.pending_charge() else {
        tracing::warn!(ticket = ticket.epoch(), "No payment in flight to process");
        return;
    };
    let weak: Weak<Mutex<ShopSession>> = Arc::downgrade(handle);

    let task = tokio::spawn(async move {
        processor.authorize(method, amount).await;

        let Some(handle) = weak.upgrade() else {
            tracing::debug!(ticket = ticket.epoch(), "Session gone before payment finished");
            return;
        };
        let order_number = OrderConfirmation::random_order_number(&mut rand::rng());
        let today = chrono::Local::now().date_naive();

        let mut session = handle.lock().await;
        if session.finish_payment(ticket, order_number, today) {
            tracing::info!(order_number, "Order placed");
        } else {
            tracing::debug!(ticket = ticket.epoch(), "Stale payment ignored");
        }
    });

    session.stop_payment_task();
    session.payment_task = Some(task.abort_handle());
}
