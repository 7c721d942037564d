//! Shopper-scoped notifications.
//!
//! Producers (nav bar, hero button, menu order buttons) publish a
//! [`ShopEvent`] without knowing who reacts. The cart modal is one
//! subscriber; others may subscribe too. Delivery is best-effort: an event
//! published while nobody listens is dropped, and a subscriber only sees
//! events published after it subscribed.

use sweet_treats_core::MenuItemId;
use tokio::sync::broadcast;

/// Events buffered per subscriber before the oldest are skipped.
pub const CHANNEL_CAPACITY: usize = 64;

/// A named signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopEvent {
    /// `open-cart`: show the cart modal.
    OpenCart,
    /// `add-to-order`: an item was ordered from the menu.
    AddToOrder { item: MenuItemId },
    /// `open-order-modal`: a call-to-action asked to start an order.
    OpenOrderModal,
}

impl ShopEvent {
    /// Signal name as used in `HX-Trigger` headers and form values.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OpenCart => "open-cart",
            Self::AddToOrder { .. } => "add-to-order",
            Self::OpenOrderModal => "open-order-modal",
        }
    }

    /// Parse a payload-free signal by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "open-cart" => Some(Self::OpenCart),
            "open-order-modal" => Some(Self::OpenOrderModal),
            _ => None,
        }
    }

    /// Whether this event should bring up the cart modal.
    #[must_use]
    pub const fn opens_cart(self) -> bool {
        matches!(
            self,
            Self::OpenCart | Self::AddToOrder { .. } | Self::OpenOrderModal
        )
    }
}

/// Publish/subscribe channel for one shopper.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ShopEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Start listening. Only events published from now on are received.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ShopEvent> {
        self.tx.subscribe()
    }

    /// Send `event` to every current subscriber.
    ///
    /// Returns how many subscribers it reached; zero means it was dropped.
    pub fn publish(&self, event: ShopEvent) -> usize {
        if let Ok(reached) = self.tx.send(event) {
            reached
        } else {
            tracing::debug!(event = event.name(), "No listeners, event dropped");
            0
        }
    }
}

/// Take every event waiting on `rx` without blocking.
///
/// Skipped (lagged) events are logged and passed over.
pub fn drain(rx: &mut broadcast::Receiver<ShopEvent>) -> Vec<ShopEvent> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Event subscriber lagged");
            }
            Err(broadcast::error::TryRecvError::Empty | broadcast::error::TryRecvError::Closed) => {
                return events;
            }
        }
    }
}
