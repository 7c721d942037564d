//! The checkout wizard behind the cart modal.
//!
//! ```text
//! closed ──open──> Cart ──> Delivery ──> Payment ══processing══> Confirmation
//!                   ^  <──back──  ^  <──back──                        │
//!                   └───────────── complete (cart cleared, closed) ───┘
//! ```
//!
//! Every forward step is gated: the cart must have lines, the delivery form
//! must be filled in, and the selected payment method must have its fields.
//! Payment is the only asynchronous step. [`CheckoutWizard::begin_payment`]
//! hands out a [`PaymentTicket`] and the caller reports back with
//! [`CheckoutWizard::finish_payment`] once the processor approves. Closing or
//! reopening the modal in between invalidates the ticket, so a late
//! completion never moves a wizard the shopper has already left.

pub mod confirmation;
pub mod forms;
pub mod payment;
pub mod pricing;

use chrono::NaiveDate;
use sweet_treats_core::{CheckoutStep, PaymentMethod, Price};
use thiserror::Error;

use crate::cart::Cart;

pub use confirmation::OrderConfirmation;
pub use forms::{
    CardDetails, DeliveryInfo, MobileMoneyDetails, PaymentSelection, format_card_number,
    format_expiry, format_mpesa_number,
};
pub use payment::{PaymentReceipt, PaymentTicket, SimulatedProcessor};
pub use pricing::{OrderSummary, PricingPolicy};

/// A checkout action that is not allowed right now.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("The cart is closed")]
    Closed,

    #[error("Cannot {action} from the {step:?} step")]
    WrongStep {
        action: &'static str,
        step: CheckoutStep,
    },

    #[error("Your cart is empty")]
    EmptyCart,

    #[error("Please fill in: {}", .0.join(", "))]
    IncompleteDelivery(Vec<&'static str>),

    #[error("Please fill in: {}", .0.join(", "))]
    IncompletePayment(Vec<&'static str>),

    #[error("Your payment is still being processed")]
    Processing,
}

/// A payment that has been started but not yet approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingPayment {
    ticket: PaymentTicket,
    method: PaymentMethod,
    summary: OrderSummary,
}

/// State of the cart modal and its checkout steps.
#[derive(Debug, Default)]
pub struct CheckoutWizard {
    open: bool,
    step: CheckoutStep,
    delivery: DeliveryInfo,
    payment: PaymentSelection,
    pending: Option<PendingPayment>,
    epoch: u64,
    confirmation: Option<OrderConfirmation>,
}

impl CheckoutWizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    #[must_use]
    pub const fn delivery(&self) -> &DeliveryInfo {
        &self.delivery
    }

    #[must_use]
    pub const fn payment(&self) -> &PaymentSelection {
        &self.payment
    }

    /// Whether a payment is waiting on the processor.
    #[must_use]
    pub const fn is_processing(&self) -> bool {
        self.pending.is_some()
    }

    /// The ticket of the payment in flight, if any.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<PaymentTicket> {
        self.pending.map(|p| p.ticket)
    }

    /// Method and amount of the payment in flight.
    #[must_use]
    pub fn pending_charge(&self) -> Option<(PaymentMethod, Price)> {
        self.pending.map(|p| (p.method, p.summary.total))
    }

    /// Receipt for the order just placed. Only set on the confirmation step.
    #[must_use]
    pub const fn confirmation(&self) -> Option<&OrderConfirmation> {
        self.confirmation.as_ref()
    }

    /// Show the modal on the cart step.
    ///
    /// Any payment in flight is abandoned. Returns its ticket so the caller
    /// can stop the timer.
    pub fn open(&mut self) -> Option<PaymentTicket> {
        let abandoned = self.abandon_payment();
        self.open = true;
        self.step = CheckoutStep::Cart;
        self.confirmation = None;
        abandoned
    }

    /// Hide the modal. Entered form data is kept for next time.
    ///
    /// Any payment in flight is abandoned and its ticket returned.
    pub fn close(&mut self) -> Option<PaymentTicket> {
        let abandoned = self.abandon_payment();
        self.open = false;
        abandoned
    }

    /// Cart -> Delivery.
    ///
    /// # Errors
    ///
    /// Fails when the modal is closed, the wizard is on another step, or the
    /// cart is empty.
    pub fn proceed_to_delivery(&mut self, cart: &Cart) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::Cart, "continue to delivery")?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.step = CheckoutStep::Delivery;
        Ok(())
    }

    /// Save the delivery form and move on to Payment when it is complete.
    ///
    /// The form is stored even when the step is refused, so the shopper does
    /// not lose what they typed.
    ///
    /// # Errors
    ///
    /// Fails when not on the delivery step or a required field is blank.
    pub fn submit_delivery(&mut self, info: DeliveryInfo) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::Delivery, "continue to payment")?;
        self.delivery = info;

        let missing = self.delivery.missing_fields();
        if !missing.is_empty() {
            return Err(CheckoutError::IncompleteDelivery(missing));
        }
        self.step = CheckoutStep::Payment;
        Ok(())
    }

    /// One step back. Entered data is kept.
    ///
    /// # Errors
    ///
    /// Fails on the cart and confirmation steps, and while a payment is
    /// being processed.
    pub fn back(&mut self) -> Result<CheckoutStep, CheckoutError> {
        if !self.open {
            return Err(CheckoutError::Closed);
        }
        if self.pending.is_some() {
            return Err(CheckoutError::Processing);
        }

        match self.step {
            CheckoutStep::Delivery | CheckoutStep::Payment => {
                self.step = self.step.previous().unwrap_or_default();
                Ok(self.step)
            }
            step @ (CheckoutStep::Cart | CheckoutStep::Confirmation) => {
                Err(CheckoutError::WrongStep {
                    action: "go back",
                    step,
                })
            }
        }
    }

    /// Save the payment form and start processing.
    ///
    /// The amount charged is priced now; cart edits made while the payment
    /// is in flight do not change it.
    ///
    /// # Errors
    ///
    /// Fails when not on the payment step, when a payment is already in
    /// flight, when the cart is empty, or when the selected method is
    /// missing fields.
    pub fn begin_payment(
        &mut self,
        mut selection: PaymentSelection,
        cart: &Cart,
        pricing: &PricingPolicy,
    ) -> Result<PaymentTicket, CheckoutError> {
        self.expect_step(CheckoutStep::Payment, "place the order")?;
        if self.pending.is_some() {
            return Err(CheckoutError::Processing);
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        selection.normalize();
        self.payment = selection;

        let missing = self.payment.missing_fields();
        if !missing.is_empty() {
            return Err(CheckoutError::IncompletePayment(missing));
        }

        self.epoch = self.epoch.wrapping_add(1);
        let ticket = PaymentTicket::new(self.epoch);
        self.pending = Some(PendingPayment {
            ticket,
            method: self.payment.method,
            summary: pricing.summarize(cart.subtotal()),
        });
        Ok(ticket)
    }

    /// Payment -> Confirmation, if `ticket` is still the payment in flight.
    ///
    /// Returns `false` and changes nothing for a stale ticket.
    pub fn finish_payment(
        &mut self,
        ticket: PaymentTicket,
        order_number: u32,
        placed_on: NaiveDate,
    ) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if pending.ticket != ticket || !self.open || self.step != CheckoutStep::Payment {
            return false;
        }

        self.pending = None;
        self.confirmation = Some(OrderConfirmation {
            order_number,
            placed_on,
            payment_method: pending.method,
            summary: pending.summary,
        });
        self.step = CheckoutStep::Confirmation;
        true
    }

    /// "Continue shopping": empty the cart, clear the forms and close.
    ///
    /// # Errors
    ///
    /// Fails unless the wizard is on the confirmation step.
    pub fn complete(&mut self, cart: &mut Cart) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::Confirmation, "finish the order")?;

        cart.clear();
        *self = Self {
            epoch: self.epoch,
            ..Self::default()
        };
        Ok(())
    }

    /// Price the cart the way every step shows it.
    #[must_use]
    pub fn summary(&self, cart: &Cart, pricing: &PricingPolicy) -> OrderSummary {
        self.pending
            .map_or_else(|| pricing.summarize(cart.subtotal()), |p| p.summary)
    }

    fn expect_step(&self, step: CheckoutStep, action: &'static str) -> Result<(), CheckoutError> {
        if !self.open {
            return Err(CheckoutError::Closed);
        }
        if self.step != step {
            return Err(CheckoutError::WrongStep {
                action,
                step: self.step,
            });
        }
        Ok(())
    }

    fn abandon_payment(&mut self) -> Option<PaymentTicket> {
        let pending = self.pending.take()?;
        tracing::debug!(ticket = pending.ticket.epoch(), "Payment abandoned");
        Some(pending.ticket)
    }
}
