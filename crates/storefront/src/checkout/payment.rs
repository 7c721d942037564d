//! Simulated payment processing.
//!
//! The shop has no payment gateway. [`SimulatedProcessor`] stands in for
//! one: it waits a fixed delay and always approves. Swap it out when a real
//! integration lands; the wizard only depends on the ticket it hands back.

use std::time::Duration;

use sweet_treats_core::{PaymentMethod, Price};
use tracing::instrument;

/// Identifies one payment attempt.
///
/// The wizard only accepts a completion for the ticket it issued most
/// recently, so a late timer from an abandoned attempt does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaymentTicket(u64);

impl PaymentTicket {
    pub(crate) const fn new(epoch: u64) -> Self {
        Self(epoch)
    }

    #[must_use]
    pub const fn epoch(self) -> u64 {
        self.0
    }
}

/// What the processor says about a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub method: PaymentMethod,
    pub amount: Price,
}

/// A payment processor that approves everything after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedProcessor {
    delay: Duration,
}

impl Default for SimulatedProcessor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl SimulatedProcessor {
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Charge `amount`. Never fails.
    #[instrument(skip(self))]
    pub async fn authorize(&self, method: PaymentMethod, amount: Price) -> PaymentReceipt {
        tokio::time::sleep(self.delay).await;
        tracing::info!(method = method.slug(), %amount, "Simulated payment approved");
        PaymentReceipt { method, amount }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_authorize_waits_for_delay() {
        let processor = SimulatedProcessor::default();
        let started = tokio::time::Instant::now();

        let receipt = processor
            .authorize(PaymentMethod::Card, Price::kes(Decimal::from(3390)))
            .await;

        assert_eq!(started.elapsed(), Duration::from_secs(2));
        assert_eq!(receipt.method, PaymentMethod::Card);
        assert_eq!(receipt.amount, Price::kes(Decimal::from(3390)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_authorize_custom_delay() {
        let processor = SimulatedProcessor::new(Duration::from_millis(250));
        let started = tokio::time::Instant::now();
        processor
            .authorize(PaymentMethod::CashOnDelivery, Price::zero())
            .await;
        assert_eq!(started.elapsed(), Duration::from_millis(250));
    }
}
