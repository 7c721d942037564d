//! The receipt shown once an order goes through.

use chrono::NaiveDate;
use rand::Rng;
use sweet_treats_core::PaymentMethod;

use super::pricing::OrderSummary;

/// Smallest and largest order numbers handed out.
pub const ORDER_NUMBER_RANGE: std::ops::RangeInclusive<u32> = 100_000..=999_999;

/// Cosmetic order receipt.
///
/// The order number is random and never stored, so it identifies nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub order_number: u32,
    pub placed_on: NaiveDate,
    pub payment_method: PaymentMethod,
    pub summary: OrderSummary,
}

impl OrderConfirmation {
    /// Draw a six digit order number.
    pub fn random_order_number<R: Rng + ?Sized>(rng: &mut R) -> u32 {
        rng.random_range(ORDER_NUMBER_RANGE)
    }

    /// Order number as printed, `#482913`.
    #[must_use]
    pub fn order_number_display(&self) -> String {
        format!("#{}", self.order_number)
    }

    /// Date as printed, `18/10/2026`.
    #[must_use]
    pub fn date_display(&self) -> String {
        self.placed_on.format("%-d/%-m/%Y").to_string()
    }

    #[must_use]
    pub const fn payment_label(&self) -> &'static str {
        self.payment_method.label()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use sweet_treats_core::Price;

    use super::*;
    use crate::checkout::pricing::PricingPolicy;

    #[test]
    fn test_order_number_is_six_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let n = OrderConfirmation::random_order_number(&mut rng);
            assert!(ORDER_NUMBER_RANGE.contains(&n));
            assert_eq!(n.to_string().len(), 6);
        }
    }

    #[test]
    fn test_display() {
        let confirmation = OrderConfirmation {
            order_number: 482_913,
            placed_on: NaiveDate::from_ymd_opt(2026, 3, 7).unwrap(),
            payment_method: PaymentMethod::MobileMoney,
            summary: PricingPolicy::default().summarize(Price::zero()),
        };
        assert_eq!(confirmation.order_number_display(), "#482913");
        assert_eq!(confirmation.date_display(), "7/3/2026");
        assert_eq!(confirmation.payment_label(), "M-Pesa");
    }
}
