//! Order totals.

use rust_decimal::Decimal;
use serde::Serialize;
use sweet_treats_core::Price;

/// Flat delivery charge in shillings.
pub const DEFAULT_DELIVERY_FEE: i64 = 200;

/// Kenyan VAT, 16%.
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(16, 0, 0, false, 2);

/// How a subtotal becomes a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    pub delivery_fee: Price,
    /// Fraction of the subtotal charged as tax (0.16 for 16%).
    pub tax_rate: Decimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            delivery_fee: Price::kes(Decimal::from(DEFAULT_DELIVERY_FEE)),
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl PricingPolicy {
    /// Price an order. Tax is rounded to whole shillings before it is added.
    #[must_use]
    pub fn summarize(&self, subtotal: Price) -> OrderSummary {
        let tax = Price::new(subtotal.amount * self.tax_rate, subtotal.currency_code).round();
        OrderSummary {
            subtotal,
            delivery_fee: self.delivery_fee,
            tax,
            total: subtotal + self.delivery_fee + tax,
        }
    }
}

/// The breakdown shown under every checkout step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub subtotal: Price,
    pub delivery_fee: Price,
    pub tax: Price,
    pub total: Price,
}
