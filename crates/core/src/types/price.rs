//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices are authored as display literals (`"KSh 1,050"`). They are
//! parsed into a [`Price`] by stripping everything that is not part of the
//! number, and rendered back with [`format_currency`].

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a price literal.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The literal contains no digits at all.
    #[error("price literal {0:?} contains no digits")]
    NoDigits(String),
    /// The digits do not form a valid decimal number (e.g. `"1.2.3"`).
    #[error("price literal {0:?} is not a valid amount")]
    Malformed(String),
}

/// ISO 4217 currency codes accepted by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// Kenyan Shilling.
    #[default]
    KES,
}

impl CurrencyCode {
    /// Display prefix used on price tags.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::KES => "KSh",
        }
    }
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Price {
    /// Amount in the currency's standard unit (shillings, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A price in Kenyan Shillings.
    #[must_use]
    pub const fn kes(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::KES)
    }

    /// The zero price.
    #[must_use]
    pub const fn zero() -> Self {
        Self::kes(Decimal::ZERO)
    }

    /// Parse a display literal such as `"KSh 1,050"` or `"KSh 850"`.
    ///
    /// Every character that is not an ASCII digit or a decimal point is
    /// treated as formatting and dropped. Leading points are dropped too, so
    /// an abbreviation like `"KSh. 850"` reads as 850.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NoDigits`] when nothing numeric remains and
    /// [`PriceError::Malformed`] when the remainder is not a decimal number.
    pub fn parse_literal(literal: &str) -> Result<Self, PriceError> {
        let numeric: String = literal
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let numeric = numeric.trim_start_matches('.');

        if !numeric.chars().any(|c| c.is_ascii_digit()) {
            return Err(PriceError::NoDigits(literal.to_owned()));
        }

        let amount =
            Decimal::from_str(numeric).map_err(|_| PriceError::Malformed(literal.to_owned()))?;
        Ok(Self::kes(amount))
    }

    /// The price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Round to whole currency units, halves away from zero.
    #[must_use]
    pub fn round(self) -> Self {
        Self::new(
            self.amount
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            self.currency_code,
        )
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_currency(self.amount))
    }
}

/// Render an amount the way the shop prints prices: `KSh` prefix, thousands
/// separators and no decimal places (`2750` becomes `"KSh 2,750"`).
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{} {grouped}", CurrencyCode::KES.symbol())
}
