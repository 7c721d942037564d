//! Status enums for the checkout flow and shopper preferences.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Position of the checkout wizard.
///
/// The wizard is strictly linear: `Cart -> Delivery -> Payment -> Confirmation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    #[default]
    Cart,
    Delivery,
    Payment,
    Confirmation,
}

impl CheckoutStep {
    /// Heading shown at the top of the cart modal.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Cart => "Your Cart",
            Self::Delivery => "Delivery Information",
            Self::Payment => "Payment Method",
            Self::Confirmation => "Order Confirmation",
        }
    }

    /// The step before this one, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Cart => None,
            Self::Delivery => Some(Self::Cart),
            Self::Payment => Some(Self::Delivery),
            Self::Confirmation => Some(Self::Payment),
        }
    }
}

/// How the shopper intends to pay.
///
/// Serialized with the same values the payment form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[serde(rename = "card")]
    Card,
    #[default]
    #[serde(rename = "mpesa")]
    MobileMoney,
    #[serde(rename = "paypal")]
    Wallet,
    #[serde(rename = "cash")]
    CashOnDelivery,
}

impl PaymentMethod {
    /// Every method, in the order the payment form lists them.
    pub const ALL: [Self; 4] = [
        Self::Card,
        Self::MobileMoney,
        Self::Wallet,
        Self::CashOnDelivery,
    ];

    /// Form value for the radio input.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::MobileMoney => "mpesa",
            Self::Wallet => "paypal",
            Self::CashOnDelivery => "cash",
        }
    }

    /// Label shown on the form and the confirmation screen.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Card => "Credit/Debit Card",
            Self::MobileMoney => "M-Pesa",
            Self::Wallet => "PayPal",
            Self::CashOnDelivery => "Cash on Delivery",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.slug() == s)
            .ok_or_else(|| UnknownPaymentMethod(s.to_owned()))
    }
}

/// Error returned for an unrecognized payment method value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown payment method {0:?}")]
pub struct UnknownPaymentMethod(pub String);

/// Colour scheme of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// CSS class applied to the `<html>` element.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownTheme(s.to_owned())),
        }
    }
}

/// Error returned for an unrecognized theme name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme {0:?} (expected light or dark)")]
pub struct UnknownTheme(pub String);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_step_previous() {
        assert_eq!(CheckoutStep::Cart.previous(), None);
        assert_eq!(CheckoutStep::Delivery.previous(), Some(CheckoutStep::Cart));
        assert_eq!(
            CheckoutStep::Payment.previous(),
            Some(CheckoutStep::Delivery)
        );
    }

    #[test]
    fn test_checkout_step_default_is_cart() {
        assert_eq!(CheckoutStep::default(), CheckoutStep::Cart);
    }

    #[test]
    fn test_payment_method_slug_roundtrip() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.slug().parse::<PaymentMethod>().unwrap(), method);
        }
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_payment_method_serde_matches_slug() {
        for method in PaymentMethod::ALL {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.slug()));
        }
    }

    #[test]
    fn test_payment_method_default_is_mobile_money() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::MobileMoney);
        assert_eq!(PaymentMethod::default().label(), "M-Pesa");
    }

    #[test]
    fn test_theme_toggle_and_parse() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(" Dark ".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }
}
