//! Delivery and payment form data.
//!
//! Nothing here is validated beyond "is it filled in". The wizard uses the
//! `missing_fields` lists to decide whether the continue controls are
//! enabled, and to reject a forged submission that skipped them.

use serde::Deserialize;
use sweet_treats_core::PaymentMethod;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Where the order goes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeliveryInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    /// Optional note for the rider.
    pub instructions: String,
    /// State of the "save for next time" checkbox.
    pub save_info: bool,
}

impl DeliveryInfo {
    /// Labels of the required fields that are still blank, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("full name", &self.name),
            ("email", &self.email),
            ("phone number", &self.phone),
            ("delivery address", &self.address),
            ("city", &self.city),
            ("postal code", &self.postal_code),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(label, _)| label)
        .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CardDetails {
    pub card_number: String,
    pub card_name: String,
    pub expiry_date: String,
    pub cvv: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MobileMoneyDetails {
    pub phone_number: String,
}

/// The chosen payment method and whatever that method asks for.
///
/// Deserializes straight from the flat payment form; fields that belong to
/// other methods are kept so switching back and forth loses nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaymentSelection {
    pub method: PaymentMethod,
    #[serde(flatten)]
    pub card: CardDetails,
    #[serde(flatten)]
    pub mobile: MobileMoneyDetails,
}

impl PaymentSelection {
    /// Labels of the fields the selected method still needs.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let required: Vec<(&'static str, &str)> = match self.method {
            PaymentMethod::Card => vec![
                ("card number", self.card.card_number.as_str()),
                ("name on card", self.card.card_name.as_str()),
                ("expiry date", self.card.expiry_date.as_str()),
                ("CVV", self.card.cvv.as_str()),
            ],
            PaymentMethod::MobileMoney => vec![("M-Pesa number", self.mobile.phone_number.as_str())],
            PaymentMethod::Wallet | PaymentMethod::CashOnDelivery => Vec::new(),
        };

        required
            .into_iter()
            .filter(|(_, value)| is_blank(value))
            .map(|(label, _)| label)
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Apply the input masks the form shows as the shopper types.
    pub fn normalize(&mut self) {
        self.card.card_number = format_card_number(self.card.card_number.as_str());
        self.card.expiry_date = format_expiry(self.card.expiry_date.as_str());
        self.card.cvv = self.card.cvv.chars().filter(char::is_ascii_digit).take(4).collect();
        self.mobile.phone_number = format_mpesa_number(self.mobile.phone_number.as_str());
    }
}

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Group a card number in blocks of four, keeping at most 16 digits.
///
/// Input with fewer than four digits is returned untouched so a half-typed
/// number is not mangled.
#[must_use]
pub fn format_card_number(value: &str) -> String {
    let digits: Vec<char> = digits(value).chars().take(16).collect();
    if digits.len() < 4 {
        return value.to_owned();
    }

    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render card expiry as `MM/YY` once there are enough digits to split.
#[must_use]
pub fn format_expiry(value: &str) -> String {
    let digits = digits(value);
    if digits.len() < 3 {
        return value.to_owned();
    }

    let (month, rest) = digits.split_at(2);
    let year: String = rest.chars().take(2).collect();
    format!("{month}/{year}")
}

/// Normalize a Kenyan mobile number to the `254` country prefix.
///
/// `0712...` becomes `254712...` and a bare `712...` gets the prefix added.
#[must_use]
pub fn format_mpesa_number(value: &str) -> String {
    let digits = digits(value);
    if digits.is_empty() {
        return digits;
    }

    if let Some(local) = digits.strip_prefix('0')
        && !local.is_empty()
    {
        return format!("254{local}");
    }

    if digits.starts_with("254") {
        digits
    } else {
        format!("254{digits}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn full_delivery() -> DeliveryInfo {
        DeliveryInfo {
            name: "Wanjiru Kamau".to_owned(),
            email: "wanjiru@example.co.ke".to_owned(),
            phone: "0712345678".to_owned(),
            address: "Kenyatta Highway".to_owned(),
            city: "Thika".to_owned(),
            postal_code: "01000".to_owned(),
            instructions: String::new(),
            save_info: false,
        }
    }

    #[test]
    fn test_delivery_complete_without_instructions() {
        assert!(full_delivery().is_complete());
    }

    #[test]
    fn test_delivery_reports_each_blank_field() {
        let info = DeliveryInfo {
            city: "  ".to_owned(),
            postal_code: String::new(),
            ..full_delivery()
        };
        assert_eq!(info.missing_fields(), ["city", "postal code"]);
        assert!(!info.is_complete());

        assert_eq!(DeliveryInfo::default().missing_fields().len(), 6);
    }

    #[test]
    fn test_card_needs_all_four_fields() {
        let mut selection = PaymentSelection {
            method: PaymentMethod::Card,
            card: CardDetails {
                card_number: "4242 4242 4242 4242".to_owned(),
                card_name: "W Kamau".to_owned(),
                expiry_date: "12/27".to_owned(),
                cvv: String::new(),
            },
            ..PaymentSelection::default()
        };
        assert_eq!(selection.missing_fields(), ["CVV"]);

        selection.card.cvv = "123".to_owned();
        assert!(selection.is_complete());
    }

    #[test]
    fn test_mobile_money_needs_phone() {
        let mut selection = PaymentSelection::default();
        assert_eq!(selection.method, PaymentMethod::MobileMoney);
        assert!(!selection.is_complete());

        selection.mobile.phone_number = "254712345678".to_owned();
        assert!(selection.is_complete());
    }

    #[test]
    fn test_wallet_and_cash_need_nothing() {
        for method in [PaymentMethod::Wallet, PaymentMethod::CashOnDelivery] {
            let selection = PaymentSelection {
                method,
                ..PaymentSelection::default()
            };
            assert!(selection.is_complete(), "{method:?}");
        }
    }

    #[test]
    fn test_selection_from_flat_form() {
        let selection: PaymentSelection = serde_json::from_value(serde_json::json!({
            "method": "card",
            "card_number": "4242",
            "phone_number": "0712",
        }))
        .unwrap();
        assert_eq!(selection.method, PaymentMethod::Card);
        assert_eq!(selection.card.card_number, "4242");
        assert_eq!(selection.mobile.phone_number, "0712");
        assert!(selection.card.cvv.is_empty());
    }

    #[test]
    fn test_format_card_number() {
        assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("4242-4242-42"), "4242 4242 42");
        assert_eq!(format_card_number("42424242424242429999"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("42"), "42");
    }

    #[test]
    fn test_format_expiry() {
        assert_eq!(format_expiry("1227"), "12/27");
        assert_eq!(format_expiry("123"), "12/3");
        assert_eq!(format_expiry("12"), "12");
        assert_eq!(format_expiry("12/2799"), "12/27");
    }

    #[test]
    fn test_format_mpesa_number() {
        assert_eq!(format_mpesa_number("0712345678"), "254712345678");
        assert_eq!(format_mpesa_number("712 345 678"), "254712345678");
        assert_eq!(format_mpesa_number("+254712345678"), "254712345678");
        assert_eq!(format_mpesa_number(""), "");
    }

    #[test]
    fn test_normalize_applies_masks() {
        let mut selection = PaymentSelection {
            method: PaymentMethod::Card,
            card: CardDetails {
                card_number: "4242424242424242".to_owned(),
                card_name: "W Kamau".to_owned(),
                expiry_date: "1227".to_owned(),
                cvv: "12a3".to_owned(),
            },
            mobile: MobileMoneyDetails {
                phone_number: "0712345678".to_owned(),
            },
        };
        selection.normalize();
        assert_eq!(selection.card.card_number, "4242 4242 4242 4242");
        assert_eq!(selection.card.expiry_date, "12/27");
        assert_eq!(selection.card.cvv, "123");
        assert_eq!(selection.mobile.phone_number, "254712345678");
    }
}
