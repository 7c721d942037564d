//! Core types for Sweet Treats.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod price;
pub mod status;

pub use category::{
    Category, CategoryFilter, GalleryCategory, MenuCategory, UnknownCategory, VideoKind,
};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::{CurrencyCode, Price, PriceError, format_currency};
pub use status::{CheckoutStep, PaymentMethod, Theme, UnknownPaymentMethod, UnknownTheme};
