//! Sweet Treats Core - Shared types library.
//!
//! This crate provides common types used across the Sweet Treats components:
//! - `storefront` - Public-facing dessert shop site (menu, gallery, cart, checkout)
//! - `integration-tests` - Router-level tests for the storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no async runtime.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and the
//!   closed enums (categories, payment methods, checkout steps)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
