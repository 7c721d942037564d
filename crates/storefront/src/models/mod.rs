//! Per-shopper state.

pub mod session;
pub mod shop;

pub use session::{ShopperId, keys as session_keys};
pub use shop::{SessionHandle, ShopSession, spawn_payment};
