//! Session-related types.
//!
//! The session cookie only carries an opaque shopper id. Everything the
//! shopper does (cart, checkout, open modals) lives in a [`ShopSession`]
//! looked up by that id.
//!
//! [`ShopSession`]: super::ShopSession

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies one shopper across requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopperId(Uuid);

impl ShopperId {
    /// A fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ShopperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Session keys.
pub mod keys {
    /// Key for the shopper id.
    pub const SHOPPER_ID: &str = "shopper_id";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ShopperId::generate(), ShopperId::generate());
    }

    #[test]
    fn test_serializes_as_bare_uuid() {
        let id = ShopperId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        assert_eq!(serde_json::from_str::<ShopperId>(&json).unwrap(), id);
    }
}
