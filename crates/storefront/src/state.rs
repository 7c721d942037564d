//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::checkout::{PricingPolicy, SimulatedProcessor};
use crate::config::StorefrontConfig;
use crate::middleware::ShopperRegistry;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the static catalog and every shopper's session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    pricing: PricingPolicy,
    processor: SimulatedProcessor,
    shoppers: ShopperRegistry,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let pricing = config.pricing();
        let processor = config.payment_processor();
        let shoppers = ShopperRegistry::new(config.session_idle, config.default_theme);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::default(),
                pricing,
                processor,
                shoppers,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// The menu, gallery, videos and testimonials.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Delivery fee and tax rate.
    #[must_use]
    pub fn pricing(&self) -> &PricingPolicy {
        &self.inner.pricing
    }

    /// The payment processor.
    #[must_use]
    pub fn processor(&self) -> SimulatedProcessor {
        self.inner.processor
    }

    /// Every live shopper session.
    #[must_use]
    pub fn shoppers(&self) -> &ShopperRegistry {
        &self.inner.shoppers
    }
}
