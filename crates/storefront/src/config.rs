//! Storefront configuration loaded from environment variables.
//!
//! Every variable is optional; the defaults run the shop locally.
//!
//! # Environment Variables
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: <http://localhost:3000>)
//! - `STOREFRONT_THEME` - Theme for new visitors, `light` or `dark` (default: light)
//! - `STOREFRONT_DELIVERY_FEE` - Flat delivery fee in shillings (default: 200)
//! - `STOREFRONT_TAX_RATE` - Tax as a fraction of the subtotal (default: 0.16)
//! - `STOREFRONT_PAYMENT_DELAY_MS` - Simulated payment time (default: 2000)
//! - `STOREFRONT_SESSION_IDLE_SECS` - Idle time before a shopper's cart is
//!   dropped (default: 7 days)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag (default: development)

use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use sweet_treats_core::{Price, Theme};
use thiserror::Error;

use crate::checkout::{PricingPolicy, SimulatedProcessor};

/// Seven days, in seconds.
const DEFAULT_SESSION_IDLE_SECS: u64 = 7 * 24 * 60 * 60;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Theme shown to a visitor who has not picked one
    pub default_theme: Theme,
    /// Flat delivery fee in shillings
    pub delivery_fee: Decimal,
    /// Tax as a fraction of the subtotal
    pub tax_rate: Decimal,
    /// How long the simulated processor takes to approve a payment
    pub payment_delay: Duration,
    /// How long an idle shopper's state is kept
    pub session_idle: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        let pricing = PricingPolicy::default();
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            default_theme: Theme::default(),
            delivery_fee: pricing.delivery_fee.amount,
            tax_rate: pricing.tax_rate,
            payment_delay: SimulatedProcessor::DEFAULT_DELAY,
            session_idle: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
            sentry_dsn: None,
            sentry_environment: "development".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        if let Err(e) = dotenvy::dotenv()
            && !e.not_found()
        {
            tracing::warn!(error = %e, "Could not read .env file");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);
        let defaults = Self::default();

        let delivery_fee: Decimal = env.parse_or("STOREFRONT_DELIVERY_FEE", defaults.delivery_fee)?;
        if delivery_fee.is_sign_negative() {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_DELIVERY_FEE".to_string(),
                "must not be negative".to_string(),
            ));
        }

        let tax_rate: Decimal = env.parse_or("STOREFRONT_TAX_RATE", defaults.tax_rate)?;
        if tax_rate.is_sign_negative() || tax_rate > Decimal::ONE {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_TAX_RATE".to_string(),
                format!("must be a fraction between 0 and 1 (got {tax_rate})"),
            ));
        }

        let payment_delay_ms: u64 = env.parse_or(
            "STOREFRONT_PAYMENT_DELAY_MS",
            u64::try_from(defaults.payment_delay.as_millis()).unwrap_or(u64::MAX),
        )?;
        let session_idle_secs: u64 =
            env.parse_or("STOREFRONT_SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS)?;
        if session_idle_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_SESSION_IDLE_SECS".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            host: env.parse_or("STOREFRONT_HOST", defaults.host)?,
            port: env.parse_or("STOREFRONT_PORT", defaults.port)?,
            base_url: env.get_or_default("STOREFRONT_BASE_URL", &defaults.base_url),
            default_theme: env.parse_or("STOREFRONT_THEME", defaults.default_theme)?,
            delivery_fee,
            tax_rate,
            payment_delay: Duration::from_millis(payment_delay_ms),
            session_idle: Duration::from_secs(session_idle_secs),
            sentry_dsn: env.get_optional("SENTRY_DSN"),
            sentry_environment: env
                .get_or_default("SENTRY_ENVIRONMENT", &defaults.sentry_environment),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the site is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }

    /// Delivery fee and tax rate as a pricing policy.
    #[must_use]
    pub fn pricing(&self) -> PricingPolicy {
        PricingPolicy {
            delivery_fee: Price::kes(self.delivery_fee),
            tax_rate: self.tax_rate,
        }
    }

    #[must_use]
    pub const fn payment_processor(&self) -> SimulatedProcessor {
        SimulatedProcessor::new(self.payment_delay)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get an optional variable. Blank values count as unset.
    fn get_optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    /// Get a variable with a default value.
    fn get_or_default(&self, key: &str, default: &str) -> String {
        self.get_optional(key)
            .unwrap_or_else(|| default.to_string())
    }

    /// Parse a variable, falling back to `default` when unset.
    fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.get_optional(key).map_or(Ok(default), |raw| {
            raw.trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
    }
}
