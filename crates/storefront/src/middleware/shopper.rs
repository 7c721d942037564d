//! Shopper extractor.
//!
//! Resolves the request's session cookie to the shopper's [`ShopSession`].
//! A visitor without a shopper id gets a fresh one on their first request.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::FromRequestParts, http::request::Parts};
use moka::future::Cache;
use sweet_treats_core::Theme;
use tokio::sync::Mutex;
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::{SessionHandle, ShopSession, ShopperId, session_keys};
use crate::state::AppState;

/// Most shopper sessions held at once.
const MAX_SHOPPERS: u64 = 100_000;

/// In-memory map from shopper id to session state.
///
/// Entries idle for longer than the configured time are evicted. Eviction
/// drops the [`ShopSession`], which stops any payment it was processing.
#[derive(Clone)]
pub struct ShopperRegistry {
    sessions: Cache<ShopperId, SessionHandle>,
    default_theme: Theme,
}

impl ShopperRegistry {
    #[must_use]
    pub fn new(idle: Duration, default_theme: Theme) -> Self {
        let sessions = Cache::builder()
            .max_capacity(MAX_SHOPPERS)
            .time_to_idle(idle)
            .build();

        Self {
            sessions,
            default_theme,
        }
    }

    /// The session for `id`, created on first use.
    pub async fn get_or_create(&self, id: ShopperId) -> SessionHandle {
        let theme = self.default_theme;
        self.sessions
            .get_with(id, async move { Arc::new(Mutex::new(ShopSession::new(theme))) })
            .await
    }
}

/// The current shopper.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(shopper: Shopper) -> impl IntoResponse {
///     let session = shopper.lock().await;
///     format!("{} items", session.cart().item_count())
/// }
/// ```
pub struct Shopper {
    pub id: ShopperId,
    pub handle: SessionHandle,
}

impl Shopper {
    /// Lock the shopper's state for the rest of the request.
    pub async fn lock(&self) -> tokio::sync::MutexGuard<'_, ShopSession> {
        self.handle.lock().await
    }
}

impl FromRequestParts<AppState> for Shopper {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        let id = if let Some(id) = session.get::<ShopperId>(session_keys::SHOPPER_ID).await? {
            id
        } else {
            let id = ShopperId::generate();
            session.insert(session_keys::SHOPPER_ID, id).await?;
            tracing::debug!(shopper_id = %id, "New shopper");
            id
        };

        tracing::Span::current().record("shopper_id", tracing::field::display(id));
        let handle = state.shoppers().get_or_create(id).await;
        Ok(Self { id, handle })
    }
}
