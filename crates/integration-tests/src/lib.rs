//! Integration tests for the Sweet Treats storefront.
//!
//! The tests drive the real router (middleware, session cookie, handlers and
//! templates) in-process with `tower::ServiceExt::oneshot`. No server or
//! network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sweet-treats-integration-tests
//! ```

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use sweet_treats_storefront::{app, config::StorefrontConfig, state::AppState};
use tower::ServiceExt;

/// Largest response body a test will read.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// A response with its body read into a string.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Every `HX-Trigger` value, split into event names.
    #[must_use]
    pub fn triggers(&self) -> Vec<String> {
        self.headers
            .get_all("hx-trigger")
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .map(|name| name.trim().to_string())
            .collect()
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// One browser: the storefront router plus the session cookie it was given.
pub struct TestClient {
    router: Router,
    cookie: Option<String>,
}

impl TestClient {
    /// A client against a storefront built from `config`.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            router: app(AppState::new(config)),
            cookie: None,
        }
    }

    /// A second browser against the same storefront, with no cookie.
    #[must_use]
    pub fn fresh_browser(&self) -> Self {
        Self {
            router: self.router.clone(),
            cookie: None,
        }
    }

    /// Whether the storefront has handed out a session cookie yet.
    #[must_use]
    pub const fn has_session(&self) -> bool {
        self.cookie.is_some()
    }

    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    /// POST an urlencoded form.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn post(&mut self, uri: &str, form: &[(&str, &str)]) -> TestResponse {
        let body = form
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&");
        self.send(Method::POST, uri, Some(body)).await
    }

    #[allow(clippy::expect_used)]
    async fn send(&mut self, method: Method, uri: &str, form: Option<String>) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let request = match form {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body)),
            None => request.body(Body::empty()),
        }
        .expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(set_cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            && let Some(pair) = set_cookie.split(';').next()
        {
            self.cookie = Some(pair.trim().to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), MAX_BODY_BYTES)
            .await
            .expect("readable body");
        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

/// Storefront config for tests: defaults, with a short payment delay.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        payment_delay: std::time::Duration::from_millis(200),
        ..StorefrontConfig::default()
    }
}
