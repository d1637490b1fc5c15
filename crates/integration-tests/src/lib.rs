//! Integration tests for the Bebek Top Global storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bebek-integration-tests
//! ```
//!
//! Tests drive the full router in-process with `tower::ServiceExt::oneshot`.
//! [`TestClient`] plays the part of one browser: it keeps the session cookie
//! between requests, so the visitor's cart, preferences and receipt persist
//! across the flow exactly as they would in a real session.

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use bebek_storefront::config::StorefrontConfig;
use bebek_storefront::middleware::SESSION_COOKIE_NAME;
use bebek_storefront::state::AppState;
use tower::ServiceExt;

/// A response with its body collected.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    /// `Location` header for redirects.
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Assert a 303 redirect to `path`.
    ///
    /// # Panics
    ///
    /// Panics if the response is not a 303 to `path`.
    pub fn assert_redirect(&self, path: &str) {
        assert_eq!(self.status, StatusCode::SEE_OTHER, "body: {}", self.body);
        assert_eq!(self.location.as_deref(), Some(path));
    }
}

/// One visitor talking to a fresh storefront.
pub struct TestClient {
    state: AppState,
    app: Router,
    cookie: Option<String>,
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClient {
    /// A client for a storefront with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StorefrontConfig::default())
    }

    /// A client for a storefront with the given configuration.
    #[must_use]
    pub fn with_config(config: StorefrontConfig) -> Self {
        let state = AppState::new(config);
        Self {
            app: bebek_storefront::app(state.clone()),
            state,
            cookie: None,
        }
    }

    /// A second visitor on the same server, with no session.
    #[must_use]
    pub fn new_visitor(&self) -> Self {
        Self {
            state: self.state.clone(),
            app: self.app.clone(),
            cookie: None,
        }
    }

    /// Sessions currently held by the server.
    pub async fn session_count(&self) -> usize {
        self.state.sessions().len().await
    }

    /// GET `path`.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = self
            .request(path)
            .method("GET")
            .body(Body::empty())
            .unwrap_or_else(|e| panic!("invalid request for {path}: {e}"));
        self.send(request).await
    }

    /// POST a URL-encoded form to `path`.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");

        let request = self
            .request(path)
            .method("POST")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap_or_else(|e| panic!("invalid request for {path}: {e}"));
        self.send(request).await
    }

    fn request(&self, path: &str) -> axum::http::request::Builder {
        let builder = Request::builder().uri(path);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|e| match e {});

        if let Some(cookie) = session_cookie(response.headers()) {
            self.cookie = Some(cookie);
        }

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_else(|e| panic!("failed to read body: {e}"));

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

/// Extract `name=value` of the session cookie from `Set-Cookie` headers.
fn session_cookie(headers: &axum::http::HeaderMap) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .find(|pair| pair.starts_with(&format!("{SESSION_COOKIE_NAME}=")))
        .map(ToOwned::to_owned)
}
