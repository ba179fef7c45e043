//! Integration tests for Tiffin.
//!
//! Both services are exercised in-process: the storefront and admin routers
//! are mounted over one shared backend, exactly the topology the deployed
//! system has, and requests go through `tower::ServiceExt::oneshot`. No
//! network, no external processes.
//!
//! # Test Categories
//!
//! - `storefront_session` - Registration, login, and the session gate
//! - `storefront_cart` - Cart and favorites semantics over HTTP
//! - `order_lifecycle` - Checkout and the staff status workflow
//! - `admin_dashboard` - Revenue figures

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

use tiffin_backend::Backend;

/// Bearer token the harness configures the admin API with.
pub const ADMIN_TOKEN: &str = "integration-test-admin-token";

/// Both applications mounted over one shared backend.
pub struct TestHarness {
    /// Direct handle to the shared backend for seeding and inspection.
    pub backend: Backend,
    storefront: Router,
    admin: Router,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Build fresh applications over an empty backend.
    #[must_use]
    pub fn new() -> Self {
        let backend = Backend::new();

        let storefront_config = tiffin_storefront::config::StorefrontConfig {
            host: std::net::Ipv4Addr::LOCALHOST.into(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
        };
        let storefront = tiffin_storefront::app(tiffin_storefront::state::AppState::new(
            storefront_config,
            backend.clone(),
        ));

        let admin_config = tiffin_admin::config::AdminConfig {
            host: std::net::Ipv4Addr::LOCALHOST.into(),
            port: 3001,
            admin_token: SecretString::from(ADMIN_TOKEN),
        };
        let admin = tiffin_admin::app(tiffin_admin::state::AppState::new(
            admin_config,
            backend.clone(),
        ));

        Self {
            backend,
            storefront,
            admin,
        }
    }

    /// Send a storefront request, carrying and updating the session cookie.
    pub async fn storefront(
        &self,
        session: &mut SessionCookie,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ApiResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = &session.0 {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = with_json_body(builder, body);

        let response = self
            .storefront
            .clone()
            .oneshot(request)
            .await
            .expect("storefront request failed");

        let api = ApiResponse::read(response).await;
        if let Some(cookie) = api.session_cookie() {
            session.0 = Some(cookie);
        }
        api
    }

    /// Send an admin request with the configured bearer token.
    pub async fn admin(&self, method: Method, path: &str, body: Option<Value>) -> ApiResponse {
        let builder = Request::builder()
            .method(method)
            .uri(path)
            .header(header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}"));
        let request = with_json_body(builder, body);

        let response = self
            .admin
            .clone()
            .oneshot(request)
            .await
            .expect("admin request failed");
        ApiResponse::read(response).await
    }

    /// Send an admin request without any token.
    pub async fn admin_anonymous(&self, method: Method, path: &str) -> ApiResponse {
        let request = with_json_body(Request::builder().method(method).uri(path), None);
        let response = self
            .admin
            .clone()
            .oneshot(request)
            .await
            .expect("admin request failed");
        ApiResponse::read(response).await
    }
}

fn with_json_body(builder: axum::http::request::Builder, body: Option<Value>) -> Request<Body> {
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("valid request"),
        None => builder.body(Body::empty()).expect("valid request"),
    }
}

/// A customer's session cookie, updated from every `Set-Cookie`.
#[derive(Default)]
pub struct SessionCookie(Option<String>);

impl SessionCookie {
    /// A fresh, anonymous session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// A decoded response: status, headers, and JSON body (null when empty).
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl ApiResponse {
    async fn read(response: axum::http::Response<Body>) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body read failed")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        Self {
            status,
            headers,
            body,
        }
    }

    /// The `Location` header, if present.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers.get(header::LOCATION).and_then(|v| v.to_str().ok())
    }

    /// The last session cookie set by the response, as `name=value`.
    #[must_use]
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .last()
            .map(ToString::to_string)
    }
}

/// Register an account and sign the session in.
pub async fn register(
    harness: &TestHarness,
    session: &mut SessionCookie,
    email: &str,
) -> ApiResponse {
    harness
        .storefront(
            session,
            Method::POST,
            "/auth/register",
            Some(serde_json::json!({
                "email": email,
                "password": "sup3r-secret",
                "full_name": "Asha Rao",
            })),
        )
        .await
}

/// Fill in the profile fields the gate requires.
pub async fn complete_profile(harness: &TestHarness, session: &mut SessionCookie) -> ApiResponse {
    harness
        .storefront(
            session,
            Method::POST,
            "/account/complete-profile",
            Some(serde_json::json!({
                "mobile_number": "+91 98765 43210",
                "date_of_birth": "1994-03-21",
            })),
        )
        .await
}

/// A cart item payload for `/cart/add`.
#[must_use]
pub fn menu_item(item_id: i64, category: &str, name: &str, unit_price: &str) -> Value {
    serde_json::json!({
        "item_id": item_id,
        "category": category,
        "name": name,
        "unit_price": unit_price,
    })
}
