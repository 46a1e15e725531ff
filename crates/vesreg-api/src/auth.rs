//! # Authentication Middleware
//!
//! Static bearer-token middleware for the authority clerk endpoints.
//!
//! The registry serves a single authority — there is one credential, no
//! roles. The public license-status lookup is mounted outside this
//! middleware entirely.
//!
//! When no token is configured, auth is disabled and all requests pass
//! (development mode).

use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use subtle::ConstantTimeEq;

use crate::error::{ErrorBody, ErrorDetail};

// ── Secret Token ─────────────────────────────────────────────────────────

/// The clerk bearer token.
///
/// Custom `Debug` redacts the value so credentials cannot leak through
/// logs or panic messages. Comparison is constant-time only, via
/// [`SecretToken::matches`].
#[derive(Clone)]
pub struct SecretToken(String);

impl SecretToken {
    /// Wrap a token value read from the environment.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Constant-time comparison against a provided credential.
    ///
    /// When lengths differ, performs a dummy comparison to avoid leaking
    /// length information through timing variance.
    pub fn matches(&self, provided: &str) -> bool {
        let expected = self.0.as_bytes();
        let provided = provided.as_bytes();
        if provided.len() != expected.len() {
            let _ = expected.ct_eq(expected);
            return false;
        }
        provided.ct_eq(expected).into()
    }
}

impl std::fmt::Debug for SecretToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SecretToken").field(&"[REDACTED]").finish()
    }
}

// ── Auth Configuration ───────────────────────────────────────────────────

/// Auth configuration injected into request extensions.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// `None` disables auth (development mode).
    pub token: Option<SecretToken>,
}

// ── Middleware ───────────────────────────────────────────────────────────

/// Extract and validate the Bearer token from the Authorization header.
///
/// When `AuthConfig.token` is `None`, all requests are allowed.
pub async fn auth_middleware(request: Request, next: Next) -> Response {
    let config = request.extensions().get::<AuthConfig>().cloned();

    let expected = match config {
        Some(AuthConfig {
            token: Some(expected),
        }) => expected,
        _ => return next.run(request).await,
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match auth_header {
        Some(header_value) if header_value.starts_with("Bearer ") => {
            let provided = &header_value[7..];
            if expected.matches(provided) {
                next.run(request).await
            } else {
                tracing::warn!("authentication failed: invalid bearer token");
                unauthorized_response("invalid bearer token")
            }
        }
        Some(_) => {
            tracing::warn!("authentication failed: non-Bearer authorization scheme");
            unauthorized_response("authorization header must use Bearer scheme")
        }
        None => {
            tracing::warn!("authentication failed: missing authorization header");
            unauthorized_response("missing authorization header")
        }
    }
}

fn unauthorized_response(message: &str) -> Response {
    let body = ErrorBody {
        error: ErrorDetail {
            code: "UNAUTHORIZED".to_string(),
            message: message.to_string(),
            details: None,
        },
    };
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::middleware::from_fn;
    use axum::routing::get;
    use axum::Router;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app(token: Option<&str>) -> Router {
        let auth_config = AuthConfig {
            token: token.map(SecretToken::new),
        };
        Router::new()
            .route("/test", get(|| async { "ok" }))
            .layer(from_fn(auth_middleware))
            .layer(axum::Extension(auth_config))
    }

    #[tokio::test]
    async fn valid_bearer_token_accepted() {
        let app = test_app(Some("my-secret"));

        let request = Request::builder()
            .uri("/test")
            .header("Authorization", "Bearer my-secret")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_authorization_header_rejected() {
        let app = test_app(Some("my-secret"));

        let request = Request::builder().uri("/test").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(err["error"]["code"], "UNAUTHORIZED");
        assert!(err["error"]["message"].as_str().unwrap().contains("missing"));
    }

    #[tokio::test]
    async fn invalid_token_rejected() {
        let app = test_app(Some("my-secret"));

        let request = Request::builder()
            .uri("/test")
            .header("Authorization", "Bearer wrong-token")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn non_bearer_scheme_rejected() {
        let app = test_app(Some("my-secret"));

        let request = Request::builder()
            .uri("/test")
            .header("Authorization", "Basic dXNlcjpwYXNz")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(err["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Bearer scheme"));
    }

    #[tokio::test]
    async fn auth_disabled_allows_all_requests() {
        let app = test_app(None);

        let request = Request::builder().uri("/test").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn auth_disabled_ignores_provided_token() {
        let app = test_app(None);

        let request = Request::builder()
            .uri("/test")
            .header("Authorization", "Bearer anything")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // ── SecretToken tests ────────────────────────────────────────

    #[test]
    fn matches_identical_tokens() {
        assert!(SecretToken::new("secret-token-123").matches("secret-token-123"));
    }

    #[test]
    fn rejects_wrong_token() {
        assert!(!SecretToken::new("secret-token-123").matches("wrong-token"));
    }

    #[test]
    fn rejects_prefix() {
        assert!(!SecretToken::new("secret-token-123").matches("secret"));
    }

    #[test]
    fn rejects_empty() {
        assert!(!SecretToken::new("secret-token-123").matches(""));
    }

    #[test]
    fn debug_redacts_the_value() {
        let token = SecretToken::new("super-secret");
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
