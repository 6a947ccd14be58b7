//! Axum server setup
//!
//! Server skeleton with:
//! - Access logging through the tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::routes;
use crate::uploads::UploadStore;

/// Default listening port
pub const DEFAULT_PORT: u16 = 8000;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8000)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Destination directory for `/img` uploads
    pub uploads: UploadStore,
}

impl AppState {
    pub fn new(pool: PgPool, uploads: UploadStore) -> Self {
        Self { pool, uploads }
    }
}

/// Build the router with every route and the tracing middleware.
pub fn build_router(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .merge(routes::expenses::router())
        .merge(routes::upload::router())
        .merge(routes::admin::router())
        .layer(trace)
        .with_state(Arc::new(state))
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(StoreConfig::default().connect_options()?);
/// let state = AppState::new(pool, UploadStore::default());
/// run_server(state, ServerConfig::default()).await?;
/// ```
pub async fn run_server(state: AppState, config: ServerConfig) -> Result<(), ServerError> {
    state.uploads.ensure_dir().await?;
    tracing::info!(uploads = %state.uploads.root_dir().display(), "Uploads directory ready");

    let app = build_router(state);

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::unreachable_pool;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use std::time::Duration;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const BOUNDARY: &str = "expensectl-test-boundary";

    fn test_app(uploads: &TempDir) -> Router {
        let pool = unreachable_pool(Duration::from_millis(200));
        build_router(AppState::new(pool, UploadStore::new(uploads.path())))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(field: &str, filename: &str, contents: &str) -> Request<Body> {
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: image/png\r\n\r\n{contents}\r\n--{b}--\r\n",
            b = BOUNDARY,
        );
        Request::builder()
            .method("POST")
            .uri("/img")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8000);
        assert!(config.bind_addr.ip().is_unspecified());
    }

    #[tokio::test]
    async fn store_failures_become_400_envelopes() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);

        let requests = vec![
            Request::builder().uri("/expense/all").body(Body::empty()).unwrap(),
            Request::builder().uri("/expense/total").body(Body::empty()).unwrap(),
            json_request("POST", "/expense", r#"{"number": 50, "description": "lunch"}"#),
            json_request("PUT", "/expense/1", r#"{"number": 5, "description": "tea"}"#),
            Request::builder()
                .method("DELETE")
                .uri("/expense/1")
                .body(Body::empty())
                .unwrap(),
        ];

        for request in requests {
            let uri = request.uri().clone();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);

            let body = body_json(response).await;
            assert_eq!(body["success"], false, "{}", uri);
            assert!(body["reason"].as_str().is_some_and(|r| !r.is_empty()), "{}", uri);
        }
    }

    #[tokio::test]
    async fn malformed_body_is_rejected_before_the_store() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);

        let response = app
            .oneshot(json_request("POST", "/expense", r#"{"number": "lots"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["reason"].is_string());
    }

    #[tokio::test]
    async fn non_integer_id_is_rejected() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/expense/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({"success": false, "reason": "invalid expense id: \"abc\""})
        );
    }

    #[tokio::test]
    async fn destroy_answers_even_when_the_drop_fails() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);

        let response = app
            .oneshot(Request::builder().uri("/duarrr").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"destroyed");
    }

    #[tokio::test]
    async fn upload_stores_under_derived_name_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);

        let response = app
            .clone()
            .oneshot(multipart_request("img", "photo.backup.png", "first"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"success": true}));
        assert_eq!(std::fs::read_to_string(dir.path().join("photo.png")).unwrap(), "first");

        let response = app
            .oneshot(multipart_request("img", "photo.png", "second"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(std::fs::read_to_string(dir.path().join("photo.png")).unwrap(), "second");
    }

    #[tokio::test]
    async fn upload_without_img_field_is_rejected() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);

        let response = app
            .oneshot(multipart_request("avatar", "photo.png", "x"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["reason"], "missing multipart field 'img'");
        assert!(!dir.path().join("photo.png").exists());
    }

    #[tokio::test]
    async fn upload_write_failure_is_surfaced() {
        let dir = TempDir::new().unwrap();
        let pool = unreachable_pool(Duration::from_millis(200));
        let store = UploadStore::new(dir.path().join("does-not-exist"));
        let app = build_router(AppState::new(pool, store));

        let response = app
            .oneshot(multipart_request("img", "photo.png", "x"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["success"], false);
    }
}
