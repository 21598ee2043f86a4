//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all rotation handler
//! - Wire up middleware (tracing)
//! - Bind server to listener
//! - Stop accepting and drain on shutdown

use axum::{
    extract::State,
    http::{Method, Uri},
    response::Response,
    routing::any,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::RotatorConfig;
use crate::http::response::rotated_response;
use crate::observability::metrics;
use crate::rotation::{Rotation, RotationError};

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub rotation: Arc<Rotation>,
}

/// HTTP server answering every request with the next rotated status.
pub struct HttpServer {
    router: Router,
    rotation: Arc<Rotation>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: &RotatorConfig) -> Result<Self, RotationError> {
        let rotation = Arc::new(Rotation::from_codes(&config.rotation.status_codes)?);
        Ok(Self::with_rotation(rotation))
    }

    /// Create a server around an existing rotation.
    pub fn with_rotation(rotation: Arc<Rotation>) -> Self {
        let state = AppState {
            rotation: rotation.clone(),
        };

        Self {
            router: Self::build_router(state),
            rotation,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(rotate_handler))
            .route("/", any(rotate_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// The router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// The shared rotation cursor.
    pub fn rotation(&self) -> Arc<Rotation> {
        self.rotation.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            rotation = ?self.rotation.codes().iter().map(|c| c.as_u16()).collect::<Vec<_>>(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Catch-all handler.
/// Takes the next status from the rotation; method and path only feed the log.
async fn rotate_handler(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let status = state.rotation.next();

    tracing::info!(
        method = %method,
        path = %uri.path(),
        status = status.as_u16(),
        "Request: {} {} ---> Response: HTTP {}",
        method,
        uri.path(),
        status.as_u16()
    );
    metrics::record_response(method.as_str(), status.as_u16());

    rotated_response(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn server(codes: &[u16]) -> HttpServer {
        let mut config = RotatorConfig::default();
        config.rotation.status_codes = codes.to_vec();
        HttpServer::new(&config).unwrap()
    }

    async fn send(router: &Router, method: Method, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[test]
    fn test_rejects_empty_rotation() {
        let mut config = RotatorConfig::default();
        config.rotation.status_codes.clear();
        assert!(matches!(HttpServer::new(&config), Err(RotationError::Empty)));
    }

    #[tokio::test]
    async fn test_root_and_nested_paths_share_rotation() {
        let server = server(&[500, 502, 503]);
        let router = server.router();

        assert_eq!(send(&router, Method::GET, "/").await.0, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(send(&router, Method::GET, "/a/b/c").await.0, StatusCode::BAD_GATEWAY);
        assert_eq!(send(&router, Method::DELETE, "/x").await.0, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(send(&router, Method::PUT, "/").await.0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_body_matches_status() {
        let server = server(&[404]);
        let (status, body) = send(&server.router(), Method::POST, "/missing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "HTTP 404 - Not Found\n");
    }

    #[tokio::test]
    async fn test_each_request_advances_cursor_once() {
        let server = server(&[400, 401, 404]);
        let router = server.router();
        let rotation = server.rotation();

        send(&router, Method::GET, "/").await;
        assert_eq!(rotation.position(), 1);
        send(&router, Method::HEAD, "/anything").await;
        assert_eq!(rotation.position(), 2);
        send(&router, Method::OPTIONS, "/").await;
        assert_eq!(rotation.position(), 0);
    }
}
