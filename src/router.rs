/*
 * Responsibility
 * - Own the HTTP engine (axum Router + middleware); never hand it out
 * - Register the route table at construction
 * - Serve capability: bind a listener and serve until shutdown
 */
use std::future::Future;
use std::net::SocketAddr;

use async_trait::async_trait;
use axum::Router;
use tokio::net::TcpListener;

use crate::api;
use crate::config::EngineMode;
use crate::error::ServeError;
use crate::middleware;

/// Something that can serve HTTP traffic on a socket.
///
/// Implementations consume themselves: once serving starts the router is owned
/// by the server for the rest of the process.
#[async_trait]
pub trait Serve: Send + Sized + 'static {
    /// Serve on `listener` until `signal` resolves, then drain in-flight requests.
    async fn serve_with_shutdown<F>(
        self,
        listener: TcpListener,
        signal: F,
    ) -> Result<(), ServeError>
    where
        F: Future<Output = ()> + Send + 'static;

    async fn serve_listener(self, listener: TcpListener) -> Result<(), ServeError> {
        self.serve_with_shutdown(listener, std::future::pending()).await
    }

    async fn serve(self, addr: SocketAddr) -> Result<(), ServeError> {
        let listener = bind(addr).await?;
        self.serve_listener(listener).await
    }
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServeError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })
}

#[derive(Debug)]
pub struct HttpRouter {
    engine: Router,
    mode: EngineMode,
}

impl HttpRouter {
    pub fn new(mode: EngineMode) -> Self {
        let engine = middleware::http::apply(api::routes(), mode);
        tracing::debug!(?mode, "routes registered");

        Self { engine, mode }
    }

    pub fn mode(&self) -> EngineMode {
        self.mode
    }
}

#[async_trait]
impl Serve for HttpRouter {
    async fn serve_with_shutdown<F>(
        self,
        listener: TcpListener,
        signal: F,
    ) -> Result<(), ServeError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, mode = ?self.mode, "http server listening");

        axum::serve(listener, self.engine)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("http server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn engine_serves_health_with_middleware() {
        let router = HttpRouter::new(EngineMode::Test);
        assert_eq!(router.mode(), EngineMode::Test);

        let response = router
            .engine
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"status":"UP"}"#);
    }

    #[tokio::test]
    async fn bind_conflict_is_reported() {
        let first = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = first.local_addr().unwrap();

        let err = HttpRouter::new(EngineMode::Test)
            .serve(addr)
            .await
            .unwrap_err();

        assert!(err.is_addr_in_use(), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn shutdown_signal_stops_server() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

        let result = HttpRouter::new(EngineMode::Test)
            .serve_with_shutdown(listener, async {})
            .await;

        assert!(result.is_ok());
    }
}
