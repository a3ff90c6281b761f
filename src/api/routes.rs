/*
 * Responsibility
 * - URL structure of the service
 * - Unknown paths fall through to a JSON 404
 */
use axum::{Router, routing::get};

use crate::api::handlers::{fallback::not_found, health::health};

pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .fallback(not_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_returns_up() {
        let response = routes()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"status":"UP"}"#);
    }

    #[tokio::test]
    async fn health_ignores_request_headers_and_body() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/health?probe=1")
            .header("x-anything", "value")
            .body(Body::from("ignored"))
            .unwrap();

        let response = routes().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"status":"UP"}"#);
    }

    #[tokio::test]
    async fn unknown_path_is_json_404() {
        let response = routes()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
