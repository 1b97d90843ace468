//! HTTP adapters - REST API implementations.
//!
//! [`app_router`] assembles the segment endpoints under `/api`, the health
//! check, and the middleware stack shared by every route.

pub mod health;
pub mod segment;

pub use segment::{segment_router, SegmentApiError, SegmentAppState};

use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, Method, Request, StatusCode};
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

use segment::dto::ErrorResponse;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Builds the full application router.
pub fn app_router(state: SegmentAppState, server: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
            )
        }))
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(cors_layer(server))
        .layer(CompressionLayer::new())
        .layer(map_response(envelope_timeout))
        .layer(TimeoutLayer::new(server.request_timeout()));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", segment_router())
        .with_state(state)
        .layer(middleware)
}

/// `TimeoutLayer` answers with an empty 408; give it the usual error body.
async fn envelope_timeout(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }
    warn!(status = 408, code = "TIMEOUT", "Request timed out");
    (
        StatusCode::REQUEST_TIMEOUT,
        Json(ErrorResponse::timeout("Request timed out")),
    )
        .into_response()
}

/// Any origin when none are configured, otherwise exactly the listed ones.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
        .allow_headers(Any);

    let origins = server.cors_origins_list();
    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(allowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySegmentStore;
    use crate::application::handlers::segment::testing::{seed_segments, user, SlowSegmentReader};
    use crate::application::handlers::SegmentQuerySettings;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn app() -> Router {
        let state = SegmentAppState::new(
            Arc::new(InMemorySegmentStore::new()),
            SegmentQuerySettings::default(),
        );
        app_router(state, &ServerConfig::default())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "ok");
    }

    #[tokio::test]
    async fn responses_carry_generated_request_id() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn incoming_request_id_is_echoed() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/segments")
                    .header(REQUEST_ID_HEADER, "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = app()
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn bare_request_timeout_gets_error_envelope() {
        let response = envelope_timeout(StatusCode::REQUEST_TIMEOUT.into_response()).await;

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(
            json_body(response).await,
            json!({ "success": false, "error": "Request timed out", "code": "TIMEOUT" })
        );
    }

    #[tokio::test]
    async fn other_responses_pass_through_untouched() {
        let response = envelope_timeout(StatusCode::NOT_FOUND.into_response()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn slow_request_times_out_with_envelope() {
        let store = InMemorySegmentStore::new();
        let segments = seed_segments(&store, 1).await;
        store.insert_user(user("Female", 10.0, &[segments[0].id])).await;
        let reader = SlowSegmentReader::new(store, segments[0].id, Duration::from_secs(5));
        let state = SegmentAppState::new(Arc::new(reader), SegmentQuerySettings::default());
        let server = ServerConfig {
            request_timeout_secs: 1,
            ..ServerConfig::default()
        };

        let response = app_router(state, &server)
            .oneshot(Request::builder().uri("/api/segments").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "TIMEOUT");
    }

    #[test]
    fn cors_layer_accepts_configured_origins() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:3000,http://example.com".to_string()),
            ..ServerConfig::default()
        };
        let _layer = cors_layer(&server);
    }
}
