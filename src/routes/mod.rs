mod health;
mod info;
mod not_found;

pub use health::health_check;
pub use info::service_info;
pub use not_found::not_found;

use crate::{AppState, errors::ApiError};
use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::any,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the router
///
/// `/` and `/health` match exactly and accept any method. Everything else,
/// `/health/` and nested paths included, lands on the JSON 404 fallback.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", any(service_info))
        .route("/health", any(health_check))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Serialize `body` up front so an encoding failure can still become a
/// plain-text 500 instead of a half-written JSON response.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response, ApiError> {
    let bytes = serde_json::to_vec(body).map_err(|e| ApiError::Encoding(e.to_string()))?;

    Ok((status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{Endpoint, ErrorResponse, HealthResponse, ServiceInfo};
    use axum::{
        body::{Body, to_bytes},
        extract::{ConnectInfo, Request},
        http::Method,
    };
    use chrono::{DateTime, Duration, Utc};
    use serde::de::DeserializeOwned;
    use std::net::SocketAddr;
    use tower::ServiceExt;

    fn started(ago: Duration) -> AppState {
        AppState::started_at(Utc::now() - ago)
    }

    fn request(method: Method, uri: &str) -> Request {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(state: AppState, request: Request) -> (StatusCode, String, Vec<u8>) {
        let response = create_router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, body.to_vec())
    }

    async fn send_json<T: DeserializeOwned>(state: AppState, request: Request) -> (StatusCode, T) {
        let (status, content_type, body) = send(state, request).await;
        assert_eq!(content_type, "application/json");
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn root_reports_service_metadata() {
        let state = started(Duration::hours(1) + Duration::minutes(1) + Duration::seconds(5));
        let (status, info): (_, ServiceInfo) =
            send_json(state, request(Method::GET, "/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(info.service.name, "devops-info-service");
        assert_eq!(info.service.version, "1.0.0");
        assert_eq!(info.service.description, "DevOps course info service");
        assert_eq!(info.service.framework, "Axum");

        assert!(info.system.cpu_count > 0);
        assert!(!info.system.platform.is_empty());

        assert!(info.runtime.uptime_seconds >= 3665);
        assert!(info.runtime.uptime_human.starts_with("1 hour, "));
        assert_eq!(info.runtime.timezone, "UTC");
        assert!(DateTime::parse_from_rfc3339(&info.runtime.current_time).is_ok());

        assert_eq!(info.request.method, "GET");
        assert_eq!(info.request.path, "/");
        assert_eq!(info.request.user_agent, "unknown");
        assert_eq!(info.request.client_ip, "unknown");

        assert_eq!(info.endpoints, Endpoint::catalog());
    }

    #[tokio::test]
    async fn root_accepts_any_method() {
        let (status, info): (_, ServiceInfo) =
            send_json(AppState::new(), request(Method::POST, "/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(info.request.method, "POST");
    }

    #[tokio::test]
    async fn root_prefers_forwarded_for_over_peer_address() {
        let mut req = Request::builder()
            .uri("/")
            .header("X-Forwarded-For", "203.0.113.5")
            .header("User-Agent", "probe/1.0")
            .body(Body::empty())
            .unwrap();
        req.extensions_mut()
            .insert(ConnectInfo("10.1.2.3:9999".parse::<SocketAddr>().unwrap()));

        let (_, info): (_, ServiceInfo) = send_json(AppState::new(), req).await;

        assert_eq!(info.request.client_ip, "203.0.113.5");
        assert_eq!(info.request.user_agent, "probe/1.0");
    }

    #[tokio::test]
    async fn root_maps_ipv6_loopback_peer() {
        let mut req = request(Method::GET, "/");
        req.extensions_mut()
            .insert(ConnectInfo("[::1]:54321".parse::<SocketAddr>().unwrap()));

        let (_, info): (_, ServiceInfo) = send_json(AppState::new(), req).await;

        assert_eq!(info.request.client_ip, "127.0.0.1");
    }

    #[tokio::test]
    async fn root_strips_port_from_ipv4_peer() {
        let mut req = request(Method::GET, "/");
        req.extensions_mut()
            .insert(ConnectInfo("192.0.2.44:40000".parse::<SocketAddr>().unwrap()));

        let (_, info): (_, ServiceInfo) = send_json(AppState::new(), req).await;

        assert_eq!(info.request.client_ip, "192.0.2.44");
    }

    #[tokio::test]
    async fn uptime_never_decreases() {
        let state = started(Duration::seconds(10));

        let (_, first): (_, ServiceInfo) = send_json(state, request(Method::GET, "/")).await;
        let (_, second): (_, HealthResponse) =
            send_json(state, request(Method::GET, "/health")).await;
        let (_, third): (_, ServiceInfo) = send_json(state, request(Method::GET, "/")).await;

        assert!(first.runtime.uptime_seconds >= 10);
        assert!(second.uptime_seconds >= first.runtime.uptime_seconds);
        assert!(third.runtime.uptime_seconds >= second.uptime_seconds);
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let state = started(Duration::minutes(3));
        let (status, health): (_, HealthResponse) =
            send_json(state, request(Method::GET, "/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(health.status, "healthy");
        assert!(health.uptime_seconds >= 180);
        assert!(DateTime::parse_from_rfc3339(&health.timestamp).is_ok());
    }

    #[tokio::test]
    async fn unknown_paths_are_json_404() {
        for path in ["/missing", "/health/", "/health/deep", "/api/v1"] {
            let (status, err): (_, ErrorResponse) =
                send_json(AppState::new(), request(Method::GET, path)).await;

            assert_eq!(status, StatusCode::NOT_FOUND, "path {}", path);
            assert_eq!(err, ErrorResponse::not_found());
        }
    }

    #[tokio::test]
    async fn not_found_body_is_exact() {
        let (_, _, body) = send(AppState::new(), request(Method::DELETE, "/missing")).await;
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"error": "Not Found", "message": "Endpoint does not exist"})
        );
    }

    #[test]
    fn json_response_surfaces_encoding_failure() {
        use std::collections::HashMap;

        // Non-string map keys cannot be encoded as JSON object keys
        let mut bad = HashMap::new();
        bad.insert((1, 2), "x");

        assert!(matches!(
            json_response(StatusCode::OK, &bad),
            Err(ApiError::Encoding(_))
        ));
    }
}
