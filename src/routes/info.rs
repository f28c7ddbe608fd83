use crate::{
    AppState,
    client::{client_ip, user_agent},
    dto::{Endpoint, RequestInfo, Runtime, Service, ServiceInfo},
    errors::ApiError,
    routes::json_response,
    system::system_info,
    uptime::{rfc3339, uptime},
};
use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    response::Response,
};
use chrono::Utc;
use std::net::SocketAddr;
use tracing::info;

/// ANY /
/// Response: 200 OK with service, host, runtime and request facts
///
/// The method is not restricted; whatever the caller sent is echoed back
/// in `request.method`.
pub async fn service_info(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ApiError> {
    info!("Request: {} {}", request.method(), request.uri().path());

    let now = Utc::now();
    let up = uptime(state.started_at, now);

    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string());

    let body = ServiceInfo {
        service: Service::current(),
        system: system_info(),
        runtime: Runtime {
            uptime_seconds: up.seconds,
            uptime_human: up.human,
            current_time: rfc3339(now),
            timezone: "UTC".to_string(),
        },
        request: RequestInfo {
            client_ip: client_ip(request.headers(), remote_addr.as_deref()),
            user_agent: user_agent(request.headers()),
            method: request.method().to_string(),
            path: request.uri().path().to_string(),
        },
        endpoints: Endpoint::catalog(),
    };

    json_response(StatusCode::OK, &body)
}
