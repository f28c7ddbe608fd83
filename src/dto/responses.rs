use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "devops-info-service";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVICE_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
pub const SERVICE_FRAMEWORK: &str = "Axum";

/// GET / response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: Service,
    pub system: System,
    pub runtime: Runtime,
    pub request: RequestInfo,
    pub endpoints: Vec<Endpoint>,
}

/// Static identity of this service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub version: String,
    pub description: String,
    pub framework: String,
}

impl Service {
    pub fn current() -> Self {
        Self {
            name: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            description: SERVICE_DESCRIPTION.to_string(),
            framework: SERVICE_FRAMEWORK.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct System {
    /// Empty when the host name cannot be resolved.
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
    pub architecture: String,
    pub cpu_count: usize,
    pub rust_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Runtime {
    pub uptime_seconds: u64,
    pub uptime_human: String,
    pub current_time: String,
    pub timezone: String,
}

/// Facts about the inbound request, as seen by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestInfo {
    pub client_ip: String,
    pub user_agent: String,
    pub method: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub path: String,
    pub method: String,
    pub description: String,
}

impl Endpoint {
    fn new(path: &str, method: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            description: description.to_string(),
        }
    }

    /// The routes this service answers on.
    pub fn catalog() -> Vec<Endpoint> {
        vec![
            Endpoint::new("/", "GET", "Service information"),
            Endpoint::new("/health", "GET", "Health check"),
        ]
    }
}

/// GET /health response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn not_found() -> Self {
        Self {
            error: "Not Found".to_string(),
            message: "Endpoint does not exist".to_string(),
        }
    }
}
