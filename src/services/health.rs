use axum::{extract::State, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

/// Static body of the root liveness page.
pub const RUNNING_TEXT: &str = "Schedule bot is running";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime_seconds: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub start_time: DateTime<Utc>,
}

pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new() -> Self {
        let state = AppState {
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/", get(root))
            .route("/health", get(health_check))
            .route("/health/live", get(liveness_check))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        Self { router }
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}

async fn root() -> &'static str {
    RUNNING_TEXT
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
    })
}

async fn liveness_check() -> Json<&'static str> {
    // if this endpoint responds, the process is alive
    Json("alive")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_root_endpoint() {
        let server = TestServer::new(HealthService::new().router).expect("Failed to create test server");

        let response = server.get("/").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), RUNNING_TEXT);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = TestServer::new(HealthService::new().router).expect("Failed to create test server");

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let health_response: HealthResponse = response.json();
        assert_eq!(health_response.status, "healthy");
        assert_eq!(health_response.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_liveness_endpoint() {
        let server = TestServer::new(HealthService::new().router).expect("Failed to create test server");

        let response = server.get("/health/live").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let alive_response: String = response.json();
        assert_eq!(alive_response, "alive");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let server = TestServer::new(HealthService::new().router).expect("Failed to create test server");

        let response = server.get("/nope").expect_failure().await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }
}
