//! HTTP server
//!
//! Combines the string record routes, the profile route, and the health
//! check into one router, applies CORS, and serves it.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::ServiceConfig;
use crate::observability::{Logger, Severity};
use crate::store::RecordStore;

use super::config::HttpServerConfig;
use super::profile_routes::{profile_routes, ProfileState};
use super::string_routes::{string_routes, StringsState};

/// HTTP server for the string record service
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Builds the server from service configuration and an opened store.
    pub fn new(config: &ServiceConfig, store: Arc<RecordStore>) -> Self {
        let strings_state = Arc::new(StringsState::new(
            store,
            Duration::from_millis(config.op_timeout_ms),
        ));
        let profile_state = Arc::new(ProfileState::new(config.fact_url.clone()));

        let router = Router::new()
            .merge(health_routes())
            .merge(string_routes(strings_state))
            .merge(profile_routes(profile_state))
            .layer(cors_layer(&config.http));

        Self {
            config: config.http.clone(),
            router,
        }
    }

    /// The socket address string this server will bind.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// The router (for testing).
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds and serves until the process exits.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        Logger::log(
            Severity::Info,
            "http_server_started",
            &[("addr", addr.to_string().as_str())],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await
    }
}

fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        // No configured origins: permissive, for development
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check routes
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
