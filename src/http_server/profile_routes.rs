//! Maintainer profile route
//!
//! `GET /me` returns a static profile plus a fun fact fetched from an
//! upstream API. The upstream is best-effort: any failure falls back to a
//! canned fact and the response is still a 200.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::observability::{Logger, Severity};

const FACT_TIMEOUT: Duration = Duration::from_secs(5);

const FALLBACK_FACT: &str =
    "Unable to fetch cat fact at this time. Did you know cats are amazing creatures?";

// ==================
// Shared State
// ==================

/// Profile state shared across handlers
pub struct ProfileState {
    pub fact_url: String,
    client: reqwest::Client,
}

impl ProfileState {
    pub fn new(fact_url: impl Into<String>) -> Self {
        Self {
            fact_url: fact_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
struct UpstreamFact {
    fact: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileUser {
    pub email: String,
    pub name: String,
    pub stack: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub status: String,
    pub user: ProfileUser,
    pub timestamp: String,
    pub fact: String,
}

// ==================
// Routes
// ==================

/// Create profile routes
pub fn profile_routes(state: Arc<ProfileState>) -> Router {
    Router::new().route("/me", get(profile_handler)).with_state(state)
}

// ==================
// Handlers
// ==================

async fn profile_handler(State(state): State<Arc<ProfileState>>) -> Json<ProfileResponse> {
    let fact = match fetch_fact(&state).await {
        Ok(fact) => fact,
        Err(reason) => {
            Logger::log(
                Severity::Warn,
                "fact_fetch_failed",
                &[("reason", reason.as_str()), ("url", state.fact_url.as_str())],
            );
            FALLBACK_FACT.to_string()
        }
    };

    Json(ProfileResponse {
        status: "success".to_string(),
        user: ProfileUser {
            email: "maintainers@stringvault.dev".to_string(),
            name: "StringVault Maintainers".to_string(),
            stack: "Rust/Axum".to_string(),
        },
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        fact,
    })
}

async fn fetch_fact(state: &ProfileState) -> Result<String, String> {
    let response = state
        .client
        .get(&state.fact_url)
        .header("Accept", "application/json")
        .timeout(FACT_TIMEOUT)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("upstream returned status {}", response.status()));
    }

    let body: UpstreamFact = response.json().await.map_err(|e| e.to_string())?;
    Ok(body.fact)
}
