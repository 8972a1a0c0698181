//! String record HTTP routes
//!
//! Endpoints for submitting, retrieving, filtering, and deleting analyzed
//! strings. Store calls run on the blocking pool under the configured
//! deadline; an expired deadline surfaces as a 500 without retrying.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::observability::{Logger, Severity};
use crate::query::PredicateSet;
use crate::store::{RecordStore, StoreResult, StringRecord};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// State shared by all string handlers
pub struct StringsState {
    pub store: Arc<RecordStore>,
    /// Deadline for one store call
    pub op_timeout: Duration,
}

impl StringsState {
    pub fn new(store: Arc<RecordStore>, op_timeout: Duration) -> Self {
        Self { store, op_timeout }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct AddStringRequest {
    pub value: String,
}

/// Wire rendering of the derived properties.
#[derive(Debug, Serialize)]
pub struct RecordProperties {
    pub length: u64,
    pub is_palindrome: bool,
    pub unique_characters: u64,
    pub word_count: u64,
    pub sha256_hash: String,
    pub character_frequency_map: HashMap<String, u64>,
}

/// Wire rendering of one stored record. Built from the stored record by
/// an explicit mapping step; the stored and wire shapes stay separate.
#[derive(Debug, Serialize)]
pub struct ApiRecord {
    pub id: String,
    pub value: String,
    pub properties: RecordProperties,
    pub created_at: String,
}

impl From<&StringRecord> for ApiRecord {
    fn from(record: &StringRecord) -> Self {
        Self {
            id: record.fingerprint.clone(),
            value: record.value.clone(),
            properties: RecordProperties {
                length: record.length,
                is_palindrome: record.is_palindrome,
                unique_characters: record.unique_characters,
                word_count: record.word_count,
                sha256_hash: record.fingerprint.clone(),
                character_frequency_map: record.character_frequency.clone(),
            },
            created_at: record
                .created_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StringListResponse {
    pub data: Vec<ApiRecord>,
    pub count: usize,
    pub filters_applied: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<ApiRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

// ==================
// Routes
// ==================

/// Create string record routes
pub fn string_routes(state: Arc<StringsState>) -> Router {
    Router::new()
        .route("/strings", post(add_string_handler).get(list_strings_handler))
        .route(
            "/strings/filter-by-natural-language",
            get(natural_language_handler),
        )
        .route(
            "/strings/:value",
            get(get_string_handler).delete(delete_string_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Runs a store operation on the blocking pool under the state's
/// deadline. The deadline aborts the wait, not the operation; the store
/// is never retried here.
async fn run_store<T, F>(state: &StringsState, op: F) -> ApiResult<T>
where
    F: FnOnce(&RecordStore) -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(&state.store);
    let task = tokio::task::spawn_blocking(move || op(store.as_ref()));

    match tokio::time::timeout(state.op_timeout, task).await {
        Ok(Ok(result)) => result.map_err(ApiError::from),
        Ok(Err(_)) => Err(ApiError::StorageUnavailable),
        Err(_) => Err(ApiError::Timeout),
    }
}

// ==================
// Handlers
// ==================

async fn add_string_handler(
    State(state): State<Arc<StringsState>>,
    payload: Result<Json<AddStringRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ApiRecord>)> {
    // Missing field or wrong type is a body-shape error (422), a blank
    // value is an input error (400)
    let Json(request) = payload.map_err(|_| ApiError::InvalidBody)?;
    if request.value.trim().is_empty() {
        return Err(ApiError::InvalidInput(
            "Invalid request body or missing value field".to_string(),
        ));
    }

    let record = StringRecord::new(request.value);
    let response = ApiRecord::from(&record);

    run_store(&state, move |store| store.insert(record)).await?;

    Logger::log(
        Severity::Info,
        "string_inserted",
        &[("fingerprint", response.id.as_str())],
    );

    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_string_handler(
    State(state): State<Arc<StringsState>>,
    Path(value): Path<String>,
) -> ApiResult<Json<ApiRecord>> {
    let record = run_store(&state, move |store| store.get_by_value(&value)).await?;
    Ok(Json(ApiRecord::from(&record)))
}

async fn list_strings_handler(
    State(state): State<Arc<StringsState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<StringListResponse>> {
    let set = PredicateSet::from_params(&params)?;
    let filters_applied = set.to_filter_map();

    let records = run_store(&state, move |store| store.find(&set)).await?;
    let data: Vec<ApiRecord> = records.iter().map(ApiRecord::from).collect();

    Ok(Json(StringListResponse {
        count: data.len(),
        data,
        filters_applied,
    }))
}

async fn natural_language_handler(
    State(state): State<Arc<StringsState>>,
    Query(params): Query<NaturalLanguageParams>,
) -> ApiResult<Json<NaturalLanguageResponse>> {
    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::MissingParam("query".to_string()))?;

    let set = PredicateSet::from_natural_language(&query)?;
    let parsed_filters = set.to_filter_map();

    let records = run_store(&state, move |store| store.find(&set)).await?;
    let data: Vec<ApiRecord> = records.iter().map(ApiRecord::from).collect();

    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: InterpretedQuery {
            original: query,
            parsed_filters,
        },
    }))
}

async fn delete_string_handler(
    State(state): State<Arc<StringsState>>,
    Path(value): Path<String>,
) -> ApiResult<StatusCode> {
    let logged = value.clone();
    run_store(&state, move |store| store.delete_by_value(&value)).await?;

    Logger::log(Severity::Info, "string_deleted", &[("value", logged.as_str())]);

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_record_mapping() {
        let record = StringRecord::new("racecar");
        let api = ApiRecord::from(&record);

        assert_eq!(api.id, record.fingerprint);
        assert_eq!(api.properties.sha256_hash, record.fingerprint);
        assert_eq!(api.properties.length, 7);
        assert!(api.properties.is_palindrome);
        assert_eq!(api.properties.character_frequency_map.get("r"), Some(&2));
    }

    #[test]
    fn test_created_at_is_rfc3339_utc() {
        let record = StringRecord::new("hello");
        let api = ApiRecord::from(&record);
        assert!(api.created_at.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&api.created_at).is_ok());
    }

    #[test]
    fn test_wire_shape_field_names() {
        let record = StringRecord::new("ab");
        let json = serde_json::to_value(ApiRecord::from(&record)).unwrap();

        assert!(json.get("id").is_some());
        let properties = json.get("properties").unwrap();
        for field in [
            "length",
            "is_palindrome",
            "unique_characters",
            "word_count",
            "sha256_hash",
            "character_frequency_map",
        ] {
            assert!(properties.get(field).is_some(), "missing {}", field);
        }
    }
}
