//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the aggregation logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{ComparisonQuery, DatasetInfo, HealthResponse, UploadResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::{
    AggregateStatistics, ComparisonEntry, DemographicBucket, DemographicKind, ExportBundle,
    HistogramBin, MunicipalitySummary, PatientRecord, TemporalPoint,
};
use crate::services::{AggregateBundle, DEFAULT_COMPARISON_LIMIT};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn current_bundle(state: &AppState) -> Result<std::sync::Arc<AggregateBundle>, AppError> {
    state.store.current().ok_or(AppError::NoDataset)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        dataset_loaded: state.store.is_loaded(),
    }))
}

// =============================================================================
// Dataset Ingestion
// =============================================================================

/// POST /v1/datasets
///
/// Process an uploaded record batch. On success the new aggregates replace
/// the previous dataset atomically; on validation failure nothing changes.
pub async fn upload_dataset(
    State(state): State<AppState>,
    Json(records): Json<Vec<PatientRecord>>,
) -> Result<(axum::http::StatusCode, Json<UploadResponse>), AppError> {
    let store = state.store.clone();

    // Aggregation is CPU-bound; keep it off the async workers.
    let bundle = tokio::task::spawn_blocking(move || store.process_and_install(records))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok((
        axum::http::StatusCode::CREATED,
        Json(UploadResponse {
            dataset_id: bundle.dataset_id,
            checksum: bundle.checksum.clone(),
            record_count: bundle.record_count(),
            message: format!("Processed {} records", bundle.record_count()),
        }),
    ))
}

/// GET /v1/datasets/current
///
/// Describe the currently loaded dataset.
pub async fn get_dataset_info(State(state): State<AppState>) -> HandlerResult<DatasetInfo> {
    let bundle = current_bundle(&state)?;
    Ok(Json(DatasetInfo {
        dataset_id: bundle.dataset_id,
        checksum: bundle.checksum.clone(),
        ingested_at: bundle.ingested_at,
        record_count: bundle.record_count(),
    }))
}

// =============================================================================
// Aggregate Views
// =============================================================================

/// GET /v1/statistics
///
/// Get global statistics for the current dataset.
pub async fn get_statistics(State(state): State<AppState>) -> HandlerResult<AggregateStatistics> {
    let bundle = current_bundle(&state)?;
    Ok(Json(bundle.statistics().clone()))
}

/// GET /v1/municipalities
///
/// Get per-city summaries in first-occurrence order.
pub async fn get_municipalities(
    State(state): State<AppState>,
) -> HandlerResult<Vec<MunicipalitySummary>> {
    let bundle = current_bundle(&state)?;
    Ok(Json(bundle.municipality_summaries().to_vec()))
}

/// GET /v1/municipalities/{city}
///
/// Get the summary for one municipality.
pub async fn get_municipality(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> HandlerResult<MunicipalitySummary> {
    let bundle = current_bundle(&state)?;
    let summary = bundle
        .municipality(&city)
        .ok_or_else(|| AppError::NotFound(format!("Municipality {} not found", city)))?;
    Ok(Json(summary.clone()))
}

/// GET /v1/municipalities/comparison
///
/// Get the ranked city comparison view.
pub async fn get_comparison(
    State(state): State<AppState>,
    Query(query): Query<ComparisonQuery>,
) -> HandlerResult<Vec<ComparisonEntry>> {
    let bundle = current_bundle(&state)?;
    let limit = query.limit.unwrap_or(DEFAULT_COMPARISON_LIMIT);
    let sort_key = query.sort_key.unwrap_or_default();
    Ok(Json(bundle.comparison_view(limit, sort_key)))
}

/// GET /v1/temporal/{city}
///
/// Get the date-ordered RDW evolution for one city.
pub async fn get_temporal_series(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> HandlerResult<Vec<TemporalPoint>> {
    let bundle = current_bundle(&state)?;
    Ok(Json(bundle.temporal_series_for_city(&city)))
}

/// GET /v1/demographics/{kind}
///
/// Get one demographic distribution (`kind` = `age` | `sex`).
pub async fn get_demographics(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> HandlerResult<Vec<DemographicBucket>> {
    let kind: DemographicKind = kind
        .parse()
        .map_err(|e: String| AppError::BadRequest(e))?;
    let bundle = current_bundle(&state)?;
    Ok(Json(bundle.demographic_distribution(kind).to_vec()))
}

/// GET /v1/histogram
///
/// Get the global RDW frequency histogram.
pub async fn get_histogram(State(state): State<AppState>) -> HandlerResult<Vec<HistogramBin>> {
    let bundle = current_bundle(&state)?;
    Ok(Json(bundle.histogram().to_vec()))
}

/// GET /v1/export
///
/// Get the full serializable snapshot for file download.
pub async fn export_dataset(State(state): State<AppState>) -> HandlerResult<ExportBundle> {
    let bundle = current_bundle(&state)?;
    Ok(Json(bundle.export()))
}
