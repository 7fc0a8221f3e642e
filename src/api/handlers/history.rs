//! Handlers for composition and history endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::history::{
    ComposeRequest, ComposeResponse, CreateRecordRequest, HistoryQuery, HistoryResponse,
    RecordResponse,
};
use crate::application::services::SaveRecordInput;
use crate::domain::composer::compose;
use crate::domain::projection::INITIAL_WINDOW;
use crate::error::AppError;
use crate::state::AppState;

/// Composes a tagged URL without saving it.
///
/// # Endpoint
///
/// `POST /api/compose`
///
/// # Response
///
/// ```json
/// { "ready": true, "url": "https://example.com/?utm_source=google&utm_medium=cpc" }
/// ```
///
/// While `source` or `medium` is empty the response is
/// `{ "ready": false, "url": null }` with status 200; that state is "not
/// ready", not an error.
///
/// # Errors
///
/// Returns 400 Bad Request when the base URL is not parseable.
pub async fn compose_handler(
    Json(payload): Json<ComposeRequest>,
) -> Result<Json<ComposeResponse>, AppError> {
    payload.validate()?;

    let url = compose(&payload.base_url, &payload.utm_params()).map_err(|e| {
        AppError::bad_request("Invalid base URL", json!({ "reason": e.to_string() }))
    })?;

    Ok(Json(ComposeResponse {
        ready: url.is_some(),
        url,
    }))
}

/// Lists the visible slice of the link history.
///
/// # Endpoint
///
/// `GET /api/history?search=&sort=&direction=&limit=`
///
/// # Projection
///
/// The full history is filtered (case-insensitive substring over populated
/// fields), sorted (stable, insertion-order tie-break), and windowed to
/// `limit` records (default 10). `has_more` signals records beyond the
/// window; `total` counts every match.
pub async fn history_list_handler(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let query = params
        .to_projection(INITIAL_WINDOW)
        .map_err(|message| AppError::bad_request(message, json!({})))?;

    let page = state.history_service.list(&query).await?;

    Ok(Json(HistoryResponse::from(page)))
}

/// Saves a composed link to the history.
///
/// # Endpoint
///
/// `POST /api/history`
///
/// # Behavior
///
/// The server composes the tagged URL from `base_url` and the dimension
/// fields in a single step, so the stored `url` and the stored dimensions
/// cannot drift apart. The record is echoed back in full, including the
/// generated `id` and `timestamp` when the caller supplied none.
///
/// # Errors
///
/// Returns 400 Bad Request when the base URL is unparseable or `source` /
/// `medium` is empty. Returns 409 Conflict when the caller-assigned id
/// already exists.
pub async fn create_record_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRecordRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), AppError> {
    payload.validate()?;

    let input = SaveRecordInput {
        id: payload.id,
        base_url: payload.base_url.clone(),
        params: payload.utm_params(),
        timestamp: payload.timestamp,
    };

    let record = state.history_service.save(input).await?;

    Ok((StatusCode::CREATED, Json(RecordResponse::from(record))))
}

/// Deletes a history record by identifier.
///
/// # Endpoint
///
/// `DELETE /api/history/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when no record matches the id; the delete is a
/// no-op in that case.
pub async fn delete_record_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.history_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Exports the visible history slice as CSV.
///
/// # Endpoint
///
/// `GET /api/history/export?search=&sort=&direction=&limit=`
///
/// Accepts the same query as the listing endpoint. Without `limit` the full
/// filtered set is exported; with `limit` exactly the visible window. One row
/// per record, one column per record field including `short_url`.
pub async fn export_history_handler(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Result<Response, AppError> {
    let query = params
        .to_projection(usize::MAX)
        .map_err(|message| AppError::bad_request(message, json!({})))?;

    let csv = state.history_service.export_csv(&query).await?;

    let filename = format!("utm_history_{}.csv", Utc::now().format("%Y%m%d_%H%M%S"));

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
        .into_response())
}
