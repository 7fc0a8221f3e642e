//! Handlers for vocabulary endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::vocabulary::{
    CreateVocabularyRequest, UpdateVocabularyRequest, VocabularyItemResponse, VocabularyQuery,
    VocabularyResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists source/medium values offered to users.
///
/// # Endpoint
///
/// `GET /api/vocabulary?kind=source|medium`
///
/// Returns the fixed built-in set followed by the user's custom entries.
/// Built-in values carry no `id` and are flagged `"builtin": true`.
pub async fn vocabulary_list_handler(
    State(state): State<AppState>,
    Query(params): Query<VocabularyQuery>,
) -> Result<Json<VocabularyResponse>, AppError> {
    let items = state.vocabulary_service.list(params.kind).await?;

    Ok(Json(VocabularyResponse {
        entries: items.into_iter().map(VocabularyItemResponse::from).collect(),
    }))
}

/// Adds a custom vocabulary value.
///
/// # Endpoint
///
/// `POST /api/vocabulary`
///
/// # Errors
///
/// Returns 400 Bad Request for an empty or malformed value. Returns 409
/// Conflict when the value already exists for the kind, built-in values
/// included.
pub async fn create_vocabulary_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateVocabularyRequest>,
) -> Result<(StatusCode, Json<VocabularyItemResponse>), AppError> {
    payload.validate()?;

    let entry = state
        .vocabulary_service
        .add(payload.kind, &payload.value)
        .await?;

    Ok((StatusCode::CREATED, Json(VocabularyItemResponse::from(entry))))
}

/// Sets or clears the favorite flag on a custom entry.
///
/// # Endpoint
///
/// `PATCH /api/vocabulary/{id}`
///
/// # Errors
///
/// Returns 404 Not Found for an unknown id; built-in values have no id and
/// cannot be favorited.
pub async fn update_vocabulary_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateVocabularyRequest>,
) -> Result<Json<VocabularyItemResponse>, AppError> {
    let entry = state
        .vocabulary_service
        .set_favorite(id, payload.favorite)
        .await?;

    Ok(Json(VocabularyItemResponse::from(entry)))
}

/// Removes a custom vocabulary entry.
///
/// # Endpoint
///
/// `DELETE /api/vocabulary/{id}`
///
/// # Behavior
///
/// Existing history records that reference the removed value keep it; the
/// vocabulary only governs what is offered for new links.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown id.
pub async fn delete_vocabulary_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.vocabulary_service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
