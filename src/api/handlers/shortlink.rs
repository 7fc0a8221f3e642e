//! Handlers for shortlink endpoints.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::shortlink::{
    ClickSummaryResponse, ClicksQuery, ShortenRequest, ShortenResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a previously saved link via the third-party gateway.
///
/// # Endpoint
///
/// `POST /api/shortlinks`
///
/// # Idempotence
///
/// The record store is checked first: when the URL already carries an alias,
/// that alias is returned with `"duplicate": true` and the gateway is not
/// called, so repeating the request never mints a second alias.
///
/// # Errors
///
/// Returns 404 Not Found when no saved record matches `long_url` (save the
/// link first). Returns 502 Bad Gateway with the upstream message when the
/// shortening API fails.
pub async fn create_shortlink_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let outcome = state.shortlink_service.shorten(&payload.long_url).await?;

    Ok(Json(ShortenResponse {
        short_url: outcome.short_url,
        duplicate: outcome.duplicate,
    }))
}

/// Fetches click analytics for a shortened link.
///
/// # Endpoint
///
/// `GET /api/shortlinks/clicks?short_url=https://bit.ly/abc`
///
/// # Errors
///
/// Returns 502 Bad Gateway with the upstream message when the gateway fails.
pub async fn clicks_handler(
    State(state): State<AppState>,
    Query(params): Query<ClicksQuery>,
) -> Result<Json<ClickSummaryResponse>, AppError> {
    params.validate()?;

    let summary = state.shortlink_service.clicks(&params.short_url).await?;

    Ok(Json(ClickSummaryResponse {
        total_clicks: summary.total_clicks,
    }))
}
