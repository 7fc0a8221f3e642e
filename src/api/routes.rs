//! API route configuration.

use crate::api::handlers::{
    clicks_handler, compose_handler, create_record_handler, create_shortlink_handler,
    create_vocabulary_handler, delete_record_handler, delete_vocabulary_handler,
    export_history_handler, history_list_handler, update_vocabulary_handler,
    vocabulary_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, patch, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /compose`            - Compose a tagged URL without saving
/// - `GET    /history`            - Visible history slice (filter/sort/window)
/// - `POST   /history`            - Save a composed link
/// - `DELETE /history/{id}`       - Delete a record
/// - `GET    /history/export`     - Visible history slice as CSV
/// - `POST   /shortlinks`         - Shorten a saved link (duplicate-aware)
/// - `GET    /shortlinks/clicks`  - Click summary for an alias
/// - `GET    /vocabulary`         - Built-in + custom source/medium values
/// - `POST   /vocabulary`         - Add a custom value
/// - `PATCH  /vocabulary/{id}`    - Set/clear the favorite flag
/// - `DELETE /vocabulary/{id}`    - Remove a custom value
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/compose", post(compose_handler))
        .route(
            "/history",
            get(history_list_handler).post(create_record_handler),
        )
        .route("/history/export", get(export_history_handler))
        .route("/history/{id}", delete(delete_record_handler))
        .route("/shortlinks", post(create_shortlink_handler))
        .route("/shortlinks/clicks", get(clicks_handler))
        .route(
            "/vocabulary",
            get(vocabulary_list_handler).post(create_vocabulary_handler),
        )
        .route(
            "/vocabulary/{id}",
            patch(update_vocabulary_handler).delete(delete_vocabulary_handler),
        )
}
