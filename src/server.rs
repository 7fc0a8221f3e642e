//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, service wiring, and Axum server
//! lifecycle.

use crate::config::Config;
use crate::application::services::{HistoryService, ShortlinkService, VocabularyService};
use crate::infrastructure::gateway::HttpShortlinkGateway;
use crate::infrastructure::persistence::{PgRecordRepository, PgVocabularyRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Shortlink gateway client
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let record_repository = Arc::new(PgRecordRepository::new(pool.clone()));
    let vocabulary_repository = Arc::new(PgVocabularyRepository::new(pool.clone()));
    let gateway = Arc::new(HttpShortlinkGateway::new(
        config.shortener_api_base.clone(),
        config.shortener_token.clone(),
    ));

    let history_service = Arc::new(HistoryService::new(record_repository.clone()));
    let shortlink_service = Arc::new(ShortlinkService::new(record_repository, gateway));
    let vocabulary_service = Arc::new(VocabularyService::new(vocabulary_repository));

    let state = AppState::new(history_service, shortlink_service, vocabulary_service);

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
