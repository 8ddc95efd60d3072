//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors go through `game::GameError` and `kernel::error::AppError`.

mod settings;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router, http,
    http::{HeaderName, Method, header},
};
use chrono::Utc;
use game::application::maintenance::MaintenanceUseCase;
use game::domain::presets::PresetPool;
use game::domain::repository::DictionaryCache;
use game::presentation::handlers::GameStore;
use game::{
    GameConfig, InMemoryGameRepository, PgGameRepository, build_dictionary, game_router_generic,
};
use platform::client::PLAYER_ID_HEADER;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,game=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;

    let game_api = match &settings.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            game_routes(PgGameRepository::new(pool), &settings).await?
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using the in-memory store (state is lost on restart)");
            game_routes(InMemoryGameRepository::new(), &settings).await?
        }
    };

    let allowed_origins: Vec<http::HeaderValue> = settings
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            HeaderName::from_static(PLAYER_ID_HEADER),
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api/game", game_api)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", settings.bind_addr);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Sweep leftovers, assemble the dictionary and build the game router over `repo`.
async fn game_routes<R>(repo: R, settings: &Settings) -> anyhow::Result<Router>
where
    R: GameStore + DictionaryCache,
{
    startup_sweep(&repo, &settings.game).await;

    let dictionary = build_dictionary(
        &settings.dictionary,
        &PresetPool::standard(),
        Arc::new(repo.clone()),
    )
    .await?;

    Ok(game_router_generic(repo, settings.game.clone(), dictionary))
}

// Errors here should not prevent server startup
async fn startup_sweep<R>(repo: &R, config: &GameConfig)
where
    R: GameStore + DictionaryCache,
{
    let repo = Arc::new(repo.clone());
    let sweep = MaintenanceUseCase::new(repo.clone(), repo, Arc::new(config.clone()));

    if let Err(e) = sweep.execute(Utc::now()).await {
        tracing::warn!(
            error = %e,
            "Startup sweep failed, continuing anyway"
        );
    }
}
