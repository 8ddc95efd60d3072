//! Game Router

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::application::config::GameConfig;
use crate::domain::dictionary::Dictionary;
use crate::domain::presets::PresetPool;
use crate::infra::postgres::PgGameRepository;
use crate::presentation::handlers::{self, GameAppState, GameStore};
use crate::presentation::middleware::require_player;

/// Create the game router with PostgreSQL repository
pub fn game_router(repo: PgGameRepository, config: GameConfig, dictionary: Dictionary) -> Router {
    game_router_generic(repo, config, dictionary)
}

/// Create a generic game router for any repository implementation
pub fn game_router_generic<R>(repo: R, config: GameConfig, dictionary: Dictionary) -> Router
where
    R: GameStore,
{
    let state = GameAppState::new(repo, config, dictionary, Arc::new(PresetPool::standard()));
    game_router_with_state(state)
}

/// Router over prepared state
pub fn game_router_with_state<R>(state: GameAppState<R>) -> Router
where
    R: GameStore,
{
    Router::new()
        .route("/start", post(handlers::start::<R>))
        .route("/swap", post(handlers::swap::<R>))
        .route("/reveal-hints", post(handlers::reveal_hints::<R>))
        .route("/check-word", post(handlers::check_word::<R>))
        .route("/submit", post(handlers::submit::<R>))
        .route("/buy-swaps", post(handlers::buy_swaps::<R>))
        .route("/account", get(handlers::account::<R>))
        .layer(middleware::from_fn(require_player))
        .with_state(state)
}
