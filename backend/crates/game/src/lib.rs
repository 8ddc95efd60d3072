//! Word Game Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database, word list and remote dictionary adapters
//! - `presentation/` - HTTP handlers
//!
//! ## Round Model
//! - The backend deals every rack and is the only judge of word validity
//! - A round is completed exactly once; later submits read the frozen result
//! - Swap credits and gems only move through conditional ledger updates,
//!   committed together with the session change they pay for
//! - Dictionary network failures never fail a request

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{DictionaryConfig, GameConfig, RackPolicy};
pub use error::{GameError, GameResult};
pub use infra::dictionary::build_dictionary;
pub use infra::memory::InMemoryGameRepository;
pub use infra::postgres::PgGameRepository;
pub use presentation::router::{game_router, game_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
