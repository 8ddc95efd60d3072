//! Startup maintenance
//!
//! Closes rounds nobody finished and drops expired dictionary verdicts.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::GameConfig;
use crate::domain::repository::{DictionaryCache, GameSessionRepository};
use crate::error::GameResult;

/// What a sweep removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub abandoned_rounds: u64,
    pub expired_cache_entries: u64,
}

pub struct MaintenanceUseCase<S, C>
where
    S: GameSessionRepository,
    C: DictionaryCache,
{
    sessions: Arc<S>,
    cache: Arc<C>,
    config: Arc<GameConfig>,
}

impl<S, C> MaintenanceUseCase<S, C>
where
    S: GameSessionRepository,
    C: DictionaryCache,
{
    pub fn new(sessions: Arc<S>, cache: Arc<C>, config: Arc<GameConfig>) -> Self {
        Self {
            sessions,
            cache,
            config,
        }
    }

    pub async fn execute(&self, now: DateTime<Utc>) -> GameResult<SweepReport> {
        let cutoff = now - self.config.abandon_after_chrono();
        let abandoned_rounds = self.sessions.finalize_abandoned(cutoff).await?;
        let expired_cache_entries = self.cache.purge_expired(now).await?;

        tracing::info!(abandoned_rounds, expired_cache_entries, "Startup sweep finished");

        Ok(SweepReport {
            abandoned_rounds,
            expired_cache_entries,
        })
    }
}
