//! Start Round Use Case

use std::sync::Arc;

use chrono::NaiveDate;
use kernel::id::{GameSessionId, PlayerId};

use crate::application::config::GameConfig;
use crate::domain::entities::GameSession;
use crate::domain::rack::RackGenerator;
use crate::domain::repository::{AccountLedger, GameSessionRepository};
use crate::domain::value_objects::{Rack, Word};
use crate::error::GameResult;

/// Input DTO for start round
#[derive(Debug, Clone)]
pub struct StartRoundInput {
    pub player_id: PlayerId,
    /// Calendar day used for the free swap top-up
    pub today: NaiveDate,
}

/// Output DTO for start round
#[derive(Debug, Clone)]
pub struct StartRoundOutput {
    pub session_id: GameSessionId,
    pub rack: Rack,
    pub free_swaps_left: u32,
    pub gems: u32,
    pub round_seconds: u32,
    /// Always empty: hints are paid for per session
    pub hint_words: Vec<Word>,
}

/// Start Round Use Case
pub struct StartRoundUseCase<S, L>
where
    S: GameSessionRepository,
    L: AccountLedger,
{
    sessions: Arc<S>,
    ledger: Arc<L>,
    racks: Arc<RackGenerator>,
    config: Arc<GameConfig>,
}

impl<S, L> StartRoundUseCase<S, L>
where
    S: GameSessionRepository,
    L: AccountLedger,
{
    pub fn new(
        sessions: Arc<S>,
        ledger: Arc<L>,
        racks: Arc<RackGenerator>,
        config: Arc<GameConfig>,
    ) -> Self {
        Self {
            sessions,
            ledger,
            racks,
            config,
        }
    }

    pub async fn execute(&self, input: StartRoundInput) -> GameResult<StartRoundOutput> {
        let account = self
            .ledger
            .daily_reset(input.player_id, input.today, self.config.free_swaps_per_day)
            .await?;

        let session = GameSession::new(input.player_id, self.racks.draw());
        self.sessions.create(&session).await?;

        tracing::info!(
            session_id = %session.id,
            player_id = %input.player_id,
            rack = %session.rack,
            "Round started"
        );

        Ok(StartRoundOutput {
            session_id: session.id,
            rack: session.rack,
            free_swaps_left: account.free_swaps_left,
            gems: account.gems,
            round_seconds: self.config.round_seconds,
            hint_words: Vec::new(),
        })
    }
}
