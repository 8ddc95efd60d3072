//! Swap Letters Use Case

use std::sync::Arc;

use chrono::NaiveDate;
use kernel::id::{GameSessionId, PlayerId};

use crate::application::config::GameConfig;
use crate::application::validation::load_owned;
use crate::domain::presets::HintBook;
use crate::domain::rack::RackGenerator;
use crate::domain::repository::{AccountLedger, GameSessionRepository, RoundLedger};
use crate::domain::value_objects::{Rack, Word};
use crate::error::GameResult;

/// Input DTO for swap letters
#[derive(Debug, Clone)]
pub struct SwapLettersInput {
    pub player_id: PlayerId,
    pub session_id: GameSessionId,
    pub today: NaiveDate,
}

/// Output DTO for swap letters
#[derive(Debug, Clone)]
pub struct SwapLettersOutput {
    pub rack: Rack,
    pub free_swaps_left: u32,
    pub gems: u32,
    /// Hints for the new rack when the session already paid for them
    pub hint_words: Vec<Word>,
}

/// Swap Letters Use Case
pub struct SwapLettersUseCase<S, L>
where
    S: GameSessionRepository,
    L: AccountLedger + RoundLedger,
{
    sessions: Arc<S>,
    ledger: Arc<L>,
    racks: Arc<RackGenerator>,
    hints: Arc<HintBook>,
    config: Arc<GameConfig>,
}

impl<S, L> SwapLettersUseCase<S, L>
where
    S: GameSessionRepository,
    L: AccountLedger + RoundLedger,
{
    pub fn new(
        sessions: Arc<S>,
        ledger: Arc<L>,
        racks: Arc<RackGenerator>,
        hints: Arc<HintBook>,
        config: Arc<GameConfig>,
    ) -> Self {
        Self {
            sessions,
            ledger,
            racks,
            hints,
            config,
        }
    }

    pub async fn execute(&self, input: SwapLettersInput) -> GameResult<SwapLettersOutput> {
        let session = load_owned(&*self.sessions, input.session_id, input.player_id).await?;
        session.ensure_active()?;

        self.ledger
            .daily_reset(input.player_id, input.today, self.config.free_swaps_per_day)
            .await?;

        let rack = self.racks.redraw(&session.rack);
        let account = self
            .ledger
            .swap_with_credit(session.id, input.player_id, &rack)
            .await?;

        tracing::info!(
            session_id = %session.id,
            player_id = %input.player_id,
            rack = %rack,
            free_swaps_left = account.free_swaps_left,
            "Letters swapped"
        );

        let hint_words = if session.hints_revealed {
            self.hints.hints_for(&rack)
        } else {
            Vec::new()
        };

        Ok(SwapLettersOutput {
            rack,
            free_swaps_left: account.free_swaps_left,
            gems: account.gems,
            hint_words,
        })
    }
}
