//! Reveal Hints Use Case
//!
//! The first reveal in a session is paid for; later calls return the hints
//! for the current rack without charging.

use std::sync::Arc;

use chrono::NaiveDate;
use kernel::id::{GameSessionId, PlayerId};

use crate::application::config::GameConfig;
use crate::application::validation::load_owned;
use crate::domain::presets::HintBook;
use crate::domain::repository::{AccountLedger, GameSessionRepository, RoundLedger};
use crate::domain::value_objects::Word;
use crate::error::{GameError, GameResult};

/// Input DTO for reveal hints
#[derive(Debug, Clone)]
pub struct RevealHintsInput {
    pub player_id: PlayerId,
    pub session_id: GameSessionId,
    pub today: NaiveDate,
}

/// Output DTO for reveal hints
#[derive(Debug, Clone)]
pub struct RevealHintsOutput {
    pub hint_words: Vec<Word>,
    pub gems: u32,
    pub free_swaps_left: u32,
    /// Whether this call paid for the hints
    pub charged: bool,
}

/// Reveal Hints Use Case
pub struct RevealHintsUseCase<S, L>
where
    S: GameSessionRepository,
    L: AccountLedger + RoundLedger,
{
    sessions: Arc<S>,
    ledger: Arc<L>,
    hints: Arc<HintBook>,
    config: Arc<GameConfig>,
}

impl<S, L> RevealHintsUseCase<S, L>
where
    S: GameSessionRepository,
    L: AccountLedger + RoundLedger,
{
    pub fn new(
        sessions: Arc<S>,
        ledger: Arc<L>,
        hints: Arc<HintBook>,
        config: Arc<GameConfig>,
    ) -> Self {
        Self {
            sessions,
            ledger,
            hints,
            config,
        }
    }

    pub async fn execute(&self, input: RevealHintsInput) -> GameResult<RevealHintsOutput> {
        let session = load_owned(&*self.sessions, input.session_id, input.player_id).await?;
        session.ensure_active()?;

        let account = self
            .ledger
            .daily_reset(input.player_id, input.today, self.config.free_swaps_per_day)
            .await?;

        if session.hints_revealed {
            return Ok(RevealHintsOutput {
                hint_words: self.hints.hints_for(&session.rack),
                gems: account.gems,
                free_swaps_left: account.free_swaps_left,
                charged: false,
            });
        }

        let charged = self
            .ledger
            .reveal_with_debit(session.id, input.player_id, self.config.hint_cost)
            .await?;

        let Some(account) = charged else {
            // Lost a race: either a concurrent reveal already paid, or the
            // round completed. Nothing was charged.
            let current = load_owned(&*self.sessions, input.session_id, input.player_id).await?;
            current.ensure_active()?;
            if !current.hints_revealed {
                return Err(GameError::Internal(
                    "hint reveal flag rejected on an active session".to_string(),
                ));
            }
            let account = self
                .ledger
                .daily_reset(input.player_id, input.today, self.config.free_swaps_per_day)
                .await?;
            return Ok(RevealHintsOutput {
                hint_words: self.hints.hints_for(&current.rack),
                gems: account.gems,
                free_swaps_left: account.free_swaps_left,
                charged: false,
            });
        };

        tracing::info!(
            session_id = %session.id,
            player_id = %input.player_id,
            cost = self.config.hint_cost,
            "Hints revealed"
        );

        Ok(RevealHintsOutput {
            hint_words: self.hints.hints_for(&session.rack),
            gems: account.gems,
            free_swaps_left: account.free_swaps_left,
            charged: true,
        })
    }
}
