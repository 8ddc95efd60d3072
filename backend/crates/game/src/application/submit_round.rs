//! Submit Round Use Case
//!
//! Completes a round exactly once. Any later submit, including one that
//! races the first, gets the frozen result back.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use kernel::id::{GameSessionId, PlayerId};

use crate::application::config::GameConfig;
use crate::application::validation::{is_playable, load_owned};
use crate::domain::dictionary::Dictionary;
use crate::domain::entities::{GameSession, RoundOutcome};
use crate::domain::letter_bag::LetterBag;
use crate::domain::repository::{AccountLedger, GameSessionRepository, RoundLedger};
use crate::domain::scoring::tally;
use crate::domain::value_objects::{Rack, Word};
use crate::error::{GameError, GameResult};

/// Input DTO for submit round
#[derive(Debug, Clone)]
pub struct SubmitRoundInput {
    pub player_id: PlayerId,
    pub session_id: GameSessionId,
    pub words: Vec<String>,
    pub duration_seconds: i64,
    pub today: NaiveDate,
}

/// Output DTO for submit round
#[derive(Debug, Clone)]
pub struct SubmitRoundOutput {
    pub score: u32,
    pub reward: u32,
    pub gems_total: u32,
    pub free_swaps_left: u32,
    pub rack: Rack,
    /// Words that counted, in submission order
    pub words: Vec<Word>,
    /// False when the round had already been completed
    pub newly_completed: bool,
}

/// Submit Round Use Case
pub struct SubmitRoundUseCase<S, L>
where
    S: GameSessionRepository,
    L: AccountLedger + RoundLedger,
{
    sessions: Arc<S>,
    ledger: Arc<L>,
    dictionary: Arc<Dictionary>,
    config: Arc<GameConfig>,
}

impl<S, L> SubmitRoundUseCase<S, L>
where
    S: GameSessionRepository,
    L: AccountLedger + RoundLedger,
{
    pub fn new(
        sessions: Arc<S>,
        ledger: Arc<L>,
        dictionary: Arc<Dictionary>,
        config: Arc<GameConfig>,
    ) -> Self {
        Self {
            sessions,
            ledger,
            dictionary,
            config,
        }
    }

    pub async fn execute(&self, input: SubmitRoundInput) -> GameResult<SubmitRoundOutput> {
        let session = load_owned(&*self.sessions, input.session_id, input.player_id).await?;
        if session.is_completed() {
            return self.frozen(&session, input.today).await;
        }

        let duration_seconds = self.validate_duration(input.duration_seconds)?;
        let candidates = self.parse_candidates(&input.words)?;

        let bag = LetterBag::from_rack(&session.rack);
        let mut accepted = Vec::with_capacity(candidates.len());
        for word in candidates {
            if is_playable(&bag, &self.dictionary, &word).await {
                accepted.push(word);
            }
        }

        let totals = tally(&accepted);
        let outcome = RoundOutcome {
            words: accepted,
            score: totals.score,
            reward: totals.reward,
            duration_seconds,
            completed_at: Utc::now(),
        };

        let Some(account) = self
            .ledger
            .complete_and_record(session.id, input.player_id, &outcome)
            .await?
        else {
            tracing::debug!(session_id = %session.id, "Submit lost the race; returning frozen result");
            let current = load_owned(&*self.sessions, input.session_id, input.player_id).await?;
            return self.frozen(&current, input.today).await;
        };

        tracing::info!(
            session_id = %session.id,
            player_id = %input.player_id,
            words = outcome.words.len(),
            score = outcome.score,
            reward = outcome.reward,
            duration_seconds,
            "Round completed"
        );

        Ok(SubmitRoundOutput {
            score: outcome.score,
            reward: outcome.reward,
            gems_total: account.gems,
            free_swaps_left: account.free_swaps_left,
            rack: session.rack,
            words: outcome.words,
            newly_completed: true,
        })
    }

    async fn frozen(&self, session: &GameSession, today: NaiveDate) -> GameResult<SubmitRoundOutput> {
        let outcome = session
            .outcome()
            .ok_or_else(|| GameError::Internal("completed session without outcome".to_string()))?;
        let account = self
            .ledger
            .daily_reset(session.player_id, today, self.config.free_swaps_per_day)
            .await?;

        Ok(SubmitRoundOutput {
            score: outcome.score,
            reward: outcome.reward,
            gems_total: account.gems,
            free_swaps_left: account.free_swaps_left,
            rack: session.rack.clone(),
            words: outcome.words,
            newly_completed: false,
        })
    }

    fn validate_duration(&self, duration_seconds: i64) -> GameResult<u32> {
        let max = self.config.round_seconds;
        u32::try_from(duration_seconds)
            .ok()
            .filter(|d| *d <= max)
            .ok_or_else(|| {
                GameError::InvalidInput(format!("durationSeconds must be within 0..={max}"))
            })
    }

    /// Shape checks, then normalize, dedupe (first occurrence wins) and drop
    /// words below the scoring minimum.
    fn parse_candidates(&self, raw: &[String]) -> GameResult<Vec<Word>> {
        if raw.len() > self.config.max_submitted_words {
            return Err(GameError::InvalidInput(format!(
                "at most {} words per submission",
                self.config.max_submitted_words
            )));
        }

        let mut seen = HashSet::new();
        let mut words = Vec::with_capacity(raw.len());
        for candidate in raw {
            let word = Word::parse(candidate, self.config.min_word_len, self.config.max_word_len)?;
            if word.char_len() < self.config.min_submit_len {
                continue;
            }
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }
        Ok(words)
    }
}
