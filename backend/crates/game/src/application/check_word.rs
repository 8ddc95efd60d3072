//! Check Word Use Case
//!
//! Dry run of a single word against the session's current rack. Nothing is
//! written, so finished rounds can still be queried.

use std::sync::Arc;

use kernel::id::{GameSessionId, PlayerId};

use crate::application::config::GameConfig;
use crate::application::validation::{is_playable, load_owned};
use crate::domain::dictionary::Dictionary;
use crate::domain::letter_bag::LetterBag;
use crate::domain::repository::GameSessionRepository;
use crate::domain::value_objects::Word;
use crate::error::{GameError, GameResult};

/// Input DTO for check word
#[derive(Debug, Clone)]
pub struct CheckWordInput {
    pub player_id: PlayerId,
    pub session_id: GameSessionId,
    pub word: String,
}

/// Output DTO for check word
#[derive(Debug, Clone)]
pub struct CheckWordOutput {
    pub word: Word,
}

/// Check Word Use Case
pub struct CheckWordUseCase<S>
where
    S: GameSessionRepository,
{
    sessions: Arc<S>,
    dictionary: Arc<Dictionary>,
    config: Arc<GameConfig>,
}

impl<S> CheckWordUseCase<S>
where
    S: GameSessionRepository,
{
    pub fn new(sessions: Arc<S>, dictionary: Arc<Dictionary>, config: Arc<GameConfig>) -> Self {
        Self {
            sessions,
            dictionary,
            config,
        }
    }

    pub async fn execute(&self, input: CheckWordInput) -> GameResult<CheckWordOutput> {
        let word = Word::parse(&input.word, self.config.min_word_len, self.config.max_word_len)?;
        let session = load_owned(&*self.sessions, input.session_id, input.player_id).await?;

        let bag = LetterBag::from_rack(&session.rack);
        if !is_playable(&bag, &self.dictionary, &word).await {
            tracing::debug!(session_id = %session.id, word = %word, "Word rejected");
            return Err(GameError::WordRejected);
        }

        Ok(CheckWordOutput { word })
    }
}
