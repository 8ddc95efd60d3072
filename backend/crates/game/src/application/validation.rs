//! Checks shared by several use cases

use kernel::id::{GameSessionId, PlayerId};

use crate::domain::dictionary::Dictionary;
use crate::domain::entities::GameSession;
use crate::domain::letter_bag::LetterBag;
use crate::domain::repository::GameSessionRepository;
use crate::domain::value_objects::Word;
use crate::error::{GameError, GameResult};

/// Load a session the requester owns.
pub(crate) async fn load_owned<S>(
    sessions: &S,
    session_id: GameSessionId,
    player_id: PlayerId,
) -> GameResult<GameSession>
where
    S: GameSessionRepository,
{
    sessions
        .find_owned(session_id, player_id)
        .await?
        .ok_or(GameError::SessionNotFound)
}

/// Letters first: it is free, the dictionary may hit the network.
pub(crate) async fn is_playable(bag: &LetterBag, dictionary: &Dictionary, word: &Word) -> bool {
    bag.can_build(word.as_str()) && dictionary.exists(word).await
}
