//! API DTOs (Data Transfer Objects)

use axum::extract::FromRequest;
use kernel::id::GameSessionId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::PlayerAccount;
use crate::domain::value_objects::Word;
use crate::error::GameError;

/// JSON request body whose rejections render as `INVALID_INPUT` problems
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(GameError))]
pub struct GameJson<T>(pub T);

pub(crate) fn word_strings(words: Vec<Word>) -> Vec<String> {
    words.into_iter().map(Word::into_string).collect()
}

/// Response for POST /api/game/start
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub session_id: GameSessionId,
    pub letters: Vec<String>,
    pub free_swaps_left: u32,
    pub gems: u32,
    pub round_seconds: u32,
    pub hint_words: Vec<String>,
}

/// Request for POST /api/game/swap and /api/game/reveal-hints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    pub session_id: GameSessionId,
}

/// Response for POST /api/game/swap
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    pub letters: Vec<String>,
    pub free_swaps_left: u32,
    pub gems: u32,
    pub hint_words: Vec<String>,
}

/// Response for POST /api/game/reveal-hints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintsResponse {
    pub hint_words: Vec<String>,
    pub gems: u32,
    pub free_swaps_left: u32,
}

/// Request for POST /api/game/check-word
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckWordRequest {
    pub session_id: GameSessionId,
    pub word: String,
}

/// Response for POST /api/game/check-word
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckWordResponse {
    pub word: String,
}

/// Request for POST /api/game/submit
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub session_id: GameSessionId,
    #[serde(default)]
    pub words: Vec<String>,
    pub duration_seconds: i64,
}

/// Response for POST /api/game/submit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub score: u32,
    pub gems_earned: u32,
    pub gems_total: u32,
    pub free_swaps_left: u32,
    pub letters: Vec<String>,
    pub words: Vec<String>,
}

/// Request for POST /api/game/buy-swaps
#[derive(Debug, Clone, Deserialize)]
pub struct BuySwapsRequest {
    pub pack: u32,
}

/// Response for POST /api/game/buy-swaps
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuySwapsResponse {
    pub gems: u32,
    pub free_swaps_left: u32,
}

/// Response for GET /api/game/account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub gems: u32,
    pub free_swaps_left: u32,
    pub best_score: u32,
    pub total_gems: u32,
    pub total_games: u32,
}

impl From<PlayerAccount> for AccountResponse {
    fn from(account: PlayerAccount) -> Self {
        Self {
            gems: account.gems,
            free_swaps_left: account.free_swaps_left,
            best_score: account.best_score,
            total_gems: account.total_gems,
            total_games: account.total_games,
        }
    }
}
