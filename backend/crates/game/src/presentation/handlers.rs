//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, State};
use chrono::{NaiveDate, Utc};
use kernel::id::PlayerId;

use crate::application::account::{AccountInput, AccountUseCase};
use crate::application::buy_swaps::{BuySwapsInput, BuySwapsUseCase};
use crate::application::check_word::{CheckWordInput, CheckWordUseCase};
use crate::application::config::GameConfig;
use crate::application::reveal_hints::{RevealHintsInput, RevealHintsUseCase};
use crate::application::start_round::{StartRoundInput, StartRoundUseCase};
use crate::application::submit_round::{SubmitRoundInput, SubmitRoundUseCase};
use crate::application::swap_letters::{SwapLettersInput, SwapLettersUseCase};
use crate::domain::dictionary::Dictionary;
use crate::domain::presets::{HintBook, PresetPool};
use crate::domain::rack::RackGenerator;
use crate::domain::repository::{AccountLedger, GameSessionRepository, RoundLedger};
use crate::error::GameResult;
use crate::presentation::dto::{
    AccountResponse, BuySwapsRequest, BuySwapsResponse, CheckWordRequest, CheckWordResponse,
    GameJson, HintsResponse, SessionRequest, StartResponse, SubmitRequest, SubmitResponse,
    SwapResponse, word_strings,
};

/// Storage the handlers need: sessions plus the player ledger
pub trait GameStore:
    GameSessionRepository + AccountLedger + RoundLedger + Clone + Send + Sync + 'static
{
}

impl<T> GameStore for T where
    T: GameSessionRepository + AccountLedger + RoundLedger + Clone + Send + Sync + 'static
{
}

/// Shared state for game handlers
#[derive(Clone)]
pub struct GameAppState<R>
where
    R: GameStore,
{
    pub repo: Arc<R>,
    pub config: Arc<GameConfig>,
    pub racks: Arc<RackGenerator>,
    pub hints: Arc<HintBook>,
    pub dictionary: Arc<Dictionary>,
}

impl<R> GameAppState<R>
where
    R: GameStore,
{
    pub fn new(repo: R, config: GameConfig, dictionary: Dictionary, presets: Arc<PresetPool>) -> Self {
        let racks = RackGenerator::new(
            config.rack_policy.clone(),
            presets.clone(),
            config.swap_redraw_attempts,
        );
        Self::with_racks(repo, config, dictionary, presets, racks)
    }

    /// Same as `new` with a caller-supplied generator (seeded in tests).
    pub fn with_racks(
        repo: R,
        config: GameConfig,
        dictionary: Dictionary,
        presets: Arc<PresetPool>,
        racks: RackGenerator,
    ) -> Self {
        let hints = HintBook::new(presets, config.hint_limit, config.min_submit_len);
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
            racks: Arc::new(racks),
            hints: Arc::new(hints),
            dictionary: Arc::new(dictionary),
        }
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// POST /api/game/start
pub async fn start<R>(
    State(state): State<GameAppState<R>>,
    Extension(player_id): Extension<PlayerId>,
) -> GameResult<Json<StartResponse>>
where
    R: GameStore,
{
    let use_case = StartRoundUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.racks.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(StartRoundInput {
            player_id,
            today: today(),
        })
        .await?;

    Ok(Json(StartResponse {
        session_id: output.session_id,
        letters: output.rack.to_letter_strings(),
        free_swaps_left: output.free_swaps_left,
        gems: output.gems,
        round_seconds: output.round_seconds,
        hint_words: word_strings(output.hint_words),
    }))
}

/// POST /api/game/swap
pub async fn swap<R>(
    State(state): State<GameAppState<R>>,
    Extension(player_id): Extension<PlayerId>,
    GameJson(req): GameJson<SessionRequest>,
) -> GameResult<Json<SwapResponse>>
where
    R: GameStore,
{
    let use_case = SwapLettersUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.racks.clone(),
        state.hints.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(SwapLettersInput {
            player_id,
            session_id: req.session_id,
            today: today(),
        })
        .await?;

    Ok(Json(SwapResponse {
        letters: output.rack.to_letter_strings(),
        free_swaps_left: output.free_swaps_left,
        gems: output.gems,
        hint_words: word_strings(output.hint_words),
    }))
}

/// POST /api/game/reveal-hints
pub async fn reveal_hints<R>(
    State(state): State<GameAppState<R>>,
    Extension(player_id): Extension<PlayerId>,
    GameJson(req): GameJson<SessionRequest>,
) -> GameResult<Json<HintsResponse>>
where
    R: GameStore,
{
    let use_case = RevealHintsUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.hints.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(RevealHintsInput {
            player_id,
            session_id: req.session_id,
            today: today(),
        })
        .await?;

    Ok(Json(HintsResponse {
        hint_words: word_strings(output.hint_words),
        gems: output.gems,
        free_swaps_left: output.free_swaps_left,
    }))
}

/// POST /api/game/check-word
pub async fn check_word<R>(
    State(state): State<GameAppState<R>>,
    Extension(player_id): Extension<PlayerId>,
    GameJson(req): GameJson<CheckWordRequest>,
) -> GameResult<Json<CheckWordResponse>>
where
    R: GameStore,
{
    let use_case = CheckWordUseCase::new(
        state.repo.clone(),
        state.dictionary.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(CheckWordInput {
            player_id,
            session_id: req.session_id,
            word: req.word,
        })
        .await?;

    Ok(Json(CheckWordResponse {
        word: output.word.into_string(),
    }))
}

/// POST /api/game/submit
pub async fn submit<R>(
    State(state): State<GameAppState<R>>,
    Extension(player_id): Extension<PlayerId>,
    GameJson(req): GameJson<SubmitRequest>,
) -> GameResult<Json<SubmitResponse>>
where
    R: GameStore,
{
    let use_case = SubmitRoundUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.dictionary.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(SubmitRoundInput {
            player_id,
            session_id: req.session_id,
            words: req.words,
            duration_seconds: req.duration_seconds,
            today: today(),
        })
        .await?;

    Ok(Json(SubmitResponse {
        score: output.score,
        gems_earned: output.reward,
        gems_total: output.gems_total,
        free_swaps_left: output.free_swaps_left,
        letters: output.rack.to_letter_strings(),
        words: word_strings(output.words),
    }))
}

/// POST /api/game/buy-swaps
pub async fn buy_swaps<R>(
    State(state): State<GameAppState<R>>,
    Extension(player_id): Extension<PlayerId>,
    GameJson(req): GameJson<BuySwapsRequest>,
) -> GameResult<Json<BuySwapsResponse>>
where
    R: GameStore,
{
    let use_case = BuySwapsUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(BuySwapsInput {
            player_id,
            pack: req.pack,
            today: today(),
        })
        .await?;

    Ok(Json(BuySwapsResponse {
        gems: output.gems,
        free_swaps_left: output.free_swaps_left,
    }))
}

/// GET /api/game/account
pub async fn account<R>(
    State(state): State<GameAppState<R>>,
    Extension(player_id): Extension<PlayerId>,
) -> GameResult<Json<AccountResponse>>
where
    R: GameStore,
{
    let use_case = AccountUseCase::new(state.repo.clone(), state.config.clone());

    let account = use_case
        .execute(AccountInput {
            player_id,
            today: today(),
        })
        .await?;

    Ok(Json(account.into()))
}
