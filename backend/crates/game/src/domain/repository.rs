//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.
//!
//! Every mutating method is a single conditional step: it either applies in
//! full or reports that its precondition no longer holds. Steps that touch a
//! session and a balance together live on `RoundLedger`.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{GameSessionId, PlayerId};

use crate::domain::entities::{GameSession, PlayerAccount, RoundOutcome};
use crate::domain::value_objects::{Rack, Word};
use crate::error::GameResult;

/// GameSession repository trait
#[trait_variant::make(GameSessionRepository: Send)]
pub trait LocalGameSessionRepository {
    /// Persist a new session
    async fn create(&self, session: &GameSession) -> GameResult<()>;

    /// Load a session owned by `player_id`. Someone else's session is `None`.
    async fn find_owned(
        &self,
        session_id: GameSessionId,
        player_id: PlayerId,
    ) -> GameResult<Option<GameSession>>;

    /// Complete every active session created before `cutoff` with a zero
    /// score. Returns how many were closed.
    async fn finalize_abandoned(&self, cutoff: DateTime<Utc>) -> GameResult<u64>;
}

/// Player balance ledger trait
#[trait_variant::make(AccountLedger: Send)]
pub trait LocalAccountLedger {
    /// Apply the daily swap top-up (creating the account if needed) and
    /// return the resulting balances.
    async fn daily_reset(
        &self,
        player_id: PlayerId,
        today: NaiveDate,
        allotment: u32,
    ) -> GameResult<PlayerAccount>;

    /// Pay `cost` gems for `swaps` credits in one step.
    async fn exchange_for_swaps(
        &self,
        player_id: PlayerId,
        cost: u32,
        swaps: u32,
    ) -> GameResult<PlayerAccount>;
}

/// Session changes paired with a balance movement. Each call applies both
/// sides or neither.
#[trait_variant::make(RoundLedger: Send)]
pub trait LocalRoundLedger {
    /// Freeze the result and credit the reward together, only while active.
    /// `None` means another request completed the round first.
    async fn complete_and_record(
        &self,
        session_id: GameSessionId,
        player_id: PlayerId,
        outcome: &RoundOutcome,
    ) -> GameResult<Option<PlayerAccount>>;

    /// Take one swap credit and install the new rack. `SessionCompleted` once
    /// the round is over, `NoSwapsAvailable` at zero credits.
    async fn swap_with_credit(
        &self,
        session_id: GameSessionId,
        player_id: PlayerId,
        rack: &Rack,
    ) -> GameResult<PlayerAccount>;

    /// Charge `cost` gems and flag hints as revealed. `None` when the flag
    /// could not be set (already revealed or round over); nothing is charged
    /// then. `InsufficientCurrency` when the balance is too low.
    async fn reveal_with_debit(
        &self,
        session_id: GameSessionId,
        player_id: PlayerId,
        cost: u32,
    ) -> GameResult<Option<PlayerAccount>>;
}

/// Verdict cache for slow dictionary layers
#[trait_variant::make(DictionaryCache: Send)]
pub trait LocalDictionaryCache {
    /// Unexpired verdict for the word, if any
    async fn get(&self, word: &Word, now: DateTime<Utc>) -> GameResult<Option<bool>>;

    async fn put(&self, word: &Word, valid: bool, expires_at: DateTime<Utc>) -> GameResult<()>;

    /// Drop expired entries. Returns how many were removed.
    async fn purge_expired(&self, now: DateTime<Utc>) -> GameResult<u64>;
}
