//! In-memory repository
//!
//! Same contracts as the Postgres adapter, with one mutex standing in for
//! row locks. Used by tests and by the server when no database is configured.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{GameSessionId, PlayerId};

use crate::domain::entities::{GameSession, PlayerAccount, RoundOutcome};
use crate::domain::repository::{
    AccountLedger, DictionaryCache, GameSessionRepository, RoundLedger,
};
use crate::domain::value_objects::{Rack, Word};
use crate::error::{GameError, GameResult};

#[derive(Debug, Default)]
struct State {
    sessions: HashMap<GameSessionId, GameSession>,
    accounts: HashMap<PlayerId, PlayerAccount>,
    cache: HashMap<Word, (bool, DateTime<Utc>)>,
}

/// Mutex-backed repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameRepository {
    state: Arc<Mutex<State>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed or overwrite an account.
    pub fn put_account(&self, account: PlayerAccount) {
        self.lock().accounts.insert(account.player_id, account);
    }

    pub fn account(&self, player_id: PlayerId) -> Option<PlayerAccount> {
        self.lock().accounts.get(&player_id).cloned()
    }

    pub fn session(&self, session_id: GameSessionId) -> Option<GameSession> {
        self.lock().sessions.get(&session_id).cloned()
    }

    pub fn cached_verdict(&self, word: &Word) -> Option<bool> {
        self.lock().cache.get(word).map(|(valid, _)| *valid)
    }

    /// Cached verdict with its expiry
    pub fn cached_entry(&self, word: &Word) -> Option<(bool, DateTime<Utc>)> {
        self.lock().cache.get(word).copied()
    }

    /// Run `f` on an active session and its owner's account under one lock.
    /// Nothing is written unless `f` returns `Ok(Some(_))`.
    fn with_session_and_account<F, T>(
        &self,
        session_id: GameSessionId,
        player_id: PlayerId,
        f: F,
    ) -> GameResult<Option<T>>
    where
        F: FnOnce(&mut GameSession, &mut PlayerAccount) -> GameResult<Option<T>>,
    {
        let mut state = self.lock();
        let State {
            sessions, accounts, ..
        } = &mut *state;
        let Some(stored) = sessions
            .get(&session_id)
            .filter(|s| s.player_id == player_id && !s.is_completed())
        else {
            return Ok(None);
        };
        let stored_account = accounts
            .get(&player_id)
            .ok_or_else(|| GameError::Internal(format!("account {player_id} vanished")))?;

        let mut session = stored.clone();
        let mut account = stored_account.clone();
        let result = f(&mut session, &mut account)?;
        if result.is_some() {
            sessions.insert(session_id, session);
            accounts.insert(player_id, account);
        }
        Ok(result)
    }
}

impl GameSessionRepository for InMemoryGameRepository {
    async fn create(&self, session: &GameSession) -> GameResult<()> {
        self.lock().sessions.insert(session.id, session.clone());
        Ok(())
    }

    async fn find_owned(
        &self,
        session_id: GameSessionId,
        player_id: PlayerId,
    ) -> GameResult<Option<GameSession>> {
        Ok(self
            .lock()
            .sessions
            .get(&session_id)
            .filter(|s| s.player_id == player_id)
            .cloned())
    }

    async fn finalize_abandoned(&self, cutoff: DateTime<Utc>) -> GameResult<u64> {
        let now = Utc::now();
        let mut closed = 0;
        for session in self.lock().sessions.values_mut() {
            if session.is_abandoned(cutoff) {
                session.apply_outcome(RoundOutcome::forfeit(now));
                closed += 1;
            }
        }
        Ok(closed)
    }
}

impl AccountLedger for InMemoryGameRepository {
    async fn daily_reset(
        &self,
        player_id: PlayerId,
        today: NaiveDate,
        allotment: u32,
    ) -> GameResult<PlayerAccount> {
        let mut state = self.lock();
        let account = state
            .accounts
            .entry(player_id)
            .or_insert_with(|| PlayerAccount::new(player_id, allotment));
        account.apply_daily_reset(today, allotment);
        Ok(account.clone())
    }

    async fn exchange_for_swaps(
        &self,
        player_id: PlayerId,
        cost: u32,
        swaps: u32,
    ) -> GameResult<PlayerAccount> {
        let mut state = self.lock();
        let account = state
            .accounts
            .get_mut(&player_id)
            .ok_or(GameError::InsufficientCurrency)?;
        account.gems = account
            .gems
            .checked_sub(cost)
            .ok_or(GameError::InsufficientCurrency)?;
        account.free_swaps_left = account.free_swaps_left.saturating_add(swaps);
        Ok(account.clone())
    }
}

impl RoundLedger for InMemoryGameRepository {
    async fn complete_and_record(
        &self,
        session_id: GameSessionId,
        player_id: PlayerId,
        outcome: &RoundOutcome,
    ) -> GameResult<Option<PlayerAccount>> {
        self.with_session_and_account(session_id, player_id, |session, account| {
            session.apply_outcome(outcome.clone());
            account.record_round(outcome.score, outcome.reward);
            Ok(Some(account.clone()))
        })
    }

    async fn swap_with_credit(
        &self,
        session_id: GameSessionId,
        player_id: PlayerId,
        rack: &Rack,
    ) -> GameResult<PlayerAccount> {
        self.with_session_and_account(session_id, player_id, |session, account| {
            account.free_swaps_left = account
                .free_swaps_left
                .checked_sub(1)
                .ok_or(GameError::NoSwapsAvailable)?;
            session.rack = rack.clone();
            session.swaps_used += 1;
            Ok(Some(account.clone()))
        })?
        .ok_or(GameError::SessionCompleted)
    }

    async fn reveal_with_debit(
        &self,
        session_id: GameSessionId,
        player_id: PlayerId,
        cost: u32,
    ) -> GameResult<Option<PlayerAccount>> {
        self.with_session_and_account(session_id, player_id, |session, account| {
            if session.hints_revealed {
                return Ok(None);
            }
            account.gems = account
                .gems
                .checked_sub(cost)
                .ok_or(GameError::InsufficientCurrency)?;
            session.hints_revealed = true;
            Ok(Some(account.clone()))
        })
    }
}

impl DictionaryCache for InMemoryGameRepository {
    async fn get(&self, word: &Word, now: DateTime<Utc>) -> GameResult<Option<bool>> {
        Ok(self
            .lock()
            .cache
            .get(word)
            .filter(|(_, expires_at)| *expires_at > now)
            .map(|(valid, _)| *valid))
    }

    async fn put(&self, word: &Word, valid: bool, expires_at: DateTime<Utc>) -> GameResult<()> {
        self.lock().cache.insert(word.clone(), (valid, expires_at));
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> GameResult<u64> {
        let mut state = self.lock();
        let before = state.cache.len();
        state.cache.retain(|_, (_, expires_at)| *expires_at > now);
        Ok((before - state.cache.len()) as u64)
    }
}
