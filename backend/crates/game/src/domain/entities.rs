//! Domain Entities
//!
//! Core business entities for the word game domain.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{GameSessionId, PlayerId};

use crate::domain::value_objects::{Rack, SessionStatus, Word};
use crate::error::{GameError, GameResult};

/// GameSession entity - one round for one player
#[derive(Debug, Clone)]
pub struct GameSession {
    pub id: GameSessionId,
    pub player_id: PlayerId,
    pub rack: Rack,
    /// Accepted words, in submission order. Empty until completion.
    pub accepted_words: Vec<Word>,
    pub swaps_used: u32,
    pub hints_revealed: bool,
    pub score: u32,
    pub reward: u32,
    pub duration_seconds: u32,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl GameSession {
    /// Create a new active session
    pub fn new(player_id: PlayerId, rack: Rack) -> Self {
        Self {
            id: GameSessionId::new(),
            player_id,
            rack,
            accepted_words: Vec::new(),
            swaps_used: 0,
            hints_revealed: false,
            score: 0,
            reward: 0,
            duration_seconds: 0,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn status(&self) -> SessionStatus {
        if self.completed_at.is_some() {
            SessionStatus::Completed
        } else {
            SessionStatus::Active
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status() == SessionStatus::Completed
    }

    pub fn ensure_active(&self) -> GameResult<()> {
        if self.is_completed() {
            return Err(GameError::SessionCompleted);
        }
        Ok(())
    }

    /// Frozen result of a completed round
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.completed_at.map(|completed_at| RoundOutcome {
            words: self.accepted_words.clone(),
            score: self.score,
            reward: self.reward,
            duration_seconds: self.duration_seconds,
            completed_at,
        })
    }

    /// Write the frozen result. Callers check the session is still active.
    pub fn apply_outcome(&mut self, outcome: RoundOutcome) {
        self.accepted_words = outcome.words;
        self.score = outcome.score;
        self.reward = outcome.reward;
        self.duration_seconds = outcome.duration_seconds;
        self.completed_at = Some(outcome.completed_at);
    }

    /// Active and started before `cutoff`
    pub fn is_abandoned(&self, cutoff: DateTime<Utc>) -> bool {
        !self.is_completed() && self.created_at < cutoff
    }
}

/// Result written once when a round completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub words: Vec<Word>,
    pub score: u32,
    pub reward: u32,
    pub duration_seconds: u32,
    pub completed_at: DateTime<Utc>,
}

impl RoundOutcome {
    /// Outcome of a round nobody finished
    pub fn forfeit(now: DateTime<Utc>) -> Self {
        Self {
            words: Vec::new(),
            score: 0,
            reward: 0,
            duration_seconds: 0,
            completed_at: now,
        }
    }
}

/// PlayerAccount entity - the game's view of a player's balances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerAccount {
    pub player_id: PlayerId,
    pub gems: u32,
    /// Swap credits: the daily free allotment plus purchased packs
    pub free_swaps_left: u32,
    pub last_free_reset_at: Option<NaiveDate>,
    pub best_score: u32,
    pub total_gems: u32,
    pub total_games: u32,
}

impl PlayerAccount {
    /// Fresh account holding a full daily allotment
    pub fn new(player_id: PlayerId, free_swaps: u32) -> Self {
        Self {
            player_id,
            gems: 0,
            free_swaps_left: free_swaps,
            last_free_reset_at: None,
            best_score: 0,
            total_gems: 0,
            total_games: 0,
        }
    }

    /// Top up swap credits once per calendar day.
    ///
    /// Only raises the count: purchased credits above the allotment are
    /// kept. Returns whether anything changed.
    pub fn apply_daily_reset(&mut self, today: NaiveDate, allotment: u32) -> bool {
        if self.last_free_reset_at == Some(today) {
            return false;
        }
        self.last_free_reset_at = Some(today);
        if self.free_swaps_left < allotment {
            self.free_swaps_left = allotment;
        }
        true
    }

    /// Fold a finished round into the statistics.
    pub fn record_round(&mut self, score: u32, reward: u32) {
        self.gems = self.gems.saturating_add(reward);
        self.best_score = self.best_score.max(score);
        self.total_gems = self.total_gems.saturating_add(reward);
        self.total_games = self.total_games.saturating_add(1);
    }
}
