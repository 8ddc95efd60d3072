//! PostgreSQL Repository Implementations
//!
//! Every state change is one conditional statement, so concurrent requests
//! against the same row cannot both succeed where only one may. Changes that
//! touch a session and a balance run in one transaction, session row first.
//! Returning early drops the transaction, which rolls it back.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{GameSessionId, PlayerId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{GameSession, PlayerAccount, RoundOutcome};
use crate::domain::repository::{
    AccountLedger, DictionaryCache, GameSessionRepository, RoundLedger,
};
use crate::domain::value_objects::{Rack, Word};
use crate::error::{GameError, GameResult};

const SESSION_COLUMNS: &str = r#"
    game_session_id,
    player_id,
    letters,
    words,
    swaps_used,
    hints_revealed,
    score,
    gems_earned,
    duration_seconds,
    created_at,
    completed_at
"#;

const ACCOUNT_COLUMNS: &str = r#"
    player_id,
    gems,
    free_swaps_left,
    last_free_reset_at,
    best_score,
    total_gems,
    total_games
"#;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl GameSessionRepository for PgGameRepository {
    async fn create(&self, session: &GameSession) -> GameResult<()> {
        sqlx::query(
            r#"
            INSERT INTO game_sessions (
                game_session_id,
                player_id,
                letters,
                words,
                swaps_used,
                hints_revealed,
                score,
                gems_earned,
                duration_seconds,
                created_at,
                completed_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(session.id.into_uuid())
        .bind(session.player_id.into_uuid())
        .bind(session.rack.to_string())
        .bind(word_strings(&session.accepted_words))
        .bind(to_i32(session.swaps_used))
        .bind(session.hints_revealed)
        .bind(to_i32(session.score))
        .bind(to_i32(session.reward))
        .bind(to_i32(session.duration_seconds))
        .bind(session.created_at)
        .bind(session.completed_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!(session_id = %session.id, "Game session stored");

        Ok(())
    }

    async fn find_owned(
        &self,
        session_id: GameSessionId,
        player_id: PlayerId,
    ) -> GameResult<Option<GameSession>> {
        let sql = format!(
            "SELECT {SESSION_COLUMNS} FROM game_sessions WHERE game_session_id = $1 AND player_id = $2"
        );
        let row = sqlx::query_as::<_, SessionRow>(&sql)
            .bind(session_id.into_uuid())
            .bind(player_id.into_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn finalize_abandoned(&self, cutoff: DateTime<Utc>) -> GameResult<u64> {
        let closed = sqlx::query(
            r#"
            UPDATE game_sessions
            SET words = '{}', score = 0, gems_earned = 0, duration_seconds = 0, completed_at = NOW()
            WHERE completed_at IS NULL AND created_at < $1
            "#,
        )
        .bind(cutoff)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(closed)
    }
}

impl AccountLedger for PgGameRepository {
    async fn daily_reset(
        &self,
        player_id: PlayerId,
        today: NaiveDate,
        allotment: u32,
    ) -> GameResult<PlayerAccount> {
        let sql = format!(
            r#"
            INSERT INTO players (player_id, gems, free_swaps_left, last_free_reset_at)
            VALUES ($1, 0, $3, $2)
            ON CONFLICT (player_id) DO UPDATE SET
                free_swaps_left = CASE
                    WHEN players.last_free_reset_at IS DISTINCT FROM $2
                    THEN GREATEST(players.free_swaps_left, $3)
                    ELSE players.free_swaps_left
                END,
                last_free_reset_at = $2,
                updated_at = NOW()
            RETURNING {ACCOUNT_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(player_id.into_uuid())
            .bind(today)
            .bind(to_i32(allotment))
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into_account())
    }

    async fn exchange_for_swaps(
        &self,
        player_id: PlayerId,
        cost: u32,
        swaps: u32,
    ) -> GameResult<PlayerAccount> {
        let sql = format!(
            r#"
            UPDATE players
            SET gems = gems - $2, free_swaps_left = free_swaps_left + $3, updated_at = NOW()
            WHERE player_id = $1 AND gems >= $2
            RETURNING {ACCOUNT_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(player_id.into_uuid())
            .bind(to_i32(cost))
            .bind(to_i32(swaps))
            .fetch_optional(&self.pool)
            .await?;

        row.map(AccountRow::into_account)
            .ok_or(GameError::InsufficientCurrency)
    }
}

impl RoundLedger for PgGameRepository {
    async fn complete_and_record(
        &self,
        session_id: GameSessionId,
        player_id: PlayerId,
        outcome: &RoundOutcome,
    ) -> GameResult<Option<PlayerAccount>> {
        let mut tx = self.pool.begin().await?;

        let completed = sqlx::query(
            r#"
            UPDATE game_sessions
            SET words = $3,
                score = $4,
                gems_earned = $5,
                duration_seconds = $6,
                completed_at = $7
            WHERE game_session_id = $1 AND player_id = $2 AND completed_at IS NULL
            "#,
        )
        .bind(session_id.into_uuid())
        .bind(player_id.into_uuid())
        .bind(word_strings(&outcome.words))
        .bind(to_i32(outcome.score))
        .bind(to_i32(outcome.reward))
        .bind(to_i32(outcome.duration_seconds))
        .bind(outcome.completed_at)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if completed != 1 {
            return Ok(None);
        }

        let sql = format!(
            r#"
            UPDATE players
            SET gems = gems + $2,
                total_gems = total_gems + $2,
                best_score = GREATEST(best_score, $3),
                total_games = total_games + 1,
                updated_at = NOW()
            WHERE player_id = $1
            RETURNING {ACCOUNT_COLUMNS}
            "#
        );
        let account = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(player_id.into_uuid())
            .bind(to_i32(outcome.reward))
            .bind(to_i32(outcome.score))
            .fetch_optional(&mut *tx)
            .await?
            .map(AccountRow::into_account)
            .ok_or_else(|| missing_account(player_id))?;

        tx.commit().await?;

        Ok(Some(account))
    }

    async fn swap_with_credit(
        &self,
        session_id: GameSessionId,
        player_id: PlayerId,
        rack: &Rack,
    ) -> GameResult<PlayerAccount> {
        let mut tx = self.pool.begin().await?;

        let swapped = sqlx::query(
            r#"
            UPDATE game_sessions
            SET letters = $3, swaps_used = swaps_used + 1
            WHERE game_session_id = $1 AND player_id = $2 AND completed_at IS NULL
            "#,
        )
        .bind(session_id.into_uuid())
        .bind(player_id.into_uuid())
        .bind(rack.to_string())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if swapped != 1 {
            return Err(GameError::SessionCompleted);
        }

        let sql = format!(
            r#"
            UPDATE players SET free_swaps_left = free_swaps_left - 1, updated_at = NOW()
            WHERE player_id = $1 AND free_swaps_left >= 1
            RETURNING {ACCOUNT_COLUMNS}
            "#
        );
        let account = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(player_id.into_uuid())
            .fetch_optional(&mut *tx)
            .await?
            .map(AccountRow::into_account)
            .ok_or(GameError::NoSwapsAvailable)?;

        tx.commit().await?;

        Ok(account)
    }

    async fn reveal_with_debit(
        &self,
        session_id: GameSessionId,
        player_id: PlayerId,
        cost: u32,
    ) -> GameResult<Option<PlayerAccount>> {
        let mut tx = self.pool.begin().await?;

        let flagged = sqlx::query(
            r#"
            UPDATE game_sessions
            SET hints_revealed = TRUE
            WHERE game_session_id = $1 AND player_id = $2
              AND completed_at IS NULL AND NOT hints_revealed
            "#,
        )
        .bind(session_id.into_uuid())
        .bind(player_id.into_uuid())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if flagged != 1 {
            return Ok(None);
        }

        let sql = format!(
            r#"
            UPDATE players SET gems = gems - $2, updated_at = NOW()
            WHERE player_id = $1 AND gems >= $2
            RETURNING {ACCOUNT_COLUMNS}
            "#
        );
        let account = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(player_id.into_uuid())
            .bind(to_i32(cost))
            .fetch_optional(&mut *tx)
            .await?
            .map(AccountRow::into_account)
            .ok_or(GameError::InsufficientCurrency)?;

        tx.commit().await?;

        Ok(Some(account))
    }
}

impl DictionaryCache for PgGameRepository {
    async fn get(&self, word: &Word, now: DateTime<Utc>) -> GameResult<Option<bool>> {
        let valid = sqlx::query_scalar::<_, bool>(
            "SELECT is_valid FROM dictionary_cache WHERE word = $1 AND expires_at > $2",
        )
        .bind(word.as_str())
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(valid)
    }

    async fn put(&self, word: &Word, valid: bool, expires_at: DateTime<Utc>) -> GameResult<()> {
        sqlx::query(
            r#"
            INSERT INTO dictionary_cache (word, is_valid, expires_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (word) DO UPDATE SET
                is_valid = EXCLUDED.is_valid,
                expires_at = EXCLUDED.expires_at
            "#,
        )
        .bind(word.as_str())
        .bind(valid)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> GameResult<u64> {
        let purged = sqlx::query("DELETE FROM dictionary_cache WHERE expires_at <= $1")
            .bind(now)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(purged)
    }
}

fn missing_account(player_id: PlayerId) -> GameError {
    GameError::Internal(format!("account {player_id} vanished"))
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn to_u32(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

fn word_strings(words: &[Word]) -> Vec<String> {
    words.iter().map(|w| w.as_str().to_string()).collect()
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    game_session_id: Uuid,
    player_id: Uuid,
    letters: String,
    words: Vec<String>,
    swaps_used: i32,
    hints_revealed: bool,
    score: i32,
    gems_earned: i32,
    duration_seconds: i32,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl SessionRow {
    fn into_session(self) -> GameSession {
        GameSession {
            id: GameSessionId::from_uuid(self.game_session_id),
            player_id: PlayerId::from_uuid(self.player_id),
            rack: Rack::parse(&self.letters),
            accepted_words: self.words.iter().map(|w| Word::normalize(w)).collect(),
            swaps_used: to_u32(self.swaps_used),
            hints_revealed: self.hints_revealed,
            score: to_u32(self.score),
            reward: to_u32(self.gems_earned),
            duration_seconds: to_u32(self.duration_seconds),
            created_at: self.created_at,
            completed_at: self.completed_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    player_id: Uuid,
    gems: i32,
    free_swaps_left: i32,
    last_free_reset_at: Option<NaiveDate>,
    best_score: i32,
    total_gems: i32,
    total_games: i32,
}

impl AccountRow {
    fn into_account(self) -> PlayerAccount {
        PlayerAccount {
            player_id: PlayerId::from_uuid(self.player_id),
            gems: to_u32(self.gems),
            free_swaps_left: to_u32(self.free_swaps_left),
            last_free_reset_at: self.last_free_reset_at,
            best_score: to_u32(self.best_score),
            total_gems: to_u32(self.total_gems),
            total_games: to_u32(self.total_games),
        }
    }
}
