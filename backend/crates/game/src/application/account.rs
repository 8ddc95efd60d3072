//! Account Snapshot Use Case

use std::sync::Arc;

use chrono::NaiveDate;
use kernel::id::PlayerId;

use crate::application::config::GameConfig;
use crate::domain::entities::PlayerAccount;
use crate::domain::repository::AccountLedger;
use crate::error::GameResult;

/// Input DTO for account snapshot
#[derive(Debug, Clone)]
pub struct AccountInput {
    pub player_id: PlayerId,
    pub today: NaiveDate,
}

/// Account Snapshot Use Case
pub struct AccountUseCase<L>
where
    L: AccountLedger,
{
    ledger: Arc<L>,
    config: Arc<GameConfig>,
}

impl<L> AccountUseCase<L>
where
    L: AccountLedger,
{
    pub fn new(ledger: Arc<L>, config: Arc<GameConfig>) -> Self {
        Self { ledger, config }
    }

    pub async fn execute(&self, input: AccountInput) -> GameResult<PlayerAccount> {
        self.ledger
            .daily_reset(input.player_id, input.today, self.config.free_swaps_per_day)
            .await
    }
}
