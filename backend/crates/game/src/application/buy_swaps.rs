//! Buy Swaps Use Case

use std::sync::Arc;

use chrono::NaiveDate;
use kernel::id::PlayerId;

use crate::application::config::GameConfig;
use crate::domain::repository::AccountLedger;
use crate::error::{GameError, GameResult};

/// Input DTO for buy swaps
#[derive(Debug, Clone)]
pub struct BuySwapsInput {
    pub player_id: PlayerId,
    /// Pack size, i.e. number of swaps bought
    pub pack: u32,
    pub today: NaiveDate,
}

/// Output DTO for buy swaps
#[derive(Debug, Clone)]
pub struct BuySwapsOutput {
    pub gems: u32,
    pub free_swaps_left: u32,
}

/// Buy Swaps Use Case
pub struct BuySwapsUseCase<L>
where
    L: AccountLedger,
{
    ledger: Arc<L>,
    config: Arc<GameConfig>,
}

impl<L> BuySwapsUseCase<L>
where
    L: AccountLedger,
{
    pub fn new(ledger: Arc<L>, config: Arc<GameConfig>) -> Self {
        Self { ledger, config }
    }

    pub async fn execute(&self, input: BuySwapsInput) -> GameResult<BuySwapsOutput> {
        let pack = self
            .config
            .swap_pack(input.pack)
            .ok_or(GameError::UnknownSwapPack(input.pack))?;

        // Top up first so the purchase stacks on today's allotment.
        self.ledger
            .daily_reset(input.player_id, input.today, self.config.free_swaps_per_day)
            .await?;
        let account = self
            .ledger
            .exchange_for_swaps(input.player_id, pack.cost, pack.swaps)
            .await?;

        tracing::info!(
            player_id = %input.player_id,
            swaps = pack.swaps,
            cost = pack.cost,
            "Swap pack purchased"
        );

        Ok(BuySwapsOutput {
            gems: account.gems,
            free_swaps_left: account.free_swaps_left,
        })
    }
}
