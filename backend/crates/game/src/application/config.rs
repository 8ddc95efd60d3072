//! Application Configuration
//!
//! Configuration for the game application layer.

use std::path::PathBuf;
use std::time::Duration;

use platform::http::OutboundConfig;

pub use crate::domain::rack::RackPolicy;

/// A purchasable bundle of swap credits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapPack {
    pub swaps: u32,
    /// Price in gems
    pub cost: u32,
}

/// Game application configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Round length announced to clients, and the upper bound for reported durations
    pub round_seconds: u32,
    /// Gems charged for the first hint reveal in a session
    pub hint_cost: u32,
    /// Swap credits topped up each calendar day
    pub free_swaps_per_day: u32,
    /// Accepted length range for a single word (characters)
    pub min_word_len: usize,
    pub max_word_len: usize,
    /// Shorter words are dropped from a submission without error
    pub min_submit_len: usize,
    pub max_submitted_words: usize,
    pub swap_packs: Vec<SwapPack>,
    pub rack_policy: RackPolicy,
    /// Redraws tried on swap before accepting a repeated rack
    pub swap_redraw_attempts: u32,
    /// Maximum hint words returned
    pub hint_limit: usize,
    /// Active rounds older than this are closed at startup
    pub abandon_after: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_seconds: 100,
            hint_cost: 100,
            free_swaps_per_day: 3,
            min_word_len: 2,
            max_word_len: 20,
            min_submit_len: 3,
            max_submitted_words: 64,
            swap_packs: vec![
                SwapPack { swaps: 1, cost: 50 },
                SwapPack { swaps: 7, cost: 250 },
                SwapPack { swaps: 20, cost: 500 },
            ],
            rack_policy: RackPolicy::Preset,
            swap_redraw_attempts: 5,
            hint_limit: 8,
            abandon_after: Duration::from_secs(3600),
        }
    }
}

impl GameConfig {
    /// Pack selling exactly `swaps` credits
    pub fn swap_pack(&self, swaps: u32) -> Option<SwapPack> {
        self.swap_packs.iter().copied().find(|p| p.swaps == swaps)
    }

    pub fn abandon_after_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.abandon_after).unwrap_or(chrono::Duration::hours(1))
    }
}

/// Dictionary layer configuration
#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    /// Line-oriented word list loaded at startup. `None` leaves that layer empty.
    pub word_list_path: Option<PathBuf>,
    pub remote_enabled: bool,
    pub remote_timeout: Duration,
    pub cache_ttl: Duration,
    /// Base URL of the dictionaryapi.dev service
    pub dictionary_api_url: String,
    /// MediaWiki API endpoint of the Russian Wiktionary
    pub wiktionary_api_url: String,
    pub user_agent: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            word_list_path: None,
            remote_enabled: true,
            remote_timeout: Duration::from_secs(5),
            cache_ttl: Duration::from_secs(7 * 24 * 3600),
            dictionary_api_url: "https://api.dictionaryapi.dev".to_string(),
            wiktionary_api_url: "https://ru.wiktionary.org/w/api.php".to_string(),
            user_agent: OutboundConfig::default().user_agent,
        }
    }
}

impl DictionaryConfig {
    pub fn outbound(&self) -> OutboundConfig {
        OutboundConfig {
            user_agent: self.user_agent.clone(),
            timeout: self.remote_timeout,
        }
    }

    pub fn cache_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.cache_ttl).unwrap_or(chrono::Duration::days(7))
    }
}
