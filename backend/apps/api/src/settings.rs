//! Server settings
//!
//! Read once at startup from the process environment (after `.env` is
//! loaded). Malformed values abort startup instead of falling back.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, bail};
use game::{DictionaryConfig, GameConfig, RackPolicy};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Debug, Clone)]
pub struct Settings {
    /// `None` runs the server on the in-memory store
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub game: GameConfig,
    pub dictionary: DictionaryConfig,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let raw_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .with_context(|| format!("BIND_ADDR must be host:port, got {raw_addr:?}"))?;

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let mut game = GameConfig::default();
        if let Some(raw) = var("RACK_POLICY") {
            game.rack_policy = parse_rack_policy(&raw)?;
        }
        if let Some(raw) = var("ROUND_SECONDS") {
            game.round_seconds = parse_number("ROUND_SECONDS", &raw)?;
            if game.round_seconds == 0 {
                bail!("ROUND_SECONDS must be positive");
            }
        }
        if let Some(raw) = var("HINT_COST") {
            game.hint_cost = parse_number("HINT_COST", &raw)?;
        }

        let remote_enabled = match var("DICTIONARY_REMOTE") {
            Some(raw) => parse_flag("DICTIONARY_REMOTE", &raw)?,
            None => true,
        };
        let dictionary = DictionaryConfig {
            word_list_path: var("WORD_LIST_PATH").map(PathBuf::from),
            remote_enabled,
            ..DictionaryConfig::default()
        };

        Ok(Self {
            database_url: var("DATABASE_URL"),
            bind_addr,
            frontend_origins,
            game,
            dictionary,
        })
    }
}

fn parse_rack_policy(raw: &str) -> anyhow::Result<RackPolicy> {
    match raw.to_ascii_lowercase().as_str() {
        "preset" => Ok(RackPolicy::Preset),
        "random" => Ok(RackPolicy::random()),
        other => bail!("RACK_POLICY must be `preset` or `random`, got {other:?}"),
    }
}

fn parse_number<T>(key: &str, raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse()
        .with_context(|| format!("{key} must be a non-negative integer, got {raw:?}"))
}

fn parse_flag(key: &str, raw: &str) -> anyhow::Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{key} must be a boolean, got {other:?}"),
    }
}
