//! Dictionary assembly
//!
//! Layer order: preset sample words, builtin words, word list file, then the
//! cached remote pair.

use std::sync::Arc;

use reqwest::Url;

use crate::application::config::DictionaryConfig;
use crate::domain::dictionary::{CachedSource, Dictionary, StaticWordSet, WordSource};
use crate::domain::presets::{PresetPool, builtin_words};
use crate::domain::repository::DictionaryCache;
use crate::error::{GameError, GameResult};
use crate::infra::remote::{DictionaryApiSource, WiktionarySource};
use crate::infra::word_list::load_word_list;

/// Layers that never leave the process
pub fn offline_layers(presets: &PresetPool) -> Vec<Arc<dyn WordSource>> {
    let samples: Arc<dyn WordSource> = Arc::new(StaticWordSet::new(
        "presets",
        presets.sample_words().cloned(),
    ));
    let builtin: Arc<dyn WordSource> = Arc::new(StaticWordSet::new("builtin", builtin_words()));
    vec![samples, builtin]
}

/// Both remote services behind one verdict cache
pub fn remote_layer<C>(config: &DictionaryConfig, cache: Arc<C>) -> GameResult<Arc<dyn WordSource>>
where
    C: DictionaryCache + Send + Sync + 'static,
{
    let client = platform::http::outbound_client(&config.outbound())
        .map_err(|e| GameError::Internal(format!("http client: {e}")))?;
    let api_url = parse_url(&config.dictionary_api_url)?;
    let wiki_url = parse_url(&config.wiktionary_api_url)?;

    let api: Arc<dyn WordSource> = Arc::new(DictionaryApiSource::new(client.clone(), api_url));
    let wiki: Arc<dyn WordSource> = Arc::new(WiktionarySource::new(client, wiki_url));
    let chain = Dictionary::new(vec![api, wiki]);

    Ok(Arc::new(CachedSource::new(
        chain,
        cache,
        config.cache_ttl_chrono(),
    )))
}

/// Assemble the full dictionary, reading the word list once.
pub async fn build_dictionary<C>(
    config: &DictionaryConfig,
    presets: &PresetPool,
    cache: Arc<C>,
) -> GameResult<Dictionary>
where
    C: DictionaryCache + Send + Sync + 'static,
{
    let mut layers = offline_layers(presets);

    if let Some(path) = &config.word_list_path {
        layers.push(Arc::new(load_word_list(path).await));
    }
    if config.remote_enabled {
        layers.push(remote_layer(config, cache)?);
    }

    let dictionary = Dictionary::new(layers);
    tracing::info!(layers = ?dictionary.layer_names(), "Dictionary ready");
    Ok(dictionary)
}

fn parse_url(raw: &str) -> GameResult<Url> {
    Url::parse(raw).map_err(|e| GameError::Internal(format!("invalid dictionary url {raw}: {e}")))
}
