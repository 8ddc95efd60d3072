//! Dictionary oracle
//!
//! A word is valid when any layer knows it. Layers are consulted in order and
//! the first definite hit wins. A layer that cannot answer (network down,
//! malformed payload) counts as "not found" for the verdict but is reported
//! separately so callers can tell the difference.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::domain::repository::DictionaryCache;
use crate::domain::value_objects::Word;

/// Answer from a single layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    Found,
    NotFound,
    /// The layer could not decide
    Unavailable,
}

impl LookupOutcome {
    pub fn is_found(self) -> bool {
        matches!(self, LookupOutcome::Found)
    }

    /// Whether the answer is safe to cache.
    pub fn is_definite(self) -> bool {
        !matches!(self, LookupOutcome::Unavailable)
    }
}

/// One lookup strategy
#[async_trait]
pub trait WordSource: Send + Sync {
    fn name(&self) -> &str;

    async fn lookup(&self, word: &Word) -> LookupOutcome;
}

/// In-memory set of known words
#[derive(Debug, Clone, Default)]
pub struct StaticWordSet {
    name: String,
    words: HashSet<Word>,
}

impl StaticWordSet {
    pub fn new<I>(name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        Self {
            name: name.into(),
            words: words.into_iter().filter(|w| !w.is_empty()).collect(),
        }
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[async_trait]
impl WordSource for StaticWordSet {
    fn name(&self) -> &str {
        &self.name
    }

    async fn lookup(&self, word: &Word) -> LookupOutcome {
        if self.contains(word) {
            LookupOutcome::Found
        } else {
            LookupOutcome::NotFound
        }
    }
}

/// Ordered chain of layers combined by short-circuit OR
#[derive(Clone, Default)]
pub struct Dictionary {
    layers: Vec<Arc<dyn WordSource>>,
}

impl Dictionary {
    pub fn new(layers: Vec<Arc<dyn WordSource>>) -> Self {
        Self { layers }
    }

    pub fn with_layer(mut self, layer: Arc<dyn WordSource>) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name()).collect()
    }

    /// Walk the layers; `Unavailable` only if no layer said `Found` and at
    /// least one could not answer.
    pub async fn resolve(&self, word: &Word) -> LookupOutcome {
        let mut undecided = false;
        for layer in &self.layers {
            match layer.lookup(word).await {
                LookupOutcome::Found => {
                    tracing::debug!(word = %word, layer = layer.name(), "Word found");
                    return LookupOutcome::Found;
                }
                LookupOutcome::NotFound => {}
                LookupOutcome::Unavailable => {
                    tracing::debug!(word = %word, layer = layer.name(), "Dictionary layer unavailable");
                    undecided = true;
                }
            }
        }
        if undecided {
            LookupOutcome::Unavailable
        } else {
            LookupOutcome::NotFound
        }
    }

    pub async fn exists(&self, word: &Word) -> bool {
        self.resolve(word).await.is_found()
    }
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("layers", &self.layer_names())
            .finish()
    }
}

#[async_trait]
impl WordSource for Dictionary {
    fn name(&self) -> &str {
        "chain"
    }

    async fn lookup(&self, word: &Word) -> LookupOutcome {
        self.resolve(word).await
    }
}

/// Wraps a slow layer with a persistent verdict cache.
///
/// Only definite answers are stored. Cache failures degrade to a miss.
pub struct CachedSource<S, C> {
    inner: S,
    cache: Arc<C>,
    ttl: Duration,
    name: String,
}

impl<S, C> CachedSource<S, C>
where
    S: WordSource,
    C: DictionaryCache + Send + Sync,
{
    pub fn new(inner: S, cache: Arc<C>, ttl: Duration) -> Self {
        let name = format!("cached:{}", inner.name());
        Self {
            inner,
            cache,
            ttl,
            name,
        }
    }
}

#[async_trait]
impl<S, C> WordSource for CachedSource<S, C>
where
    S: WordSource,
    C: DictionaryCache + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn lookup(&self, word: &Word) -> LookupOutcome {
        let now = Utc::now();
        match self.cache.get(word, now).await {
            Ok(Some(true)) => return LookupOutcome::Found,
            Ok(Some(false)) => return LookupOutcome::NotFound,
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, word = %word, "Dictionary cache read failed");
            }
        }

        let outcome = self.inner.lookup(word).await;
        if outcome.is_definite() {
            let expires_at = now + self.ttl;
            if let Err(e) = self.cache.put(word, outcome.is_found(), expires_at).await {
                tracing::warn!(error = %e, word = %word, "Dictionary cache write failed");
            }
        }
        outcome
    }
}
