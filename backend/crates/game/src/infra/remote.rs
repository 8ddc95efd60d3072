//! Remote dictionary lookups
//!
//! Network and payload failures become `LookupOutcome::Unavailable`; nothing
//! here returns an error to the caller.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use crate::domain::dictionary::{LookupOutcome, WordSource};
use crate::domain::value_objects::Word;

/// dictionaryapi.dev: `GET {base}/api/v2/entries/ru/{word}`
#[derive(Debug, Clone)]
pub struct DictionaryApiSource {
    client: Client,
    base_url: Url,
}

impl DictionaryApiSource {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn entry_url(&self, word: &str) -> Option<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(["api", "v2", "entries", "ru", word]);
        Some(url)
    }
}

#[async_trait]
impl WordSource for DictionaryApiSource {
    fn name(&self) -> &str {
        "dictionaryapi"
    }

    async fn lookup(&self, word: &Word) -> LookupOutcome {
        let lower = word.as_str().to_lowercase();
        let Some(url) = self.entry_url(&lower) else {
            return LookupOutcome::Unavailable;
        };

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, word = %word, "dictionaryapi request failed");
                return LookupOutcome::Unavailable;
            }
        };

        // Unknown words come back as 404 with an explanatory object.
        if response.status() == StatusCode::NOT_FOUND {
            return LookupOutcome::NotFound;
        }
        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), word = %word, "dictionaryapi error status");
            return LookupOutcome::Unavailable;
        }

        match response.json::<Value>().await {
            Ok(Value::Array(entries)) if !entries.is_empty() => LookupOutcome::Found,
            Ok(_) => LookupOutcome::NotFound,
            Err(e) => {
                tracing::warn!(error = %e, word = %word, "dictionaryapi payload unreadable");
                LookupOutcome::Unavailable
            }
        }
    }
}

/// MediaWiki API of the Russian Wiktionary (`action=query&titles=...`)
#[derive(Debug, Clone)]
pub struct WiktionarySource {
    client: Client,
    endpoint: Url,
}

impl WiktionarySource {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

/// A title exists when at least one returned page lacks the `missing` and
/// `invalid` markers.
fn wiktionary_has_page(body: &Value) -> bool {
    match body.pointer("/query/pages") {
        Some(Value::Object(pages)) => pages
            .values()
            .any(|page| page.get("missing").is_none() && page.get("invalid").is_none()),
        Some(Value::Array(pages)) => pages
            .iter()
            .any(|page| page.get("missing").is_none() && page.get("invalid").is_none()),
        _ => false,
    }
}

#[async_trait]
impl WordSource for WiktionarySource {
    fn name(&self) -> &str {
        "wiktionary"
    }

    async fn lookup(&self, word: &Word) -> LookupOutcome {
        let lower = word.as_str().to_lowercase();
        let request = self.client.get(self.endpoint.clone()).query(&[
            ("action", "query"),
            ("titles", lower.as_str()),
            ("format", "json"),
        ]);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, word = %word, "wiktionary request failed");
                return LookupOutcome::Unavailable;
            }
        };
        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), word = %word, "wiktionary error status");
            return LookupOutcome::Unavailable;
        }

        match response.json::<Value>().await {
            Ok(body) if wiktionary_has_page(&body) => LookupOutcome::Found,
            Ok(_) => LookupOutcome::NotFound,
            Err(e) => {
                tracing::warn!(error = %e, word = %word, "wiktionary payload unreadable");
                LookupOutcome::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wiktionary_page_detection() {
        let found = json!({"query": {"pages": {"123": {"title": "стол"}}}});
        let missing = json!({"query": {"pages": {"-1": {"title": "щщщ", "missing": ""}}}});
        assert!(wiktionary_has_page(&found));
        assert!(!wiktionary_has_page(&missing));
        assert!(!wiktionary_has_page(&json!({"batchcomplete": ""})));
    }

    #[test]
    fn test_entry_url_escapes_word() {
        let source = DictionaryApiSource::new(
            Client::new(),
            Url::parse("https://api.dictionaryapi.dev").unwrap(),
        );
        let url = source.entry_url("стол").unwrap();
        assert!(url.as_str().starts_with("https://api.dictionaryapi.dev/api/v2/entries/ru/"));
        assert!(url.as_str().contains("%D1%81"));
    }
}
