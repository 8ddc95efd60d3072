//! Word list file loader
//!
//! One entry per line, either `word` or `word frequency`. Only the first
//! token is kept. A missing or unreadable file yields an empty layer.

use std::path::Path;

use crate::domain::dictionary::StaticWordSet;
use crate::domain::value_objects::Word;

pub const WORD_LIST_LAYER: &str = "word-list";

/// Words from file contents, normalized. Blank lines and `#` comments are skipped.
pub fn parse_word_list(contents: &str) -> impl Iterator<Item = Word> + '_ {
    contents
        .lines()
        .map(|line| line.trim_start_matches('\u{feff}'))
        .filter_map(|line| line.split_whitespace().next())
        .filter(|token| !token.starts_with('#'))
        .map(Word::normalize)
        .filter(|word| !word.is_empty())
}

pub async fn load_word_list(path: &Path) -> StaticWordSet {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => {
            let set = StaticWordSet::new(WORD_LIST_LAYER, parse_word_list(&contents));
            tracing::info!(path = %path.display(), words = set.len(), "Word list loaded");
            set
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Word list unavailable; continuing without it"
            );
            StaticWordSet::new(WORD_LIST_LAYER, std::iter::empty())
        }
    }
}
