//! Domain Value Objects
//!
//! Immutable value types for the word game domain.

use std::fmt;

use serde::{Serialize, Serializer};
use unicode_normalization::UnicodeNormalization;

use crate::error::GameError;

/// A candidate word in canonical form: NFKC-normalized, trimmed, uppercase.
///
/// Two inputs that differ only in case, surrounding whitespace or Unicode
/// composition produce the same `Word`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
    /// Canonicalize without any length check.
    pub fn normalize(raw: &str) -> Self {
        let composed: String = raw.nfkc().collect();
        Self(composed.trim().to_uppercase())
    }

    /// Canonicalize and enforce `min..=max` characters (Unicode scalar values).
    pub fn parse(raw: &str, min: usize, max: usize) -> Result<Self, GameError> {
        let word = Self::normalize(raw);
        let len = word.char_len();
        if len < min || len > max {
            return Err(GameError::InvalidInput(format!(
                "word must be {min}..={max} characters, got {len}"
            )));
        }
        Ok(word)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Ordered letters dealt for a round. Letters may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rack(Vec<char>);

impl Rack {
    pub fn new(letters: Vec<char>) -> Self {
        Self(letters.into_iter().flat_map(char::to_uppercase).collect())
    }

    /// Rebuild a rack from its stored string form.
    pub fn parse(stored: &str) -> Self {
        Self::new(stored.chars().filter(|c| !c.is_whitespace()).collect())
    }

    pub fn letters(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Same letters with the same multiplicities, order ignored.
    pub fn same_letters(&self, other: &Rack) -> bool {
        let mut a = self.0.clone();
        let mut b = other.0.clone();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }

    /// One string per letter, the shape clients receive.
    pub fn to_letter_strings(&self) -> Vec<String> {
        self.0.iter().map(|c| c.to_string()).collect()
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Lifecycle state of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Completed => "completed",
        }
    }
}
