//! Letter multiset
//!
//! A word is buildable from a rack when every letter it uses appears in the
//! rack at least as many times as the word needs it.

use std::collections::HashMap;

use crate::domain::value_objects::Rack;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBag {
    counts: HashMap<char, u32>,
}

impl LetterBag {
    pub fn from_letters<I>(letters: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut counts = HashMap::new();
        for c in letters.into_iter().flat_map(char::to_uppercase) {
            *counts.entry(c).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn from_rack(rack: &Rack) -> Self {
        Self::from_letters(rack.letters().iter().copied())
    }

    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Case-insensitive multiset inclusion. The empty word is trivially
    /// buildable; callers enforce length bounds before asking.
    pub fn can_build(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();
        for c in word.chars().flat_map(char::to_uppercase) {
            match remaining.get_mut(&c) {
                Some(n) if *n > 0 => *n -= 1,
                _ => return false,
            }
        }
        true
    }
}
