//! Round scoring

use crate::domain::value_objects::Word;

/// Points awarded per letter of an accepted word.
pub const POINTS_PER_LETTER: u32 = 50;

/// Score and currency reward for a set of accepted words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub score: u32,
    /// One gem per accepted letter
    pub reward: u32,
}

pub fn tally(words: &[Word]) -> Tally {
    let letters: u32 = words.iter().map(|w| w.char_len() as u32).sum();
    Tally {
        score: letters.saturating_mul(POINTS_PER_LETTER),
        reward: letters,
    }
}
