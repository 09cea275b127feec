//! Three-word address value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::WORDS_PER_ADDRESS;

/// Separator used by the dotted address form (`word.word.word`).
pub const SEPARATOR: char = '.';

/// A three-word address, in encoding order.
///
/// Displays as `w0.w1.w2` and serializes as a JSON array of three strings.
///
/// # Example
///
/// ```
/// use wordgrid::codec::WordTuple;
///
/// let tuple: WordTuple = "Tefiza.bakumo.ronale".parse().unwrap();
/// assert_eq!(tuple.to_string(), "tefiza.bakumo.ronale");
///
/// let spaced: WordTuple = "tefiza bakumo ronale".parse().unwrap();
/// assert_eq!(tuple, spaced);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[String; 3]", into = "[String; 3]")]
pub struct WordTuple {
    words: [String; WORDS_PER_ADDRESS],
}

impl WordTuple {
    /// Create a tuple from three words, lowercasing them.
    pub fn new(words: [String; WORDS_PER_ADDRESS]) -> Self {
        Self {
            words: words.map(|w| crate::vocabulary::normalize(&w)),
        }
    }

    /// Create a tuple from a slice, which must hold exactly three words.
    pub fn from_slice<S: AsRef<str>>(words: &[S]) -> Result<Self, WordTupleParseError> {
        match words {
            [w0, w1, w2] => Ok(Self::new([
                w0.as_ref().to_string(),
                w1.as_ref().to_string(),
                w2.as_ref().to_string(),
            ])),
            _ => Err(WordTupleParseError::WrongCount(words.len())),
        }
    }

    pub fn words(&self) -> &[String; WORDS_PER_ADDRESS] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn into_words(self) -> [String; WORDS_PER_ADDRESS] {
        self.words
    }
}

impl From<[String; WORDS_PER_ADDRESS]> for WordTuple {
    fn from(words: [String; WORDS_PER_ADDRESS]) -> Self {
        Self::new(words)
    }
}

impl From<WordTuple> for [String; WORDS_PER_ADDRESS] {
    fn from(tuple: WordTuple) -> Self {
        tuple.words
    }
}

impl fmt::Display for WordTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [w0, w1, w2] = &self.words;
        write!(f, "{w0}{SEPARATOR}{w1}{SEPARATOR}{w2}")
    }
}

/// Errors from parsing an address string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordTupleParseError {
    #[error("Expected exactly 3 words, got {0}")]
    WrongCount(usize),

    #[error("Address contains an empty word")]
    EmptyWord,
}

impl FromStr for WordTuple {
    type Err = WordTupleParseError;

    /// Parses `a.b.c` or three whitespace-separated words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let words: Vec<&str> = if s.contains(SEPARATOR) {
            s.split(SEPARATOR).map(str::trim).collect()
        } else {
            s.split_whitespace().collect()
        };

        if words.iter().any(|w| w.is_empty()) {
            return Err(WordTupleParseError::EmptyWord);
        }
        Self::from_slice(&words)
    }
}
