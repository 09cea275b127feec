//! Vocabulary table with O(1) lookup in both directions.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use super::generated;

/// Error type for vocabulary construction and lookup.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("Vocabulary is empty")]
    Empty,

    #[error("Duplicate word '{word}' at positions {first} and {second}")]
    Duplicate {
        word: String,
        first: usize,
        second: usize,
    },

    #[error("Invalid word '{word}' at position {position}: {reason}")]
    InvalidWord {
        word: String,
        position: usize,
        reason: &'static str,
    },

    #[error("Unknown word '{0}'")]
    UnknownWord(String),

    #[error("Word index {index} is outside the vocabulary ({len} words)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Generated vocabulary holds at most {max} words, {requested} requested")]
    GeneratedSizeTooLarge { requested: usize, max: usize },

    #[error("Vocabulary file not found at: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse vocabulary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Normalizes a word for storage and lookup.
#[inline]
pub(crate) fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Immutable, ordered, duplicate-free word list.
///
/// The position of each word is its index in the three-word encoding, so the
/// order must stay the same between runs. Words are stored trimmed and
/// lowercased; lookups normalize their input the same way.
///
/// # Example
///
/// ```
/// use wordgrid::vocabulary::VocabularyTable;
///
/// let table = VocabularyTable::from_words(["apple", "Banana", "cherry"]).unwrap();
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.word_to_index("BANANA").unwrap(), 1);
/// assert_eq!(table.index_to_word(2).unwrap(), "cherry");
/// ```
#[derive(Debug, Clone)]
pub struct VocabularyTable {
    words: Vec<String>,
    positions: HashMap<String, usize>,
}

impl VocabularyTable {
    /// Build a table from an ordered word list.
    ///
    /// Fails on an empty list, on duplicates after normalization, and on
    /// entries that are blank or contain whitespace or `.`.
    pub fn from_words<I, S>(words: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self {
            words: Vec::new(),
            positions: HashMap::new(),
        };

        for (position, raw) in words.into_iter().enumerate() {
            let word = normalize(raw.as_ref());
            validate(&word, position)?;

            if let Some(&first) = table.positions.get(&word) {
                return Err(VocabularyError::Duplicate {
                    word,
                    first,
                    second: position,
                });
            }
            table.positions.insert(word.clone(), position);
            table.words.push(word);
        }

        if table.words.is_empty() {
            return Err(VocabularyError::Empty);
        }

        Ok(table)
    }

    /// Build a table from a plain-text list, one word per line.
    ///
    /// Blank lines and lines starting with `#` are skipped and do not take up
    /// an index.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, VocabularyError> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            words.push(trimmed.to_string());
        }
        Self::from_words(words)
    }

    /// Build a table from a JSON array of strings.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, VocabularyError> {
        let words: Vec<String> = serde_json::from_reader(reader)?;
        Self::from_words(words)
    }

    /// Load a table from disk.
    ///
    /// Files ending in `.json` are read as a JSON array, anything else as
    /// plain text.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(VocabularyError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let table = if path.extension().is_some_and(|ext| ext == "json") {
            tracing::debug!(path = %path.display(), "Loading JSON vocabulary");
            Self::from_json_reader(BufReader::new(file))?
        } else {
            tracing::debug!(path = %path.display(), "Loading plain-text vocabulary");
            Self::from_reader(BufReader::new(file))?
        };

        tracing::info!(path = %path.display(), words = table.len(), "Loaded vocabulary");
        Ok(table)
    }

    /// Build the built-in pronounceable word list with `size` entries.
    pub fn generated(size: usize) -> Result<Self, VocabularyError> {
        if size > generated::MAX_GENERATED_WORDS {
            return Err(VocabularyError::GeneratedSizeTooLarge {
                requested: size,
                max: generated::MAX_GENERATED_WORDS,
            });
        }
        Self::from_words((0..size).map(generated::word_at))
    }

    /// Returns the index of a word, normalizing case and surrounding whitespace.
    #[inline]
    pub fn word_to_index(&self, word: &str) -> Result<usize, VocabularyError> {
        let normalized = normalize(word);
        self.positions
            .get(&normalized)
            .copied()
            .ok_or(VocabularyError::UnknownWord(normalized))
    }

    /// Returns the word stored at an index.
    #[inline]
    pub fn index_to_word(&self, index: usize) -> Result<&str, VocabularyError> {
        self.words
            .get(index)
            .map(String::as_str)
            .ok_or(VocabularyError::IndexOutOfRange {
                index,
                len: self.words.len(),
            })
    }

    /// Number of words (the radix of the encoding).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates words in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn validate(word: &str, position: usize) -> Result<(), VocabularyError> {
    let reason = if word.is_empty() {
        "word is blank"
    } else if word.chars().any(char::is_whitespace) {
        "word contains whitespace"
    } else if word.contains('.') {
        "word contains '.'"
    } else {
        return Ok(());
    };

    Err(VocabularyError::InvalidWord {
        word: word.to_string(),
        position,
        reason,
    })
}
