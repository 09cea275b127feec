//! Converter error types.

use crate::codec::CodecError;
use crate::config::ConfigFileError;
use crate::grid::{GridError, RangeError};
use crate::region::RegionError;
use crate::vocabulary::VocabularyError;

/// Fatal startup errors: the converter cannot be built.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid region: {0}")]
    Region(#[from] RegionError),

    #[error("Invalid vocabulary: {0}")]
    Vocabulary(#[from] VocabularyError),

    #[error("Invalid codec configuration: {0}")]
    Codec(#[from] CodecError),

    #[error("Invalid configuration file: {0}")]
    File(#[from] ConfigFileError),
}

/// Who is responsible for a conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied input that can be corrected.
    InvalidInput,
    /// An invariant inside the converter was violated.
    Internal,
}

/// Per-request conversion errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// Coordinate outside the region, or not a number
    #[error(transparent)]
    Grid(#[from] GridError),

    /// One or more words are not in the vocabulary
    #[error("Unknown words: {}", .words.join(", "))]
    UnknownWords { words: Vec<String> },

    /// A cell or index outside the grid
    #[error(transparent)]
    Range(#[from] RangeError),

    /// Index or digit outside the codec's range
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl ConvertError {
    /// Classifies the error as caller-correctable or internal.
    ///
    /// Known words whose index lies past the last cell do not address any
    /// place in the region; that is an input problem. Every other range or
    /// codec failure means the converter computed something it should not
    /// have.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Grid(_) | ConvertError::UnknownWords { .. } => ErrorKind::InvalidInput,
            ConvertError::Range(RangeError::Index { .. }) => ErrorKind::InvalidInput,
            ConvertError::Range(RangeError::Cell { .. }) | ConvertError::Codec(_) => {
                ErrorKind::Internal
            }
        }
    }

    /// Returns true for errors the caller can fix by changing the input.
    pub fn is_input_error(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }
}
