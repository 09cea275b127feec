//! Word vocabulary for three-word addresses.
//!
//! A [`VocabularyTable`] is loaded once at startup, either from a word list
//! on disk (plain text or a JSON array) or from the built-in generator, and
//! is never modified afterwards.

pub mod generated;
mod table;

pub use generated::MAX_GENERATED_WORDS;
pub use table::{VocabularyError, VocabularyTable};

pub(crate) use table::normalize;

/// Default size of the generated vocabulary.
///
/// 16384^3 addresses cover the default 3 m grid over India roughly four times over.
pub const DEFAULT_GENERATED_SIZE: usize = 16_384;
