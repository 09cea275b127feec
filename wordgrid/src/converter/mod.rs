//! Coordinate to three-word address conversion.
//!
//! [`CoordinateWordConverter`] composes the grid indexer, the row-major
//! linearizer, the mixed-radix codec and the vocabulary table:
//!
//! ```text
//! (lat, lng) -> Cell -> index -> [d0, d1, d2] -> [w0, w1, w2]
//! [w0, w1, w2] -> [d0, d1, d2] -> index -> Cell -> center (lat, lng)
//! ```
//!
//! Everything it holds is immutable after construction, so one converter can
//! be shared through an `Arc` by any number of threads.

mod error;
pub mod protocol;

pub use error::{ConfigError, ConvertError, ErrorKind};

use crate::codec::{CodecError, Digits, WordCodec, WordTuple, WORDS_PER_ADDRESS};
use crate::config::ConfigFile;
use crate::grid::{from_linear, to_linear, Coordinate, GridIndexer};
use crate::region::{GridExtent, Region};
use crate::vocabulary::{VocabularyError, VocabularyTable};

/// Bidirectional converter between coordinates and word tuples.
///
/// # Example
///
/// ```
/// use wordgrid::converter::CoordinateWordConverter;
/// use wordgrid::region::Region;
/// use wordgrid::vocabulary::VocabularyTable;
///
/// let region = Region::new(0.0, 1.0, 0.0, 1.0, 11_000.0).unwrap();
/// let vocabulary = VocabularyTable::from_words(["a", "b", "c", "d", "e"]).unwrap();
/// let converter = CoordinateWordConverter::new(region, vocabulary).unwrap();
///
/// let words = converter.coords_to_words(0.35, 0.75).unwrap();
/// assert_eq!(words.to_string(), "c.c.b");
///
/// let center = converter.words_to_coords(&words).unwrap();
/// assert!((center.lat - 0.35).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct CoordinateWordConverter {
    indexer: GridIndexer,
    codec: WordCodec,
    vocabulary: VocabularyTable,
}

impl CoordinateWordConverter {
    /// Build a converter, checking that the vocabulary can address every cell.
    pub fn new(region: Region, vocabulary: VocabularyTable) -> Result<Self, ConfigError> {
        let indexer = GridIndexer::new(region)?;
        let codec = WordCodec::new(vocabulary.len(), indexer.cell_count())?;

        tracing::info!(
            region = %region,
            extent = %indexer.extent(),
            cells = indexer.cell_count(),
            vocabulary = vocabulary.len(),
            capacity = %codec.capacity(),
            "Built coordinate word converter"
        );

        Ok(Self {
            indexer,
            codec,
            vocabulary,
        })
    }

    /// Build a converter from loaded configuration.
    ///
    /// Uses the configured vocabulary file when set, otherwise the generated
    /// word list of the configured size.
    pub fn from_config(config: &ConfigFile) -> Result<Self, ConfigError> {
        let region = config.region.to_region()?;
        let vocabulary = match &config.vocabulary.path {
            Some(path) => VocabularyTable::from_path(path)?,
            None => VocabularyTable::generated(config.vocabulary.generated_size)?,
        };
        Self::new(region, vocabulary)
    }

    /// Returns the three-word address of the cell containing a coordinate.
    pub fn coords_to_words(&self, lat: f64, lng: f64) -> Result<WordTuple, ConvertError> {
        let cell = self.indexer.coord_to_cell(lat, lng)?;
        let index = to_linear(cell, self.indexer.extent())?;
        let digits = self.codec.encode(index)?;

        let mut words: [String; WORDS_PER_ADDRESS] = Default::default();
        for (word, digit) in words.iter_mut().zip(digits) {
            // Every digit is below the radix, which is the vocabulary size.
            *word = self
                .vocabulary
                .index_to_word(digit)
                .map_err(|_| CodecError::DigitOutOfRange {
                    digit,
                    radix: self.codec.radix(),
                })?
                .to_string();
        }

        tracing::trace!(lat, lng, %cell, index, "Encoded coordinate");
        Ok(WordTuple::new(words))
    }

    /// Returns the center of the cell named by a three-word address.
    pub fn words_to_coords(&self, tuple: &WordTuple) -> Result<Coordinate, ConvertError> {
        let digits = self.lookup_digits(tuple)?;
        let index = self.codec.decode(digits)?;
        let cell = from_linear(index, self.indexer.extent())?;
        let center = self.indexer.cell_to_coord(cell)?;

        tracing::trace!(words = %tuple, index, %cell, "Decoded address");
        Ok(center)
    }

    /// Resolves every word, reporting all unknown words together.
    fn lookup_digits(&self, tuple: &WordTuple) -> Result<Digits, ConvertError> {
        let mut digits = [0usize; WORDS_PER_ADDRESS];
        let mut unknown = Vec::new();

        for (digit, word) in digits.iter_mut().zip(tuple.iter()) {
            match self.vocabulary.word_to_index(word) {
                Ok(index) => *digit = index,
                Err(VocabularyError::UnknownWord(word)) => unknown.push(word),
                Err(_) => unknown.push(word.to_string()),
            }
        }

        if unknown.is_empty() {
            Ok(digits)
        } else {
            Err(ConvertError::UnknownWords { words: unknown })
        }
    }

    pub fn region(&self) -> &Region {
        self.indexer.region()
    }

    pub fn extent(&self) -> GridExtent {
        self.indexer.extent()
    }

    pub fn indexer(&self) -> &GridIndexer {
        &self.indexer
    }

    pub fn vocabulary(&self) -> &VocabularyTable {
        &self.vocabulary
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> u64 {
        self.indexer.cell_count()
    }

    /// Number of distinct three-word addresses, `V^3`.
    pub fn capacity(&self) -> u128 {
        self.codec.capacity()
    }
}
