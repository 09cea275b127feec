//! Three-digit mixed-radix codec.
//!
//! A linear cell index is written as a three-digit number in base `V`, the
//! vocabulary size. Each digit is a vocabulary index:
//!
//! ```text
//! index = d0 + d1 * V + d2 * V^2      (d0 least significant)
//! ```
//!
//! `d0` names the first word of an address, `d2` the last. Encoding and
//! decoding are plain integer arithmetic, so every index below `V^3` has
//! exactly one digit triple and the reverse lookup never searches.

mod tuple;

pub use tuple::{WordTuple, WordTupleParseError};

/// Number of words in every address.
pub const WORDS_PER_ADDRESS: usize = 3;

/// Vocabulary indices of the three words of an address, least significant first.
pub type Digits = [usize; WORDS_PER_ADDRESS];

/// Errors raised by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("Codec radix must be at least 1")]
    ZeroRadix,

    #[error(
        "Vocabulary of {radix} words gives {capacity} addresses, fewer than the {cell_count} grid cells"
    )]
    InsufficientCapacity {
        radix: u64,
        capacity: u128,
        cell_count: u64,
    },

    #[error("Index {index} does not fit in three base-{radix} digits")]
    Overflow { index: u64, radix: u64 },

    #[error("Digit {digit} is not a valid base-{radix} digit")]
    DigitOutOfRange { digit: usize, radix: u64 },
}

/// Bijection between linear indices and vocabulary-index triples.
///
/// # Example
///
/// ```
/// use wordgrid::codec::WordCodec;
///
/// let codec = WordCodec::new(5, 100).unwrap();
/// assert_eq!(codec.encode(37).unwrap(), [2, 2, 1]);
/// assert_eq!(codec.decode([2, 2, 1]).unwrap(), 37);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCodec {
    radix: u64,
    capacity: u128,
}

impl WordCodec {
    /// Create a codec for a vocabulary of `radix` words addressing
    /// `cell_count` cells.
    ///
    /// Fails if `radix^3 < cell_count`: some cells would have no address.
    pub fn new(radix: usize, cell_count: u64) -> Result<Self, CodecError> {
        if radix == 0 {
            return Err(CodecError::ZeroRadix);
        }
        let radix = radix as u64;
        let capacity = (radix as u128).pow(WORDS_PER_ADDRESS as u32);
        if capacity < cell_count as u128 {
            return Err(CodecError::InsufficientCapacity {
                radix,
                capacity,
                cell_count,
            });
        }
        Ok(Self { radix, capacity })
    }

    /// The base of the encoding (vocabulary size).
    pub fn radix(&self) -> u64 {
        self.radix
    }

    /// Number of distinct addresses, `radix^3`.
    pub fn capacity(&self) -> u128 {
        self.capacity
    }

    /// Splits an index into three digits, least significant first.
    #[inline]
    pub fn encode(&self, index: u64) -> Result<Digits, CodecError> {
        if index as u128 >= self.capacity {
            return Err(CodecError::Overflow {
                index,
                radix: self.radix,
            });
        }

        let mut rest = index;
        let mut digits = [0usize; WORDS_PER_ADDRESS];
        for digit in &mut digits {
            *digit = (rest % self.radix) as usize;
            rest /= self.radix;
        }
        Ok(digits)
    }

    /// Reassembles an index from three digits, least significant first.
    #[inline]
    pub fn decode(&self, digits: Digits) -> Result<u64, CodecError> {
        let mut index: u128 = 0;
        for &digit in digits.iter().rev() {
            if digit as u64 >= self.radix {
                return Err(CodecError::DigitOutOfRange {
                    digit,
                    radix: self.radix,
                });
            }
            index = index * self.radix as u128 + digit as u128;
        }

        // Only reachable when V^3 exceeds u64::MAX.
        u64::try_from(index).map_err(|_| CodecError::Overflow {
            index: u64::MAX,
            radix: self.radix,
        })
    }
}
