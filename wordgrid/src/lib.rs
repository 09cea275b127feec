//! wordgrid - Three-word addresses for locations inside a bounded region
//!
//! The region is divided into square cells of a fixed size. Every cell gets
//! a unique, deterministic address of three words, and every address maps
//! back to the center of its cell.
//!
//! # High-Level API
//!
//! The [`converter`] module ties the pieces together:
//!
//! ```
//! use wordgrid::converter::CoordinateWordConverter;
//! use wordgrid::region::Region;
//! use wordgrid::vocabulary::{VocabularyTable, DEFAULT_GENERATED_SIZE};
//!
//! let vocabulary = VocabularyTable::generated(DEFAULT_GENERATED_SIZE).unwrap();
//! let converter = CoordinateWordConverter::new(Region::india(), vocabulary).unwrap();
//!
//! let words = converter.coords_to_words(12.9716, 77.5946).unwrap();
//! let center = converter.words_to_coords(&words).unwrap();
//! assert!((center.lat - 12.9716).abs() < 1e-4);
//! ```
//!
//! Lower layers are usable on their own: [`region`] computes grid extents,
//! [`grid`] maps coordinates to cells and cells to linear indices, [`codec`]
//! turns indices into vocabulary digits, and [`vocabulary`] holds the words.

pub mod codec;
pub mod config;
pub mod converter;
pub mod grid;
pub mod logging;
pub mod region;
pub mod vocabulary;

/// Version of the wordgrid library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
