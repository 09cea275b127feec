//! Grid indexing
//!
//! Quantizes coordinates inside a [`Region`] to grid cells and maps cells back
//! to their center coordinate. The grid is fixed when the indexer is built:
//! row height and column width never depend on the point being indexed.

pub mod linear;

pub use linear::{from_linear, to_linear, RangeError};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::region::{compute_extent, GridExtent, Region, RegionError};

/// One grid square, addressed by row (south to north) and column (west to east).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, 0 at the region's southern edge
    pub row: u64,
    /// Column index, 0 at the region's western edge
    pub column: u64,
}

impl Cell {
    pub fn new(row: u64, column: u64) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "latitude")]
    pub lat: f64,
    #[serde(rename = "longitude")]
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Edge of the region a coordinate fell outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Latitude below `min_lat`
    South,
    /// Latitude at or above `max_lat`
    North,
    /// Longitude below `min_lng`
    West,
    /// Longitude at or above `max_lng`
    East,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Bound::South => "south",
            Bound::North => "north",
            Bound::West => "west",
            Bound::East => "east",
        };
        f.write_str(name)
    }
}

/// Errors raised while locating a coordinate on the grid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Coordinate lies outside the region
    #[error("Coordinate ({lat}, {lng}) is outside the region: {reason}")]
    OutOfBounds {
        lat: f64,
        lng: f64,
        bound: Bound,
        reason: String,
    },

    /// Latitude or longitude is NaN or infinite
    #[error("Coordinate ({lat}, {lng}) is not a finite number")]
    NotFinite { lat: f64, lng: f64 },
}

/// Converts between coordinates and cells over a fixed grid.
///
/// The extent is computed once at construction. Latitude steps are uniform
/// across the region; longitude steps are uniform too, with the column count
/// derived at the region's reference latitude.
///
/// # Example
///
/// ```
/// use wordgrid::grid::{Cell, GridIndexer};
/// use wordgrid::region::Region;
///
/// let region = Region::new(0.0, 1.0, 0.0, 1.0, 11_000.0).unwrap();
/// let indexer = GridIndexer::new(region).unwrap();
///
/// let cell = indexer.coord_to_cell(0.35, 0.75).unwrap();
/// assert_eq!(cell, Cell::new(3, 7));
///
/// let center = indexer.cell_to_coord(cell).unwrap();
/// assert!((center.lat - 0.35).abs() < 1e-9);
/// assert!((center.lng - 0.75).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct GridIndexer {
    region: Region,
    extent: GridExtent,
    lat_step: f64,
    lng_step: f64,
}

impl GridIndexer {
    /// Build an indexer, computing and caching the grid extent.
    pub fn new(region: Region) -> Result<Self, RegionError> {
        let extent = compute_extent(&region)?;
        Ok(Self {
            region,
            extent,
            lat_step: region.lat_span() / extent.rows as f64,
            lng_step: region.lng_span() / extent.columns as f64,
        })
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> u64 {
        self.extent.cell_count()
    }

    /// Height of one row, in degrees of latitude.
    pub fn lat_step(&self) -> f64 {
        self.lat_step
    }

    /// Width of one column, in degrees of longitude.
    pub fn lng_step(&self) -> f64 {
        self.lng_step
    }

    /// Locates the cell containing a coordinate.
    ///
    /// The south and west edges are inclusive, the north and east edges
    /// exclusive.
    pub fn coord_to_cell(&self, lat: f64, lng: f64) -> Result<Cell, GridError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(GridError::NotFinite { lat, lng });
        }
        self.check_bounds(lat, lng)?;

        // Rounding can push a point just below the north/east edge onto the
        // next (nonexistent) row or column.
        let row = (((lat - self.region.min_lat()) / self.lat_step).floor() as u64)
            .min(self.extent.rows - 1);
        let column = (((lng - self.region.min_lng()) / self.lng_step).floor() as u64)
            .min(self.extent.columns - 1);

        Ok(Cell { row, column })
    }

    /// Returns the geometric center of a cell.
    pub fn cell_to_coord(&self, cell: Cell) -> Result<Coordinate, RangeError> {
        if cell.row >= self.extent.rows || cell.column >= self.extent.columns {
            return Err(RangeError::Cell {
                cell,
                extent: self.extent,
            });
        }

        Ok(Coordinate {
            lat: self.region.min_lat() + (cell.row as f64 + 0.5) * self.lat_step,
            lng: self.region.min_lng() + (cell.column as f64 + 0.5) * self.lng_step,
        })
    }

    fn check_bounds(&self, lat: f64, lng: f64) -> Result<(), GridError> {
        let region = &self.region;
        let violation = if lat < region.min_lat() {
            Some((
                Bound::South,
                format!("latitude must be >= {}", region.min_lat()),
            ))
        } else if lat >= region.max_lat() {
            Some((
                Bound::North,
                format!("latitude must be < {}", region.max_lat()),
            ))
        } else if lng < region.min_lng() {
            Some((
                Bound::West,
                format!("longitude must be >= {}", region.min_lng()),
            ))
        } else if lng >= region.max_lng() {
            Some((
                Bound::East,
                format!("longitude must be < {}", region.max_lng()),
            ))
        } else {
            None
        };

        match violation {
            Some((bound, reason)) => Err(GridError::OutOfBounds {
                lat,
                lng,
                bound,
                reason,
            }),
            None => Ok(()),
        }
    }
}
