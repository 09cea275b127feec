//! Region type definitions

use std::fmt;

/// Approximate length of one degree of latitude, in meters.
///
/// Also used for one degree of longitude at the equator before the
/// `cos(latitude)` correction.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Default bounding box: mainland India and its coastal waters.
pub const DEFAULT_MIN_LAT: f64 = 6.5;
pub const DEFAULT_MAX_LAT: f64 = 37.6;
pub const DEFAULT_MIN_LNG: f64 = 68.7;
pub const DEFAULT_MAX_LNG: f64 = 97.25;

/// Default edge length of a grid cell.
pub const DEFAULT_CELL_SIZE_METERS: f64 = 3.0;

/// Geographic bounding box and grid resolution.
///
/// Latitudes cover `[min_lat, max_lat)` and longitudes `[min_lng, max_lng)`:
/// the south and west edges belong to the region, the north and east edges
/// do not.
///
/// # Example
///
/// ```
/// use wordgrid::region::Region;
///
/// let region = Region::new(0.0, 1.0, 10.0, 11.0, 100.0).unwrap();
/// assert_eq!(region.reference_latitude(), 0.5);
/// assert!(region.contains(0.0, 10.0));
/// assert!(!region.contains(1.0, 10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
    cell_size_meters: f64,
}

impl Region {
    /// Create a region, validating bounds and cell size.
    pub fn new(
        min_lat: f64,
        max_lat: f64,
        min_lng: f64,
        max_lng: f64,
        cell_size_meters: f64,
    ) -> Result<Self, RegionError> {
        for (field, value) in [
            ("min_lat", min_lat),
            ("max_lat", max_lat),
            ("min_lng", min_lng),
            ("max_lng", max_lng),
            ("cell_size_meters", cell_size_meters),
        ] {
            if !value.is_finite() {
                return Err(RegionError::NotFinite { field, value });
            }
        }

        if min_lat < -90.0 || max_lat > 90.0 {
            return Err(RegionError::LatitudeRange { min_lat, max_lat });
        }
        if min_lng < -180.0 || max_lng > 180.0 {
            return Err(RegionError::LongitudeRange { min_lng, max_lng });
        }
        if min_lat >= max_lat {
            return Err(RegionError::LatitudeOrder { min_lat, max_lat });
        }
        if min_lng >= max_lng {
            return Err(RegionError::LongitudeOrder { min_lng, max_lng });
        }
        if cell_size_meters <= 0.0 {
            return Err(RegionError::CellSize(cell_size_meters));
        }

        Ok(Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
            cell_size_meters,
        })
    }

    /// The built-in region: India at 3 m resolution.
    pub fn india() -> Self {
        Self {
            min_lat: DEFAULT_MIN_LAT,
            max_lat: DEFAULT_MAX_LAT,
            min_lng: DEFAULT_MIN_LNG,
            max_lng: DEFAULT_MAX_LNG,
            cell_size_meters: DEFAULT_CELL_SIZE_METERS,
        }
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    pub fn min_lng(&self) -> f64 {
        self.min_lng
    }

    pub fn max_lng(&self) -> f64 {
        self.max_lng
    }

    pub fn cell_size_meters(&self) -> f64 {
        self.cell_size_meters
    }

    /// North-south span in degrees.
    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// East-west span in degrees.
    #[inline]
    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// Latitude at which east-west distances are measured.
    ///
    /// The region's horizontal midline. Column widths are derived from this
    /// latitude once, so every row of the grid has the same number of columns.
    #[inline]
    pub fn reference_latitude(&self) -> f64 {
        (self.min_lat + self.max_lat) / 2.0
    }

    /// Returns true if the coordinate lies inside the half-open box.
    #[inline]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.min_lat..self.max_lat).contains(&lat) && (self.min_lng..self.max_lng).contains(&lng)
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::india()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lat [{}, {}) lng [{}, {}) @ {} m",
            self.min_lat, self.max_lat, self.min_lng, self.max_lng, self.cell_size_meters
        )
    }
}

/// Number of rows and columns spanning a region.
///
/// Both counts are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridExtent {
    /// Cells along the north-south axis
    pub rows: u64,
    /// Cells along the east-west axis
    pub columns: u64,
}

impl GridExtent {
    /// Total number of addressable cells (`rows * columns`).
    #[inline]
    pub fn cell_count(&self) -> u64 {
        self.rows * self.columns
    }
}

impl fmt::Display for GridExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rows x {} columns", self.rows, self.columns)
    }
}

/// Errors raised while validating a region.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegionError {
    #[error("Region {field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("Region latitudes must lie within [-90, 90], got [{min_lat}, {max_lat}]")]
    LatitudeRange { min_lat: f64, max_lat: f64 },

    #[error("Region longitudes must lie within [-180, 180], got [{min_lng}, {max_lng}]")]
    LongitudeRange { min_lng: f64, max_lng: f64 },

    #[error("Region min_lat ({min_lat}) must be less than max_lat ({max_lat})")]
    LatitudeOrder { min_lat: f64, max_lat: f64 },

    #[error("Region min_lng ({min_lng}) must be less than max_lng ({max_lng})")]
    LongitudeOrder { min_lng: f64, max_lng: f64 },

    #[error("Cell size must be positive, got {0} m")]
    CellSize(f64),

    #[error("Grid of {rows} x {columns} cells is too large to index")]
    GridTooLarge { rows: f64, columns: f64 },
}
