//! Region configuration
//!
//! Describes the single axis-aligned bounding box the codec addresses and
//! derives the fixed grid extent laid over it.

mod types;

pub use types::{
    GridExtent, Region, RegionError, DEFAULT_CELL_SIZE_METERS, DEFAULT_MAX_LAT, DEFAULT_MAX_LNG,
    DEFAULT_MIN_LAT, DEFAULT_MIN_LNG, METERS_PER_DEGREE,
};

/// Largest row or column count accepted.
///
/// Keeps both counts exactly representable as `f64` and their product inside `u64`.
pub const MAX_AXIS_CELLS: u64 = u32::MAX as u64;

/// Computes the grid extent for a region.
///
/// Rows divide the north-south extent (in meters) by the cell size. Columns
/// do the same for the east-west extent, measured at the region's reference
/// latitude. Partial cells at the north and east edges are absorbed into the
/// last row and column, and each axis has at least one cell.
pub fn compute_extent(region: &Region) -> Result<GridExtent, RegionError> {
    let lat_meters = region.lat_span() * METERS_PER_DEGREE;
    let lng_meters = region.lng_span()
        * METERS_PER_DEGREE
        * region.reference_latitude().to_radians().cos();

    let rows = (lat_meters / region.cell_size_meters()).floor().max(1.0);
    let columns = (lng_meters / region.cell_size_meters()).floor().max(1.0);

    if rows > MAX_AXIS_CELLS as f64 || columns > MAX_AXIS_CELLS as f64 {
        return Err(RegionError::GridTooLarge { rows, columns });
    }

    Ok(GridExtent {
        rows: rows as u64,
        columns: columns as u64,
    })
}

#[cfg(test)]
mod tests;
