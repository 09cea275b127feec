//! Row-major linearization of grid cells.
//!
//! `index = row * columns + column`. Indices are unsigned, so the only
//! invalid index is one at or past the cell count.

use super::Cell;
use crate::region::GridExtent;

/// A cell or index that does not belong to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("Cell {cell} is outside the grid ({extent})")]
    Cell { cell: Cell, extent: GridExtent },

    #[error("Index {index} is outside the grid ({cell_count} cells)")]
    Index { index: u64, cell_count: u64 },
}

/// Converts a cell to its row-major linear index.
#[inline]
pub fn to_linear(cell: Cell, extent: GridExtent) -> Result<u64, RangeError> {
    if cell.row >= extent.rows || cell.column >= extent.columns {
        return Err(RangeError::Cell { cell, extent });
    }
    Ok(cell.row * extent.columns + cell.column)
}

/// Converts a row-major linear index back to its cell.
#[inline]
pub fn from_linear(index: u64, extent: GridExtent) -> Result<Cell, RangeError> {
    let cell_count = extent.cell_count();
    if index >= cell_count {
        return Err(RangeError::Index { index, cell_count });
    }
    Ok(Cell {
        row: index / extent.columns,
        column: index % extent.columns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEN_BY_TEN: GridExtent = GridExtent {
        rows: 10,
        columns: 10,
    };

    #[test]
    fn test_row_major_order() {
        assert_eq!(to_linear(Cell::new(0, 0), TEN_BY_TEN), Ok(0));
        assert_eq!(to_linear(Cell::new(0, 9), TEN_BY_TEN), Ok(9));
        assert_eq!(to_linear(Cell::new(1, 0), TEN_BY_TEN), Ok(10));
        assert_eq!(to_linear(Cell::new(3, 7), TEN_BY_TEN), Ok(37));
        assert_eq!(to_linear(Cell::new(9, 9), TEN_BY_TEN), Ok(99));
    }

    #[test]
    fn test_from_linear() {
        assert_eq!(from_linear(37, TEN_BY_TEN), Ok(Cell::new(3, 7)));
        assert_eq!(from_linear(99, TEN_BY_TEN), Ok(Cell::new(9, 9)));
        assert_eq!(from_linear(0, TEN_BY_TEN), Ok(Cell::new(0, 0)));
    }

    #[test]
    fn test_non_square_extent() {
        let extent = GridExtent {
            rows: 3,
            columns: 7,
        };
        for index in 0..extent.cell_count() {
            let cell = from_linear(index, extent).unwrap();
            assert!(cell.row < 3 && cell.column < 7);
            assert_eq!(to_linear(cell, extent), Ok(index));
        }
    }

    #[test]
    fn test_cell_outside_extent() {
        let err = to_linear(Cell::new(10, 0), TEN_BY_TEN).unwrap_err();
        assert!(matches!(err, RangeError::Cell { .. }));

        let err = to_linear(Cell::new(0, 10), TEN_BY_TEN).unwrap_err();
        assert!(matches!(err, RangeError::Cell { .. }));
    }

    #[test]
    fn test_index_outside_extent() {
        assert_eq!(
            from_linear(100, TEN_BY_TEN),
            Err(RangeError::Index {
                index: 100,
                cell_count: 100
            })
        );
        assert!(from_linear(u64::MAX, TEN_BY_TEN).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = from_linear(100, TEN_BY_TEN).unwrap_err();
        assert_eq!(err.to_string(), "Index 100 is outside the grid (100 cells)");

        let err = to_linear(Cell::new(10, 2), TEN_BY_TEN).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cell (10, 2) is outside the grid (10 rows x 10 columns)"
        );
    }
}
