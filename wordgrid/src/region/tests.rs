//! Tests for region validation and grid extent

use super::*;

#[test]
fn test_india_extent() {
    let extent = compute_extent(&Region::india()).unwrap();
    assert_eq!(extent.rows, 1_154_017);
    assert_eq!(extent.columns, 981_907);
    assert_eq!(extent.cell_count(), 1_133_137_370_419);
}

#[test]
fn test_default_is_india() {
    assert_eq!(Region::default(), Region::india());
    let region = Region::india();
    assert_eq!(region.min_lat(), DEFAULT_MIN_LAT);
    assert_eq!(region.max_lng(), DEFAULT_MAX_LNG);
    assert_eq!(region.cell_size_meters(), DEFAULT_CELL_SIZE_METERS);
}

#[test]
fn test_toy_region_is_ten_by_ten() {
    // 11 km cells over a 1° x 1° box near the equator
    let region = Region::new(0.0, 1.0, 0.0, 1.0, 11_000.0).unwrap();
    let extent = compute_extent(&region).unwrap();
    assert_eq!(extent, GridExtent { rows: 10, columns: 10 });
    assert_eq!(extent.cell_count(), 100);
}

#[test]
fn test_columns_use_midline_not_southern_edge() {
    // Same longitude span, different latitude bands: the northern band has
    // fewer columns because meridians converge.
    let south = Region::new(0.0, 10.0, 0.0, 10.0, 1_000.0).unwrap();
    let north = Region::new(50.0, 60.0, 0.0, 10.0, 1_000.0).unwrap();
    let south_extent = compute_extent(&south).unwrap();
    let north_extent = compute_extent(&north).unwrap();
    assert_eq!(south_extent.rows, north_extent.rows);
    assert!(north_extent.columns < south_extent.columns);

    let expected = (10.0 * METERS_PER_DEGREE * 55.0_f64.to_radians().cos() / 1_000.0).floor();
    assert_eq!(north_extent.columns, expected as u64);
}

#[test]
fn test_huge_cells_give_single_cell_grid() {
    let region = Region::new(0.0, 1.0, 0.0, 1.0, 1_000_000.0).unwrap();
    let extent = compute_extent(&region).unwrap();
    assert_eq!(extent, GridExtent { rows: 1, columns: 1 });
}

#[test]
fn test_tiny_cells_rejected_as_too_large() {
    let region = Region::new(-80.0, 80.0, -180.0, 180.0, 0.0001).unwrap();
    assert!(matches!(
        compute_extent(&region),
        Err(RegionError::GridTooLarge { .. })
    ));
}

#[test]
fn test_degenerate_latitude_rejected() {
    let result = Region::new(10.0, 10.0, 0.0, 1.0, 3.0);
    assert!(matches!(result, Err(RegionError::LatitudeOrder { .. })));

    let result = Region::new(11.0, 10.0, 0.0, 1.0, 3.0);
    assert!(matches!(result, Err(RegionError::LatitudeOrder { .. })));
}

#[test]
fn test_degenerate_longitude_rejected() {
    let result = Region::new(0.0, 1.0, 5.0, 5.0, 3.0);
    assert!(matches!(result, Err(RegionError::LongitudeOrder { .. })));
}

#[test]
fn test_non_positive_cell_size_rejected() {
    assert_eq!(
        Region::new(0.0, 1.0, 0.0, 1.0, 0.0),
        Err(RegionError::CellSize(0.0))
    );
    assert_eq!(
        Region::new(0.0, 1.0, 0.0, 1.0, -3.0),
        Err(RegionError::CellSize(-3.0))
    );
}

#[test]
fn test_non_finite_values_rejected() {
    let result = Region::new(f64::NAN, 1.0, 0.0, 1.0, 3.0);
    assert!(matches!(
        result,
        Err(RegionError::NotFinite {
            field: "min_lat",
            ..
        })
    ));

    let result = Region::new(0.0, 1.0, 0.0, 1.0, f64::INFINITY);
    assert!(matches!(
        result,
        Err(RegionError::NotFinite {
            field: "cell_size_meters",
            ..
        })
    ));
}

#[test]
fn test_out_of_globe_bounds_rejected() {
    assert!(matches!(
        Region::new(-91.0, 0.0, 0.0, 1.0, 3.0),
        Err(RegionError::LatitudeRange { .. })
    ));
    assert!(matches!(
        Region::new(0.0, 1.0, 170.0, 181.0, 3.0),
        Err(RegionError::LongitudeRange { .. })
    ));
}

#[test]
fn test_contains_is_half_open() {
    let region = Region::new(0.0, 1.0, 0.0, 1.0, 11_000.0).unwrap();
    assert!(region.contains(0.0, 0.0));
    assert!(region.contains(0.999_999, 0.999_999));
    assert!(!region.contains(1.0, 0.5));
    assert!(!region.contains(0.5, 1.0));
    assert!(!region.contains(-0.000_001, 0.5));
    assert!(!region.contains(0.5, -0.000_001));
    assert!(!region.contains(f64::NAN, 0.5));
}

#[test]
fn test_display() {
    let region = Region::new(0.0, 1.0, 2.0, 3.0, 5.0).unwrap();
    assert_eq!(format!("{}", region), "lat [0, 1) lng [2, 3) @ 5 m");

    let extent = GridExtent { rows: 3, columns: 4 };
    assert_eq!(format!("{}", extent), "3 rows x 4 columns");
}

#[test]
fn test_error_messages_name_the_problem() {
    let err = Region::new(0.0, 1.0, 0.0, 1.0, -1.0).unwrap_err();
    assert_eq!(err.to_string(), "Cell size must be positive, got -1 m");

    let err = Region::new(2.0, 1.0, 0.0, 1.0, 1.0).unwrap_err();
    assert!(err.to_string().contains("min_lat (2)"));
}
