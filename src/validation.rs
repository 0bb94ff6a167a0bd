//! Validation for geographic coordinates and geohash precision.

use crate::error::{BucketError, Result};
use geo::Coord;

/// Longest geohash the encoder produces.
pub const MAX_PRECISION: usize = 12;

/// Validates a coordinate has a finite longitude and latitude in range.
///
/// Longitude: [-180.0, 180.0], Latitude: [-90.0, 90.0]
///
/// # Examples
///
/// ```
/// use geobucket::validation::validate_geographic_coord;
/// use geo::coord;
///
/// assert!(validate_geographic_coord(&coord! { x: -5.6, y: 42.6 }).is_ok());
/// assert!(validate_geographic_coord(&coord! { x: 200.0, y: 40.0 }).is_err());
/// assert!(validate_geographic_coord(&coord! { x: -74.0, y: 95.0 }).is_err());
/// ```
pub fn validate_geographic_coord(coord: &Coord) -> Result<()> {
    check_axis("Longitude", coord.x, 180.0)?;
    check_axis("Latitude", coord.y, 90.0)
}

fn check_axis(axis: &str, value: f64, limit: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(BucketError::InvalidInput(format!(
            "{axis} is not a finite number: {value}"
        )));
    }
    if value.abs() > limit {
        return Err(BucketError::InvalidInput(format!(
            "{axis} {value} is outside -{limit}..={limit}"
        )));
    }
    Ok(())
}

/// Validates a geohash precision (1-12).
pub fn validate_precision(precision: usize) -> Result<()> {
    if (1..=MAX_PRECISION).contains(&precision) {
        Ok(())
    } else {
        Err(BucketError::InvalidPrecision(precision))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    #[test]
    fn test_valid_coords() {
        let oviedo = coord! { x: -5.6, y: 42.6 };
        assert!(validate_geographic_coord(&oviedo).is_ok());

        // Edge cases
        assert!(validate_geographic_coord(&coord! { x: 180.0, y: 0.0 }).is_ok());
        assert!(validate_geographic_coord(&coord! { x: -180.0, y: 0.0 }).is_ok());
        assert!(validate_geographic_coord(&coord! { x: 0.0, y: 90.0 }).is_ok());
        assert!(validate_geographic_coord(&coord! { x: 0.0, y: -90.0 }).is_ok());
    }

    #[test]
    fn test_out_of_range() {
        assert!(validate_geographic_coord(&coord! { x: 180.1, y: 40.0 }).is_err());
        assert!(validate_geographic_coord(&coord! { x: -200.0, y: 40.0 }).is_err());
        assert!(validate_geographic_coord(&coord! { x: -74.0, y: 90.1 }).is_err());
        assert!(validate_geographic_coord(&coord! { x: -74.0, y: -95.0 }).is_err());
    }

    #[test]
    fn test_non_finite() {
        assert!(validate_geographic_coord(&coord! { x: f64::NAN, y: 40.0 }).is_err());
        assert!(validate_geographic_coord(&coord! { x: -74.0, y: f64::INFINITY }).is_err());
        assert!(validate_geographic_coord(&coord! { x: f64::NEG_INFINITY, y: 0.0 }).is_err());
    }

    #[test]
    fn test_error_names_the_axis() {
        match validate_geographic_coord(&coord! { x: 0.0, y: 91.0 }) {
            Err(BucketError::InvalidInput(msg)) => assert!(msg.starts_with("Latitude"), "{msg}"),
            other => panic!("unexpected result: {other:?}"),
        }
        match validate_geographic_coord(&coord! { x: f64::NAN, y: 91.0 }) {
            Err(BucketError::InvalidInput(msg)) => assert!(msg.starts_with("Longitude"), "{msg}"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_precision_range() {
        assert!(validate_precision(1).is_ok());
        assert!(validate_precision(12).is_ok());
        assert!(matches!(
            validate_precision(0),
            Err(BucketError::InvalidPrecision(0))
        ));
        assert!(matches!(
            validate_precision(13),
            Err(BucketError::InvalidPrecision(13))
        ));
    }
}
