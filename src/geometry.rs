//! Geometry to bucket conversion using the geo and geohash crates.
//!
//! A geometry is filed by its bounding box: the bottom-left and top-right
//! corners are geohash-encoded at a fixed precision and handed to
//! [`bucket_for`](crate::bucket::bucket_for).

use crate::bucket::{Bucket, bucket_for};
use crate::error::Result;
use crate::validation::{validate_geographic_coord, validate_precision};
use geo::{BoundingRect, Coord, Geometry, Point, Rect};
use geohash::encode;
use log::{debug, warn};

/// Distance in degrees kept between an encoded coordinate and the +180/+90
/// edges. Far smaller than a precision-12 cell.
const EDGE_MARGIN: f64 = 1e-9;

/// Encodes geometries at a fixed geohash precision and names their bucket.
///
/// # Examples
///
/// ```rust
/// use geobucket::Bucketer;
/// use geo::{Point, Rect, coord};
///
/// let bucketer = Bucketer::new(5)?;
///
/// let point = Point::new(-5.6, 42.6);
/// assert_eq!(bucketer.encode(&point.0)?, "ezs42");
/// assert_eq!(bucketer.bucket_for_point(&point)?, "e/z/s/4/2");
///
/// // Straddles the prime meridian, north of the equator
/// let rect = Rect::new(coord! { x: -10.0, y: 10.0 }, coord! { x: 10.0, y: 20.0 });
/// assert_eq!(bucketer.bucket_for_rect(&rect)?, "North");
/// # Ok::<(), geobucket::BucketError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucketer {
    precision: usize,
}

impl Bucketer {
    /// Create a bucketer for geohashes of `precision` characters (1-12).
    pub fn new(precision: usize) -> Result<Self> {
        validate_precision(precision)?;
        Ok(Self { precision })
    }

    /// Geohash precision (and maximum bucket depth).
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Geohash of a single coordinate (x = longitude, y = latitude).
    pub fn encode(&self, coord: &Coord) -> Result<String> {
        validate_geographic_coord(coord)?;
        // The encoder wraps lon 180 and lat 90 to the opposite edge.
        let clamped = Coord {
            x: coord.x.min(180.0 - EDGE_MARGIN),
            y: coord.y.min(90.0 - EDGE_MARGIN),
        };
        Ok(encode(clamped, self.precision)?)
    }

    /// Typed bucket for a bounding box.
    pub fn bucket(&self, rect: &Rect) -> Result<Bucket> {
        let bottom_left = self.encode(&rect.min())?;
        let top_right = self.encode(&rect.max())?;
        let bucket = bucket_for(&bottom_left, &top_right);
        debug!("{} & {} -> {:?}", bottom_left, top_right, bucket);
        Ok(bucket)
    }

    /// Bucket path for a single point; both corners are the same geohash.
    pub fn bucket_for_point(&self, point: &Point) -> Result<String> {
        let hash = self.encode(&point.0)?;
        Ok(bucket_for(&hash, &hash).to_string())
    }

    /// Bucket path for a bounding box.
    pub fn bucket_for_rect(&self, rect: &Rect) -> Result<String> {
        Ok(self.bucket(rect)?.to_string())
    }

    /// Bucket path for any geometry, by bounding box.
    ///
    /// Multi-part geometries and collections are not bucketed and return
    /// `Ok(None)`, as do geometries without a bounding box (an empty line).
    pub fn bucket_for_geometry(&self, geometry: &Geometry) -> Result<Option<String>> {
        let rect = match geometry {
            Geometry::Point(point) => return self.bucket_for_point(point).map(Some),
            Geometry::Line(line) => Some(line.bounding_rect()),
            Geometry::LineString(line_string) => line_string.bounding_rect(),
            Geometry::Polygon(polygon) => polygon.bounding_rect(),
            Geometry::Rect(rect) => Some(*rect),
            Geometry::Triangle(triangle) => Some(triangle.bounding_rect()),
            Geometry::MultiPoint(_) => {
                warn!("MultiPoint geometries are not bucketed");
                return Ok(None);
            }
            Geometry::MultiLineString(_) => {
                warn!("MultiLineString geometries are not bucketed");
                return Ok(None);
            }
            Geometry::MultiPolygon(_) => {
                warn!("MultiPolygon geometries are not bucketed");
                return Ok(None);
            }
            Geometry::GeometryCollection(_) => {
                warn!("GeometryCollection geometries are not bucketed");
                return Ok(None);
            }
        };

        match rect {
            Some(rect) => self.bucket_for_rect(&rect).map(Some),
            None => {
                debug!("geometry has no bounding box");
                Ok(None)
            }
        }
    }
}
