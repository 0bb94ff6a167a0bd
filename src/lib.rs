//! Deterministic geohash buckets for partitioning geospatial datasets.
//!
//! A bounding box is described by the geohash of its bottom-left and top-right
//! corners. Boxes that stay inside one first-level cell get a drill-down path
//! with one directory per shared geohash character; wider boxes get a named
//! region.
//!
//! ```rust
//! use geobucket::build_path;
//!
//! assert_eq!(build_path("u4pruydqqvj8", "u4pruydqqvj3"), "u/4/p/r/u/y/d/q/q/v/j");
//! assert_eq!(build_path("u4pruydqqvj8", "v4pruydqqvj3"), "NE");
//! assert_eq!(build_path("74pruydqqvj8", "s4pruydqqvj3"), "All");
//! ```
//!
//! Geometries and GeoJSON documents can be bucketed directly:
//!
//! ```rust
//! use geobucket::{Bucketer, Point};
//!
//! let bucketer = Bucketer::new(3)?;
//! assert_eq!(bucketer.bucket_for_point(&Point::new(-5.6, 42.6))?, "e/z/s");
//! # Ok::<(), geobucket::BucketError>(())
//! ```

pub mod bucket;
pub mod config;
pub mod error;
pub mod geometry;
pub mod ingest;
pub mod stats;
pub mod validation;

pub use bucket::{
    BoxToken, Bucket, GEOHASH_ALPHABET, MacroRegion, PATH_SEPARATOR, Region, bucket_for,
    build_path, classify, common_prefix, region_name, resolve_box,
};
pub use config::Config;
pub use error::{BucketError, Result};
pub use geometry::Bucketer;
pub use ingest::{bucket_geojson_file, bucket_geojson_str};
pub use stats::{BucketStats, SharedBucketStats, StatsReport, StatsSummary, format_count};

pub use geo::{Point, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{BucketError, Bucketer, Config, Result};

    pub use crate::bucket::{Bucket, MacroRegion, Region, bucket_for, build_path};

    pub use crate::{BucketStats, SharedBucketStats};

    pub use geo::{Point, Rect};
}
