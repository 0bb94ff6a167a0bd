//! Bucket naming for geohash bounding boxes.
//!
//! Given the geohash of a box's bottom-left and top-right corners, produce a
//! partition key:
//!
//! - `u/4/p/r`: both corners share a first-level cell; one directory per
//!   shared geohash character
//! - `Global`, `All`, `North`, `South`, `East`, `West`, `NE`, `NW`, `SE`, `SW`:
//!   the box spans more than one first-level cell
//! - `""`: the first corner symbol is not a geohash symbol
//!
//! ```text
//! build_path
//! ├─ resolve_box (first symbol of each corner)
//! │  └─ classify (quadrant lookup)
//! └─ common_prefix (only when both corners share a cell)
//! ```
//!
//! Everything here is pure and allocation-light, so it can be called from any
//! number of threads.

pub mod path;
pub mod prefix;
pub mod region;
pub mod resolve;

pub use path::{Bucket, PATH_SEPARATOR, bucket_for, build_path};
pub use prefix::common_prefix;
pub use region::{GEOHASH_ALPHABET, Region, classify, region_name};
pub use resolve::{BoxToken, MacroRegion, resolve_box};
