//! Bucket paths from corner geohashes.

use super::prefix::common_prefix;
use super::resolve::{BoxToken, MacroRegion, resolve_box};
use std::fmt;

/// Separator between drill-down segments in a bucket path.
pub const PATH_SEPARATOR: char = '/';

/// The bucket a bounding box is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Both corners share a first-level cell. Holds the shared, lowercased
    /// geohash prefix; every character becomes one directory segment.
    Cell(String),
    /// The box spans more than one first-level cell.
    Region(MacroRegion),
    /// The first corner symbol is outside the geohash alphabet, or a code was
    /// empty.
    Unclassified,
}

impl Bucket {
    /// Number of directory segments; zero for named regions.
    pub fn depth(&self) -> usize {
        match self {
            Bucket::Cell(prefix) => prefix.chars().count(),
            Bucket::Region(_) | Bucket::Unclassified => 0,
        }
    }

    /// Directory segments of a drill-down path, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = char> + '_ {
        let prefix = match self {
            Bucket::Cell(prefix) => prefix.as_str(),
            Bucket::Region(_) | Bucket::Unclassified => "",
        };
        prefix.chars()
    }

    pub fn is_macro_region(&self) -> bool {
        matches!(self, Bucket::Region(_))
    }

    pub fn is_unclassified(&self) -> bool {
        matches!(self, Bucket::Unclassified)
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::Cell(prefix) => {
                for (i, segment) in prefix.chars().enumerate() {
                    if i > 0 {
                        write!(f, "{}", PATH_SEPARATOR)?;
                    }
                    write!(f, "{}", segment)?;
                }
                Ok(())
            }
            Bucket::Region(region) => f.write_str(region.as_str()),
            Bucket::Unclassified => Ok(()),
        }
    }
}

/// Classifies a bounding box given the geohash of two opposite corners.
///
/// `bottom_left` and `top_right` should be encoded at the same precision. For a
/// single point pass the same code twice.
pub fn bucket_for(bottom_left: &str, top_right: &str) -> Bucket {
    let (Some(first_left), Some(first_right)) =
        (bottom_left.chars().next(), top_right.chars().next())
    else {
        return Bucket::Unclassified;
    };

    match resolve_box(first_left, first_right) {
        BoxToken::ExactCell(_) => Bucket::Cell(common_prefix(bottom_left, top_right)),
        BoxToken::Named(region) => Bucket::Region(region),
        BoxToken::Unclassified => Bucket::Unclassified,
    }
}

/// Builds the bucket path for two corner geohashes.
///
/// The result is either a `/`-separated drill-down path with one segment per
/// shared geohash character, one of the region names `Global`, `All`, `North`,
/// `South`, `East`, `West`, `NE`, `NW`, `SE`, `SW`, or an empty string when the
/// box cannot be classified.
///
/// # Examples
///
/// ```rust
/// use geobucket::build_path;
///
/// assert_eq!(build_path("u4pruydqqvj8", "u4pruydqqvj3"), "u/4/p/r/u/y/d/q/q/v/j");
/// assert_eq!(build_path("h4pruydqqvj8", "v4pruydqqvj3"), "East");
/// assert_eq!(build_path("04pruydqqvj8", "z4pruydqqvj3"), "Global");
/// ```
pub fn build_path(bottom_left: &str, top_right: &str) -> String {
    bucket_for(bottom_left, top_right).to_string()
}
