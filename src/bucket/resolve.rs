//! Resolving the first-level cell of a bounding box.
//!
//! A bounding box is described by the geohash of its bottom-left and top-right
//! corners. Looking only at the first symbol of each corner tells us whether
//! the whole box sits inside one first-level cell (so the caller can drill
//! further) or which part of the globe it covers.

use super::region::{Region, classify};
use std::fmt;

/// A named bucket for boxes wider than a single first-level cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MacroRegion {
    /// Corners at `0` and `z`, the lowest and highest cells.
    Global,
    /// South-west to north-east: all four quadrants.
    All,
    /// North-east and north-west quadrants.
    North,
    /// South-east and south-west quadrants.
    South,
    /// North-east and south-east quadrants.
    East,
    /// North-west and south-west quadrants.
    West,
    /// Both corners in one quadrant, or a combination no row covers.
    Quadrant(Region),
}

impl MacroRegion {
    /// Every bucket name this type can render as.
    pub const NAMES: [&'static str; 10] = [
        "Global", "All", "North", "South", "East", "West", "NE", "NW", "SE", "SW",
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            MacroRegion::Global => "Global",
            MacroRegion::All => "All",
            MacroRegion::North => "North",
            MacroRegion::South => "South",
            MacroRegion::East => "East",
            MacroRegion::West => "West",
            MacroRegion::Quadrant(region) => region.as_str(),
        }
    }

    /// Parses a bucket name back into a macro region. Matching is exact.
    pub fn from_name(name: &str) -> Option<MacroRegion> {
        match name {
            "Global" => Some(MacroRegion::Global),
            "All" => Some(MacroRegion::All),
            "North" => Some(MacroRegion::North),
            "South" => Some(MacroRegion::South),
            "East" => Some(MacroRegion::East),
            "West" => Some(MacroRegion::West),
            _ => Region::from_name(name).map(MacroRegion::Quadrant),
        }
    }
}

impl fmt::Display for MacroRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of comparing the first symbols of two corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxToken {
    /// Both corners share this first-level cell; drill further.
    ExactCell(char),
    /// The box spans more than one cell.
    Named(MacroRegion),
    /// The bottom-left symbol is outside every quadrant.
    Unclassified,
}

impl fmt::Display for BoxToken {
    /// Renders the legacy token: one character, a region name, or nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxToken::ExactCell(symbol) => write!(f, "{}", symbol),
            BoxToken::Named(region) => f.write_str(region.as_str()),
            BoxToken::Unclassified => Ok(()),
        }
    }
}

/// Resolves the first-level box for a pair of corner symbols.
///
/// Both symbols are compared case-insensitively. The checks run in order and
/// the first match wins:
///
/// 1. identical symbols: [`BoxToken::ExactCell`]
/// 2. `0` and `z`: [`MacroRegion::Global`]
/// 3. quadrant pairs SW/NE, SE/NE, SW/NW, NW/NE, SW/SE: `All`, `East`, `West`,
///    `North`, `South`
/// 4. anything else keeps the bottom-left quadrant, so diagonal pairs such as
///    NW/SE report `NW`
///
/// # Examples
///
/// ```rust
/// use geobucket::{resolve_box, BoxToken, MacroRegion, Region};
///
/// assert_eq!(resolve_box('u', 'U'), BoxToken::ExactCell('u'));
/// assert_eq!(resolve_box('0', 'z'), BoxToken::Named(MacroRegion::Global));
/// assert_eq!(resolve_box('h', 'v'), BoxToken::Named(MacroRegion::East));
/// assert_eq!(
///     resolve_box('u', 'v'),
///     BoxToken::Named(MacroRegion::Quadrant(Region::NorthEast))
/// );
/// ```
pub fn resolve_box(bottom_left: char, top_right: char) -> BoxToken {
    let bottom_left = bottom_left.to_ascii_lowercase();
    let top_right = top_right.to_ascii_lowercase();

    if bottom_left == top_right {
        return BoxToken::ExactCell(bottom_left);
    }

    if bottom_left == '0' && top_right == 'z' {
        return BoxToken::Named(MacroRegion::Global);
    }

    use Region::*;
    let region = match (classify(bottom_left), classify(top_right)) {
        (Some(SouthWest), Some(NorthEast)) => MacroRegion::All,
        (Some(SouthEast), Some(NorthEast)) => MacroRegion::East,
        (Some(SouthWest), Some(NorthWest)) => MacroRegion::West,
        (Some(NorthWest), Some(NorthEast)) => MacroRegion::North,
        (Some(SouthWest), Some(SouthEast)) => MacroRegion::South,
        // TODO: diagonal pairs (NW/SE, NE/SW) drop the top-right quadrant;
        // decide whether they should report `All` once real data shows up.
        (Some(region), _) => MacroRegion::Quadrant(region),
        (None, _) => return BoxToken::Unclassified,
    };
    BoxToken::Named(region)
}
