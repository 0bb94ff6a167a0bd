//! First-level geohash quadrants.
//!
//! The 32 first-level geohash cells split into four fixed groups of eight,
//! one per quarter of the globe. Classifying a symbol is a table lookup, no
//! latitude/longitude math is needed.

use std::fmt;

/// The geohash base-32 alphabet, in code order.
pub const GEOHASH_ALPHABET: &str = "0123456789bcdefghjkmnpqrstuvwxyz";

const NORTH_EAST: &str = "uvyzstwx";
const NORTH_WEST: &str = "bcfg89de";
const SOUTH_EAST: &str = "kmqrhjnp";
const SOUTH_WEST: &str = "23670145";

/// A quarter of the first-level geohash grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::NorthEast,
        Region::NorthWest,
        Region::SouthEast,
        Region::SouthWest,
    ];

    /// The eight lowercase geohash symbols that make up this quadrant.
    pub const fn symbols(self) -> &'static str {
        match self {
            Region::NorthEast => NORTH_EAST,
            Region::NorthWest => NORTH_WEST,
            Region::SouthEast => SOUTH_EAST,
            Region::SouthWest => SOUTH_WEST,
        }
    }

    /// Short compass label used as a bucket name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Region::NorthEast => "NE",
            Region::NorthWest => "NW",
            Region::SouthEast => "SE",
            Region::SouthWest => "SW",
        }
    }

    /// Parses a compass label (`"NE"`, `"NW"`, `"SE"`, `"SW"`).
    pub fn from_name(name: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|region| region.as_str() == name)
    }

    /// True if `symbol` (case-insensitive) belongs to this quadrant.
    pub fn contains(self, symbol: char) -> bool {
        self.symbols().contains(symbol.to_ascii_lowercase())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the quadrant a first-level geohash symbol falls in.
///
/// Symbols outside the geohash alphabet are unclassified and yield `None`.
///
/// # Examples
///
/// ```rust
/// use geobucket::{classify, Region};
///
/// assert_eq!(classify('u'), Some(Region::NorthEast));
/// assert_eq!(classify('E'), Some(Region::NorthWest));
/// assert_eq!(classify('a'), None);
/// ```
pub fn classify(symbol: char) -> Option<Region> {
    let symbol = symbol.to_ascii_lowercase();
    Region::ALL
        .into_iter()
        .find(|region| region.symbols().contains(symbol))
}

/// String form of [`classify`]: the compass label, or `""` when unclassified.
pub fn region_name(symbol: char) -> &'static str {
    classify(symbol).map_or("", Region::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_symbol_has_exactly_one_region() {
        for symbol in GEOHASH_ALPHABET.chars() {
            let owners: Vec<Region> = Region::ALL
                .into_iter()
                .filter(|region| region.contains(symbol))
                .collect();
            assert_eq!(owners.len(), 1, "symbol {symbol} in {owners:?}");
            assert_eq!(classify(symbol), Some(owners[0]));
        }
    }

    #[test]
    fn test_tables_partition_alphabet() {
        let mut seen = HashSet::new();
        for region in Region::ALL {
            assert_eq!(region.symbols().len(), 8);
            for symbol in region.symbols().chars() {
                assert!(seen.insert(symbol), "{symbol} listed twice");
            }
        }
        let alphabet: HashSet<char> = GEOHASH_ALPHABET.chars().collect();
        assert_eq!(seen, alphabet);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify('U'), Some(Region::NorthEast));
        assert_eq!(classify('B'), Some(Region::NorthWest));
        assert_eq!(classify('K'), Some(Region::SouthEast));
        assert_eq!(region_name('Z'), "NE");
    }

    #[test]
    fn test_unclassified_symbols() {
        for symbol in ['a', 'i', 'l', 'o', 'A', '#', ' ', 'é'] {
            assert_eq!(classify(symbol), None);
            assert_eq!(region_name(symbol), "");
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(region_name('0'), "SW");
        assert_eq!(region_name('h'), "SE");
        assert_eq!(region_name('8'), "NW");
        assert_eq!(Region::SouthWest.to_string(), "SW");
        assert_eq!(Region::from_name("SE"), Some(Region::SouthEast));
        assert_eq!(Region::from_name("se"), None);
    }
}
