//! Shared prefix of two geohash codes.

/// Returns the longest leading run shared by `left` and `right`, lowercased.
///
/// The comparison ignores case and stops at the end of the shorter code, so an
/// empty input always gives an empty prefix.
///
/// ```rust
/// use geobucket::common_prefix;
///
/// assert_eq!(common_prefix("abce", "abcd"), "abc");
/// assert_eq!(common_prefix("U4PR", "u4px"), "u4p");
/// assert_eq!(common_prefix("u4", "u4pr"), "u4");
/// assert_eq!(common_prefix("", "u4pr"), "");
/// ```
pub fn common_prefix(left: &str, right: &str) -> String {
    let left = left.to_lowercase();
    let right = right.to_lowercase();

    left.chars()
        .zip(right.chars())
        .take_while(|(l, r)| l == r)
        .map(|(l, _)| l)
        .collect()
}
