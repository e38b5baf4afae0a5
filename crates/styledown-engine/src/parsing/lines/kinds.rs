//! Line-level syntax markers.
//!
//! Each line kind owns its markup constants; the classifier reads them from
//! here and never hardcodes `#` or `-`.

/// ATX-style heading prefixes. Only levels 1 and 2 exist in this grammar and
/// the trailing space is part of the prefix.
pub struct Heading;

impl Heading {
    pub const H1_PREFIX: &'static str = "# ";
    pub const H2_PREFIX: &'static str = "## ";

    /// Returns the heading level and the remainder after the prefix.
    ///
    /// Level 2 is tried first because `"## "` also starts with `'#'`.
    pub fn strip_prefix(trimmed: &str) -> Option<(u8, &str)> {
        if let Some(rest) = trimmed.strip_prefix(Self::H2_PREFIX) {
            return Some((2, rest));
        }
        trimmed.strip_prefix(Self::H1_PREFIX).map(|rest| (1, rest))
    }
}

/// A horizontal rule: three or more dashes and nothing else.
pub struct HorizontalRule;

impl HorizontalRule {
    pub const DASH: char = '-';
    pub const MIN_DASHES: usize = 3;

    /// `trimmed` must already have surrounding whitespace removed; whitespace
    /// between dashes disqualifies the line.
    pub fn matches(trimmed: &str) -> bool {
        trimmed.len() >= Self::MIN_DASHES && trimmed.chars().all(|c| c == Self::DASH)
    }
}
