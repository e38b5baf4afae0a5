//! Emphasis delimiters and the numeric emphasis rule.
//!
//! All delimiter constants live here; the parser never hardcodes `_` or `*`.

/// A character that opens and closes an emphasis span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Underscore,
    Star,
}

impl Delimiter {
    pub const UNDERSCORE: u8 = b'_';
    pub const STAR: u8 = b'*';

    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            Self::UNDERSCORE => Some(Delimiter::Underscore),
            Self::STAR => Some(Delimiter::Star),
            _ => None,
        }
    }

    pub fn byte(self) -> u8 {
        match self {
            Delimiter::Underscore => Self::UNDERSCORE,
            Delimiter::Star => Self::STAR,
        }
    }
}

/// `*d*` with exactly one ASCII digit renders bold-italic.
///
/// The rule is keyed on the delimiter: `_7_` is ordinary italic.
pub struct NumericEmphasis;

impl NumericEmphasis {
    pub const DELIMITER: Delimiter = Delimiter::Star;

    pub fn applies(delim: Delimiter, inner: &str) -> bool {
        delim == Self::DELIMITER && matches!(inner.as_bytes(), [d] if d.is_ascii_digit())
    }
}
