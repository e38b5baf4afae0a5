//! Font descriptors and the derivation seam.
//!
//! The engine never talks to a platform font API. It asks a [`FontDeriver`]
//! for "the base font with these traits" and stores whatever comes back on
//! each run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A font descriptor supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    /// Point size.
    pub size: f32,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
            italic: false,
        }
    }
}

/// The traits requested from a [`FontDeriver`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontTraits {
    pub bold: bool,
    pub italic: bool,
    /// Multiplier applied to the base size.
    pub scale: f32,
}

impl FontTraits {
    pub const BODY: FontTraits = FontTraits {
        bold: false,
        italic: false,
        scale: 1.0,
    };
}

impl fmt::Display for FontTraits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bold={}, italic={}, scale={}",
            self.bold, self.italic, self.scale
        )
    }
}

/// Derives a styled font from a base font.
///
/// Implemented by the rendering collaborator. Failures are reported to the
/// caller of the conversion unchanged.
pub trait FontDeriver {
    type Error: std::error::Error + Send + Sync + 'static;

    fn derive(&self, base: &FontSpec, traits: FontTraits) -> Result<FontSpec, Self::Error>;
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FontError {
    #[error("font size must be a positive finite number, got {0}")]
    InvalidSize(f32),
    #[error("font family is empty")]
    EmptyFamily,
}

/// Platform-free deriver: scales the size and sets the trait flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaledFontDeriver;

impl FontDeriver for ScaledFontDeriver {
    type Error = FontError;

    fn derive(&self, base: &FontSpec, traits: FontTraits) -> Result<FontSpec, FontError> {
        if base.family.trim().is_empty() {
            return Err(FontError::EmptyFamily);
        }
        let size = base.size * traits.scale;
        if !size.is_finite() || size <= 0.0 {
            return Err(FontError::InvalidSize(size));
        }
        Ok(FontSpec {
            family: base.family.clone(),
            size,
            bold: base.bold || traits.bold,
            italic: base.italic || traits.italic,
        })
    }
}
