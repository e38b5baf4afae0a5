//! Tunable styling constants.

use serde::{Deserialize, Serialize};

use crate::{document::HeadingLevel, error::ConvertError, font::FontSpec};

/// Size multiplier for `# ` headings.
pub const DEFAULT_HEADING1_SCALE: f32 = 1.6;
/// Size multiplier for `## ` headings.
pub const DEFAULT_HEADING2_SCALE: f32 = 1.3;
/// Blank lines beyond this count add no further spacing.
pub const DEFAULT_MAX_BLANK_LINES: usize = 2;
/// Spacing per blank line, in multiples of the base font size.
pub const DEFAULT_BLANK_LINE_EM: f32 = 1.0;

/// Styling knobs for the document assembler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub heading1_scale: f32,
    pub heading2_scale: f32,
    pub max_blank_lines: usize,
    pub blank_line_em: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            heading1_scale: DEFAULT_HEADING1_SCALE,
            heading2_scale: DEFAULT_HEADING2_SCALE,
            max_blank_lines: DEFAULT_MAX_BLANK_LINES,
            blank_line_em: DEFAULT_BLANK_LINE_EM,
        }
    }
}

impl StyleConfig {
    /// Checks that heading 1 renders at least as large as heading 2, heading 2
    /// at least as large as body text, and the spacing factor is usable.
    pub fn validate(&self) -> Result<(), ConvertError> {
        for (name, value) in [
            ("heading1_scale", self.heading1_scale),
            ("heading2_scale", self.heading2_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConvertError::InvalidStyle(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }
        if self.heading2_scale < 1.0 {
            return Err(ConvertError::InvalidStyle(format!(
                "heading2_scale must be at least 1.0, got {}",
                self.heading2_scale
            )));
        }
        if self.heading1_scale < self.heading2_scale {
            return Err(ConvertError::InvalidStyle(format!(
                "heading1_scale ({}) must not be smaller than heading2_scale ({})",
                self.heading1_scale, self.heading2_scale
            )));
        }
        if !self.blank_line_em.is_finite() || self.blank_line_em < 0.0 {
            return Err(ConvertError::InvalidStyle(format!(
                "blank_line_em must be a non-negative finite number, got {}",
                self.blank_line_em
            )));
        }
        Ok(())
    }

    pub fn scale_for(&self, heading: HeadingLevel) -> f32 {
        match heading {
            HeadingLevel::Body => 1.0,
            HeadingLevel::H1 => self.heading1_scale,
            HeadingLevel::H2 => self.heading2_scale,
        }
    }

    /// Spacing for a run preceded by `blank_lines` blank lines.
    pub fn spacing_for(&self, blank_lines: usize, base: &FontSpec) -> f32 {
        let units = blank_lines.min(self.max_blank_lines);
        units as f32 * self.blank_line_em * base.size
    }
}
