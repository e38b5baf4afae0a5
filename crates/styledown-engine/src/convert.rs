//! # Document Assembly
//!
//! Second half of the pipeline: walks the classified lines, tokenizes their
//! content and emits [`StyledRun`]s with derived fonts and spacing.

use crate::{
    document::{HeadingLevel, RunKind, StyledDocument, StyledRun},
    error::ConvertError,
    font::{FontDeriver, FontSpec, FontTraits, ScaledFontDeriver},
    parsing::{
        inline::parse_fragments,
        lines::{ClassifiedLine, LineKind, classify_lines},
    },
    style::StyleConfig,
};

/// Converts markdown to a styled document with the default style and the
/// platform-free [`ScaledFontDeriver`].
///
/// Empty input yields an empty document. The only failure is an unusable
/// `base_font`.
pub fn convert(markdown: &str, base_font: &FontSpec) -> Result<StyledDocument, ConvertError> {
    Converter::default().convert(markdown, base_font)
}

/// Stateless converter holding a validated [`StyleConfig`].
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: StyleConfig,
}

impl Converter {
    pub fn new(config: StyleConfig) -> Result<Self, ConvertError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    pub fn convert(
        &self,
        markdown: &str,
        base_font: &FontSpec,
    ) -> Result<StyledDocument, ConvertError> {
        self.convert_with(markdown, base_font, &ScaledFontDeriver)
    }

    /// Converts using a caller-supplied font deriver.
    pub fn convert_with<D: FontDeriver>(
        &self,
        markdown: &str,
        base_font: &FontSpec,
        deriver: &D,
    ) -> Result<StyledDocument, ConvertError> {
        let mut assembler = Assembler {
            config: &self.config,
            fonts: FontCache::new(base_font, deriver),
            runs: Vec::new(),
            pending_blanks: 0,
            last_blank_line: 0,
        };
        for line in classify_lines(markdown) {
            log::trace!("line {}: {:?}", line.index, line.kind);
            assembler.push(&line)?;
        }
        let runs = assembler.finish()?;
        log::debug!(
            "converted {} bytes into {} styled runs",
            markdown.len(),
            runs.len()
        );
        Ok(StyledDocument::new(runs))
    }
}

struct Assembler<'a, D: FontDeriver> {
    config: &'a StyleConfig,
    fonts: FontCache<'a, D>,
    runs: Vec<StyledRun>,
    /// Blank lines seen since the last emitted run.
    pending_blanks: usize,
    last_blank_line: usize,
}

impl<D: FontDeriver> Assembler<'_, D> {
    fn push(&mut self, line: &ClassifiedLine<'_>) -> Result<(), ConvertError> {
        match line.kind {
            LineKind::Blank => {
                self.pending_blanks += 1;
                self.last_blank_line = line.index;
                return Ok(());
            }
            LineKind::HorizontalRule => {
                let font = self.fonts.get(FontTraits::BODY)?;
                let spacing = self.take_spacing();
                self.runs.push(StyledRun {
                    kind: RunKind::Rule,
                    text: String::new(),
                    bold: false,
                    italic: false,
                    heading: HeadingLevel::Body,
                    preceding_spacing: spacing,
                    line: line.index,
                    font,
                });
            }
            LineKind::Heading1 | LineKind::Heading2 => {
                let heading = if line.kind == LineKind::Heading1 {
                    HeadingLevel::H1
                } else {
                    HeadingLevel::H2
                };
                // Emphasis markup is consumed but a heading stays one run.
                let text: String = parse_fragments(line.content)
                    .into_iter()
                    .map(|f| f.text)
                    .collect();
                let font = self.fonts.get(FontTraits {
                    bold: true,
                    italic: false,
                    scale: self.config.scale_for(heading),
                })?;
                let spacing = self.take_spacing();
                self.runs.push(StyledRun {
                    kind: RunKind::Text,
                    text,
                    bold: true,
                    italic: false,
                    heading,
                    preceding_spacing: spacing,
                    line: line.index,
                    font,
                });
            }
            LineKind::ParagraphText => {
                for fragment in parse_fragments(line.content) {
                    let font = self.fonts.get(FontTraits {
                        bold: fragment.bold,
                        italic: fragment.italic,
                        scale: 1.0,
                    })?;
                    let spacing = self.take_spacing();
                    self.runs.push(StyledRun {
                        kind: RunKind::Text,
                        text: fragment.text.to_string(),
                        bold: fragment.bold,
                        italic: fragment.italic,
                        heading: HeadingLevel::Body,
                        preceding_spacing: spacing,
                        line: line.index,
                        font,
                    });
                }
            }
        }
        Ok(())
    }

    /// Spacing owed to the next run; resets the blank counter.
    fn take_spacing(&mut self) -> f32 {
        let blanks = std::mem::take(&mut self.pending_blanks);
        self.config.spacing_for(blanks, self.fonts.base)
    }

    fn finish(mut self) -> Result<Vec<StyledRun>, ConvertError> {
        if self.pending_blanks > 0 {
            let line = self.last_blank_line;
            let spacing = self.take_spacing();
            if spacing > 0.0 {
                let font = self.fonts.get(FontTraits::BODY)?;
                self.runs.push(StyledRun {
                    kind: RunKind::Spacing,
                    text: String::new(),
                    bold: false,
                    italic: false,
                    heading: HeadingLevel::Body,
                    preceding_spacing: spacing,
                    line,
                    font,
                });
            }
        }
        Ok(self.runs)
    }
}

/// Per-call memo of derived fonts. A document only ever needs a handful of
/// trait combinations.
struct FontCache<'a, D> {
    base: &'a FontSpec,
    deriver: &'a D,
    derived: Vec<(FontTraits, FontSpec)>,
}

impl<'a, D: FontDeriver> FontCache<'a, D> {
    fn new(base: &'a FontSpec, deriver: &'a D) -> Self {
        Self {
            base,
            deriver,
            derived: Vec::new(),
        }
    }

    fn get(&mut self, traits: FontTraits) -> Result<FontSpec, ConvertError> {
        if let Some((_, font)) = self.derived.iter().find(|(t, _)| *t == traits) {
            return Ok(font.clone());
        }
        let font = self
            .deriver
            .derive(self.base, traits)
            .map_err(|e| ConvertError::FontDerivation {
                traits,
                source: Box::new(e),
            })?;
        self.derived.push((traits, font.clone()));
        Ok(font)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use pretty_assertions::assert_eq;

    fn base() -> FontSpec {
        FontSpec::new("Georgia", 10.0)
    }

    fn texts(doc: &StyledDocument) -> Vec<&str> {
        doc.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn empty_input_is_empty_document() {
        let doc = convert("", &base()).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn heading_content_with_emphasis_is_one_run() {
        let doc = convert("# A *b* _c_", &base()).unwrap();
        assert_eq!(doc.len(), 1);
        let run = &doc.runs()[0];
        assert_eq!(run.text, "A b c");
        assert_eq!(run.heading, HeadingLevel::H1);
        assert!(run.bold);
        assert!(!run.italic);
        assert_eq!(run.font.size, 16.0);
    }

    #[test]
    fn heading_with_unmatched_delimiter_keeps_it() {
        let doc = convert("# *Title", &base()).unwrap();
        assert_eq!(texts(&doc), vec!["*Title"]);
    }

    #[test]
    fn spacing_attaches_to_first_run_of_line_only() {
        let doc = convert("a\n\nb *c*", &base()).unwrap();
        let spacing: Vec<f32> = doc.iter().map(|r| r.preceding_spacing).collect();
        assert_eq!(spacing, vec![0.0, 10.0, 0.0]);
        assert_eq!(doc.runs()[2].line, 2);
    }

    #[test]
    fn trailing_blank_lines_become_spacing_run() {
        let doc = convert("text\n\n\n\n", &base()).unwrap();
        assert_eq!(doc.len(), 2);
        let last = &doc.runs()[1];
        assert_eq!(last.kind, RunKind::Spacing);
        assert_eq!(last.text, "");
        assert_eq!(last.preceding_spacing, 20.0);
        assert_eq!(last.line, 3);
    }

    #[test]
    fn zero_spacing_drops_trailing_spacing_run() {
        let converter = Converter::new(StyleConfig {
            max_blank_lines: 0,
            ..Default::default()
        })
        .unwrap();
        let doc = converter.convert("text\n\n", &base()).unwrap();
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn rule_carries_pending_spacing() {
        let doc = convert("\n---", &base()).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.runs()[0].kind, RunKind::Rule);
        assert_eq!(doc.runs()[0].preceding_spacing, 10.0);
    }

    #[test]
    fn invalid_style_is_rejected() {
        let err = Converter::new(StyleConfig {
            heading1_scale: 1.0,
            heading2_scale: 2.0,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConvertError::InvalidStyle(_)));
    }

    struct CountingDeriver {
        calls: Cell<usize>,
    }

    impl FontDeriver for CountingDeriver {
        type Error = crate::font::FontError;

        fn derive(&self, base: &FontSpec, traits: FontTraits) -> Result<FontSpec, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            ScaledFontDeriver.derive(base, traits)
        }
    }

    #[test]
    fn fonts_are_derived_once_per_trait_set() {
        let deriver = CountingDeriver {
            calls: Cell::new(0),
        };
        let doc = Converter::default()
            .convert_with("a *b* c\nd *e* f\n# g\n# h", &base(), &deriver)
            .unwrap();
        assert_eq!(doc.len(), 8);
        // body, italic, heading 1
        assert_eq!(deriver.calls.get(), 3);
    }
}
