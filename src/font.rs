use crate::error::LayoutError;
use crate::measure::{Measure, TextExtent};
use crate::units::Pt;
use owned_ttf_parser::{AsFaceRef, OwnedFace};

/// A [Measure] backed by a parsed TTF or OTF font face. Word widths are the
/// sums of glyph horizontal advances (no kerning or shaping; words are
/// measured as whole left-to-right runs) and the line height is
/// `leading + ascent - descent`, scaled to the requested size.
pub struct FontMetrics {
    face: OwnedFace,
}

impl FontMetrics {
    /// Load a font from raw bytes, parsing the font and returning an error
    /// if the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<FontMetrics, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(FontMetrics { face })
    }

    fn scaling(&self, size: Pt) -> f32 {
        size.0 / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the
    /// font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        Pt(self.scaling(size) * self.face.as_face_ref().ascender() as f32)
    }

    /// Calculate the descent (distance from the baseline to the bottom of
    /// the font) for the given font size. Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        Pt(self.scaling(size) * self.face.as_face_ref().descender() as f32)
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Pt) -> Pt {
        Pt(self.scaling(size) * self.face.as_face_ref().line_gap() as f32)
    }

    /// Calculate the default line height of the font for the given size. The
    /// returned value is how much to vertically offset a second row of text
    /// below a first row of text, before any extra paragraph spacing.
    pub fn line_height(&self, size: Pt) -> Pt {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }

    /// The advance of a single character, falling back to the replacement
    /// glyph and then `?` when the font has no glyph for it
    fn char_advance(&self, ch: char, size: Pt) -> Option<Pt> {
        let face = self.face.as_face_ref();
        let gid = face
            .glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))?;
        let advance = face.glyph_hor_advance(gid).unwrap_or_default();
        Some(Pt(self.scaling(size) * advance as f32))
    }
}

impl Measure for FontMetrics {
    fn measure(&self, text: &str, size: Pt) -> Result<TextExtent, LayoutError> {
        let mut width = Pt(0.0);
        for ch in text.chars().filter(|&ch| ch != '\n') {
            width += self
                .char_advance(ch, size)
                .ok_or_else(|| LayoutError::Measurement {
                    text: text.to_string(),
                    size: size.0,
                })?;
        }

        Ok(TextExtent {
            width,
            height: self.line_height(size),
        })
    }
}
