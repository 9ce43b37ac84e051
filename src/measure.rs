use crate::error::LayoutError;
use crate::units::Pt;

/// The measured extent of a piece of text at a given font size. `width` is
/// the rendered width of the text; `height` is the line height for that
/// size, independent of the text itself.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextExtent {
    pub width: Pt,
    pub height: Pt,
}

/// The measurement half of the rendering collaborator: given a string and a
/// font size, report its rendered extent in canvas coordinates.
///
/// Implementations must be pure (identical inputs always produce identical
/// extents): results are cached per word for the lifetime of a
/// [ParagraphWriter](crate::ParagraphWriter) and concurrent re-measurement
/// relies on writes being idempotent.
pub trait Measure {
    fn measure(&self, text: &str, size: Pt) -> Result<TextExtent, LayoutError>;
}

impl<M: Measure + ?Sized> Measure for &M {
    fn measure(&self, text: &str, size: Pt) -> Result<TextExtent, LayoutError> {
        (**self).measure(text, size)
    }
}

/// A fontless [Measure] built from per-character width factors calibrated
/// against a standard sans-serif stack at a 16px baseline. Good enough to
/// drive layout when no font file is at hand; swap in
/// [FontMetrics](crate::FontMetrics) for real glyph advances.
#[derive(Debug, Copy, Clone)]
pub struct HeuristicMetrics {
    /// Line height as a multiple of the font size
    pub line_height_factor: f32,
}

impl Default for HeuristicMetrics {
    fn default() -> Self {
        HeuristicMetrics {
            line_height_factor: 1.2,
        }
    }
}

impl Measure for HeuristicMetrics {
    fn measure(&self, text: &str, size: Pt) -> Result<TextExtent, LayoutError> {
        let width: f32 = text
            .chars()
            .filter(|&ch| ch != '\n')
            .map(char_width_factor)
            .sum();
        Ok(TextExtent {
            width: size * width,
            height: size * self.line_height_factor,
        })
    }
}

/// Approximate advance of a character as a fraction of the font size.
/// Calibrated against a default sans-serif stack at a 16px measurement
/// baseline; unknown characters get an average width.
pub fn char_width_factor(ch: char) -> f32 {
    match ch {
        ' ' => 0.306,
        '\\' | '.' | ',' | ':' | ';' | '|' | '!' | '(' | ')' | '[' | ']' | '{' | '}' => 0.321,
        'A' => 0.652,
        'B' => 0.648,
        'C' => 0.734,
        'D' => 0.723,
        'E' => 0.594,
        'F' => 0.575,
        'G' | 'H' => 0.742,
        'I' => 0.272,
        'J' => 0.557,
        'K' => 0.648,
        'L' => 0.559,
        'M' => 0.903,
        'N' => 0.763,
        'O' => 0.754,
        'P' => 0.623,
        'Q' => 0.755,
        'R' => 0.637,
        'S' => 0.633,
        'T' => 0.599,
        'U' => 0.746,
        'V' => 0.661,
        'W' => 0.958,
        'X' => 0.655,
        'Y' => 0.646,
        'Z' => 0.621,
        'a' => 0.550,
        'b' => 0.603,
        'c' => 0.547,
        'd' => 0.609,
        'e' => 0.570,
        'f' => 0.340,
        'g' | 'h' => 0.600,
        'i' => 0.235,
        'j' => 0.227,
        'k' => 0.522,
        'l' => 0.239,
        'm' => 0.867,
        'n' => 0.585,
        'o' => 0.574,
        'p' => 0.595,
        'q' => 0.585,
        'r' => 0.364,
        's' => 0.523,
        't' => 0.305,
        'u' => 0.585,
        'v' => 0.545,
        'w' => 0.811,
        'x' => 0.538,
        'y' => 0.556,
        'z' => 0.550,
        '0' => 0.613,
        '1' => 0.396,
        '2' => 0.609,
        '3' => 0.597,
        '4' => 0.614,
        '5' => 0.586,
        '6' => 0.608,
        '7' => 0.559,
        '8' => 0.611,
        '9' => 0.595,
        '@' | '#' | '%' | '&' => 0.946,
        _ => 0.568,
    }
}
