use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    /// An alignment string was not one of the recognized values. Raised at
    /// the [FromStr](std::str::FromStr) boundary; the typed API cannot
    /// produce this.
    #[error("invalid alignment '{value}': must be one of {expected}")]
    InvalidAlignment {
        value: String,
        expected: &'static str,
    },

    /// A justification string was not one of the recognized values
    #[error("invalid justification '{0}': must be 'left', 'right', 'center', or 'full'")]
    InvalidJustification(String),

    /// An obstacle intersection left a line with no horizontal room. No text
    /// is drawn for the failing call.
    #[error("no horizontal room for line {line}: its band is {width} wide after avoiding obstacles")]
    Infeasible { line: usize, width: f32 },

    /// The measurement collaborator could not measure a piece of text
    #[error("could not measure {text:?} at font size {size}")]
    Measurement { text: String, size: f32 },

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),
}
