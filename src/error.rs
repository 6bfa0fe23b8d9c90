use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum WrapError {
    /// The maximum line width was not a number
    #[error("max width must be a number, got {0}")]
    InvalidMaxWidth(f32),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),
}
