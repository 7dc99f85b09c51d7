//! Nut code error types

use thiserror::Error;

/// Errors raised while turning a nut URL back into a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NutCodeError {
    #[error("Invalid scheme: expected nut://, got {0}:")]
    InvalidScheme(String),

    #[error("URL is not well formed: {0}")]
    MalformedUrl(#[from] url::ParseError),

    #[error("URL carries no data")]
    MissingData,

    #[error("Base64 decoding error: {0}")]
    Base64Decoding(#[from] base64::DecodeError),

    #[error("Missing version byte")]
    MissingVersion,

    #[error("Unrecognized version {0}")]
    UnrecognizedVersion(u8),

    #[error("Unexpected end of data")]
    UnexpectedEndOfData,

    #[error("Unrecognized nutrient code {0:#04x}")]
    UnrecognizedNutrientCode(u8),
}

/// Result type for nut code operations
pub type NutCodeResult<T> = Result<T, NutCodeError>;
