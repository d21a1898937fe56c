//! Error types for the SMTP URI mapper

use thiserror::Error;

/// Errors that can occur when applying an SMTP URI
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    /// The URI is not syntactically valid
    #[error("malformed SMTP URI: {0}")]
    Parse(#[from] url::ParseError),
}
