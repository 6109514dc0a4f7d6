//! Errors that occur during writing

use crate::validate::ValidationReport;

/// An error occurred while building or writing a font
#[derive(Debug)]
pub enum Error {
    /// The font, or the source it was built from, failed validation.
    ValidationFailed(ValidationReport),
    /// A font source could not be parsed.
    InvalidSource(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ValidationFailed(report) => std::fmt::Display::fmt(report, f),
            Error::InvalidSource(error) => write!(f, "Invalid font source: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ValidationFailed(report) => Some(report),
            Error::InvalidSource(error) => Some(error),
        }
    }
}

impl From<ValidationReport> for Error {
    fn from(report: ValidationReport) -> Self {
        Error::ValidationFailed(report)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::InvalidSource(error)
    }
}
