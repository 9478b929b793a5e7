//! Request validation utilities.

use crate::types::{Error, Result};

/// Message returned when a request carries no source document.
pub const NO_CODE_PROVIDED: &str = "No code provided";

/// Reject missing, empty and whitespace-only documents.
pub fn validate_source(source: Option<&str>) -> Result<&str> {
    match source {
        Some(code) if !code.trim().is_empty() => Ok(code),
        _ => Err(Error::validation(NO_CODE_PROVIDED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_source() {
        assert_eq!(validate_source(Some("x();")).unwrap(), "x();");
        for bad in [None, Some(""), Some(" \n\t ")] {
            let err = validate_source(bad).unwrap_err();
            assert_eq!(err.client_message(), NO_CODE_PROVIDED);
        }
    }
}
