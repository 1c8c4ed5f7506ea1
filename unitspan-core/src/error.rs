//! Error type for conversion-graph operations
//!
//! Errors are values that propagate to the caller; nothing here is
//! retried or degraded. `NoConversionPath` is an expected outcome
//! (disconnected units), distinct from `UnknownUnit`.

use thiserror::Error;

/// Errors raised by converter construction and queries
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("duplicate unit: {0}")]
    DuplicateUnit(String),

    #[error("invalid multiplier {factor} for {source} -> {target}: must be finite and > 0")]
    InvalidMultiplier {
        // `r#` keeps thiserror from treating this "source unit" field as
        // the error's source(); the field name is still `source` to callers.
        r#source: String,
        target: String,
        factor: f64,
    },

    #[error("conversion {source} -> {target} is already defined")]
    DuplicateConversion { r#source: String, target: String },

    #[error("self conversion {0} -> {0} cannot be stored")]
    SelfConversion(String),

    #[error("no conversion path from {source} to {target}")]
    NoConversionPath { r#source: String, target: String },

    #[error("parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = ConvertError::UnknownUnit("furlong".to_string());
        assert_eq!(format!("{}", e), "unknown unit: furlong");

        let e = ConvertError::NoConversionPath {
            source: "m".to_string(),
            target: "kg".to_string(),
        };
        assert_eq!(format!("{}", e), "no conversion path from m to kg");
    }

    #[test]
    fn test_invalid_multiplier_message() {
        let e = ConvertError::InvalidMultiplier {
            source: "m".to_string(),
            target: "ft".to_string(),
            factor: 0.0,
        };
        let msg = format!("{}", e);
        assert!(msg.contains("invalid multiplier"));
        assert!(msg.contains("m -> ft"));
    }
}
