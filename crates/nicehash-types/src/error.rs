//! Error types for registry lookups

use thiserror::Error;

/// Errors raised when converting raw codes or names into registry types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    /// Integer code has no entry in the table
    #[error("Unknown {kind} code: {code}")]
    UnknownCode { kind: &'static str, code: u8 },

    /// Name has no entry in the table (lookups are case-sensitive)
    #[error("Unknown {kind} name: {name}")]
    UnknownName { kind: &'static str, name: String },
}

/// Result type for registry conversions
pub type TypesResult<T> = Result<T, TypesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TypesError::UnknownCode { kind: "algorithm", code: 123 };
        assert_eq!(err.to_string(), "Unknown algorithm code: 123");

        let err = TypesError::UnknownName {
            kind: "location",
            name: "asia".to_string(),
        };
        assert!(err.to_string().contains("asia"));
    }
}
