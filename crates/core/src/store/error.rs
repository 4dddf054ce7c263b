use thiserror::Error;

/// Errors that can occur when loading a country's holiday dataset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No holiday data for country: {country}")]
    NotFound { country: String },
    #[error("Failed to read holiday data for {country}: {reason}")]
    Unreadable { country: String, reason: String },
    #[error("Malformed holiday data for {country}: {reason}")]
    Malformed { country: String, reason: String },
}

/// Result type for calendar store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        assert_eq!(
            StoreError::NotFound {
                country: "xx".to_string()
            }
            .to_string(),
            "No holiday data for country: xx"
        );
        assert_eq!(
            StoreError::Malformed {
                country: "de".to_string(),
                reason: "missing field `name`".to_string()
            }
            .to_string(),
            "Malformed holiday data for de: missing field `name`"
        );
    }
}
