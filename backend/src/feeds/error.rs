//! Feed loading errors

use thiserror::Error;

/// Failure to load one of the data feeds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The underlying file does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// The file exists but could not be read or parsed
    #[error("failed to load {resource}: {reason}")]
    Corrupt { resource: String, reason: String },
}

impl FeedError {
    pub fn corrupt(resource: impl Into<String>, reason: impl ToString) -> Self {
        FeedError::Corrupt {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FeedError::NotFound("stock file".to_string()).to_string(),
            "stock file not found"
        );
        assert_eq!(
            FeedError::corrupt("catalog file", "row 3: missing name").to_string(),
            "failed to load catalog file: row 3: missing name"
        );
    }
}
