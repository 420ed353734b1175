//! Error types for picklist
//!
//! The picker state machine itself is total over well-formed input; errors
//! only arise at the edges (roster files, the terminal).

use thiserror::Error;

/// Main error type for picklist operations
#[derive(Error, Debug)]
pub enum PickerError {
    #[error("Failed to read roster file '{0}': {1}")]
    RosterRead(String, std::io::Error),

    #[error("Failed to parse roster file '{0}': {1}")]
    RosterParse(String, serde_json::Error),

    #[error("Unknown output format '{0}' (expected 'text' or 'json')")]
    UnknownOutputFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for picklist operations
pub type Result<T> = std::result::Result<T, PickerError>;

impl PickerError {
    /// Check if this error stems from a bad roster file (as opposed to a
    /// terminal/IO failure)
    pub fn is_roster_error(&self) -> bool {
        matches!(
            self,
            PickerError::RosterRead(_, _) | PickerError::RosterParse(_, _)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_errors_are_classified() {
        let err = PickerError::RosterRead(
            "roster.json".to_string(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.is_roster_error());
        assert!(err.to_string().contains("roster.json"));

        let io = PickerError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert!(!io.is_roster_error());
    }
}
