//! Error types for the AirTight analysis model

use std::path::PathBuf;

use thiserror::Error;

use crate::ContentId;

/// Core analysis errors
///
/// Every variant is fail-fast: the parse that raised it stops there, with
/// no retry and no partial result.
#[derive(Error, Debug)]
pub enum AirtightError {
    // Log reader errors
    #[error("Malformed timestamp: {0:?}")]
    MalformedTimestamp(String),

    // Packet errors
    #[error("Malformed packet: {0}")]
    MalformedPacket(String),

    // Interpreter errors
    #[error("Invalid event kind: {0:?}")]
    InvalidEventKind(String),

    #[error("Malformed event body: {0}")]
    MalformedEventBody(String),

    // Slot table errors
    #[error("Invalid slot table format: {0}")]
    InvalidSlotTableFormat(String),

    // Store errors
    #[error("Duplicate id with differing content: {0}")]
    DuplicateIdConflict(ContentId),

    // Input preconditions
    #[error("Missing input file: {}", .0.display())]
    MissingInputFile(PathBuf),

    #[error("Missing input directory: {}", .0.display())]
    MissingInputDirectory(PathBuf),

    // I/O
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for core operations
pub type AirtightResult<T> = Result<T, AirtightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = AirtightError::InvalidEventKind("RETRY".into());
        assert_eq!(err.to_string(), "Invalid event kind: \"RETRY\"");

        let err = AirtightError::MissingInputFile(PathBuf::from("/data/routes.txt"));
        assert_eq!(err.to_string(), "Missing input file: /data/routes.txt");
    }
}
