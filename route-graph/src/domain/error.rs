//! Domain error types.
//!
//! These errors represent broken path invariants. They indicate a caller
//! bug rather than missing data: a lookup miss on the graph is reported as
//! "no route" elsewhere, never through these.

use super::Station;

/// Errors raised when building a path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The next edge or path does not start where the path ends
    #[error("cannot extend path ending at {at} with a segment starting at {next}")]
    NotAdjacent { at: Station, next: Station },

    /// Path has no edges
    #[error("path must have at least one edge")]
    EmptyPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PathError::NotAdjacent {
            at: Station::parse("C").unwrap(),
            next: Station::parse("E").unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "cannot extend path ending at C with a segment starting at E"
        );

        let err = PathError::EmptyPath;
        assert_eq!(err.to_string(), "path must have at least one edge");
    }
}
