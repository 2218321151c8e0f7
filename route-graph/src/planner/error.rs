//! Route search error types.

use crate::domain::PathError;

/// A requested direct edge or explicit route does not exist.
///
/// This is an ordinary answer, not a fault: the named stations simply are
/// not connected the way the caller asked. `from` and `to` are the first
/// consecutive pair without a direct edge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("NO SUCH ROUTE")]
pub struct NoRoute {
    pub from: String,
    pub to: String,
}

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A path was extended with a segment that does not connect
    #[error("path invariant violated: {0}")]
    Path(#[from] PathError),

    /// No route at all connects the two stations
    #[error("no route from {origin} to {destination}")]
    Unreachable { origin: String, destination: String },

    /// Distance-limited search checked more pairs than allowed
    #[error("distance-limited search exceeded its budget of {budget} splice checks")]
    BudgetExhausted { budget: usize },

    /// Stop-bounded enumeration explored more partial paths than allowed
    #[error("route enumeration exceeded its budget of {budget} partial paths")]
    EnumerationExhausted { budget: usize },
}
