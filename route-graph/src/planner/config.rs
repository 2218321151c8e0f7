//! Search configuration for the route planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Stops added to the station count to form the default maximum.
    /// Unbounded searches stop after `station_count + extra_stops` edges.
    pub extra_stops: usize,

    /// Keep extending a path after it has reached the destination.
    /// When false, a match ends its branch and longer routes through the
    /// destination are only found by splicing.
    pub extend_past_match: bool,

    /// Maximum number of path pairs the distance-limited search may check.
    /// Exceeding it aborts the search.
    pub splice_budget: usize,

    /// Maximum number of partial paths stop-bounded enumeration may explore.
    /// Exceeding it aborts the search.
    pub explore_budget: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        extra_stops: usize,
        extend_past_match: bool,
        splice_budget: usize,
        explore_budget: usize,
    ) -> Self {
        Self {
            extra_stops,
            extend_past_match,
            splice_budget,
            explore_budget,
        }
    }

    /// Returns the default maximum stop count for a graph of `station_count`
    /// stations.
    pub fn default_max_stops(&self, station_count: usize) -> usize {
        station_count.saturating_add(self.extra_stops)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            extra_stops: 1,
            extend_past_match: true,
            splice_budget: 1_000_000,
            explore_budget: 1_000_000,
        }
    }
}
