//! Bounded depth-first route enumeration.
//!
//! Finds every path from an origin to a destination whose stop count lies
//! within a range. Cycles are allowed: a path may pass through any station,
//! the destination included, as often as the stop bound permits.

use tracing::{debug, trace};

use crate::domain::Path;
use crate::graph::Graph;

use super::config::SearchConfig;
use super::error::SearchError;

/// Optional stop-count limits for a query.
///
/// Missing limits fall back to the defaults: no minimum, and a maximum of
/// the graph's station count plus [`SearchConfig::extra_stops`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StopLimit {
    /// Fewest stops a route may have.
    pub min: Option<usize>,
    /// Most stops a route may have.
    pub max: Option<usize>,
}

impl StopLimit {
    /// No explicit limits.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// At most `max` stops.
    pub fn at_most(max: usize) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Exactly `stops` stops.
    pub fn exactly(stops: usize) -> Self {
        Self::between(stops, stops)
    }

    /// Between `min` and `max` stops, inclusive.
    pub fn between(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Fill in missing limits for a particular graph.
    pub fn resolve(&self, graph: &Graph, config: &SearchConfig) -> StopBounds {
        StopBounds {
            min: self.min.unwrap_or(0),
            max: self
                .max
                .unwrap_or_else(|| config.default_max_stops(graph.station_count())),
        }
    }
}

/// Concrete inclusive stop-count bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopBounds {
    pub min: usize,
    pub max: usize,
}

impl StopBounds {
    /// Returns true if `stops` lies within the bounds.
    pub fn contains(&self, stops: usize) -> bool {
        self.min <= stops && stops <= self.max
    }
}

/// Enumerate every path from `origin` to `destination` within `bounds`.
///
/// The result order is not significant. An unknown origin, or a maximum of
/// zero stops, yields no paths. Exploring more than
/// [`SearchConfig::explore_budget`] partial paths aborts with
/// [`SearchError::EnumerationExhausted`].
pub fn enumerate_paths(
    graph: &Graph,
    origin: &str,
    destination: &str,
    bounds: StopBounds,
    config: &SearchConfig,
) -> Result<Vec<Path>, SearchError> {
    let mut search = Enumeration {
        graph,
        destination,
        bounds,
        extend_past_match: config.extend_past_match,
        budget: config.explore_budget,
        found: Vec::new(),
        explored: 0,
    };

    if bounds.max > 0 {
        search.run(graph.edges_from(origin).map(Path::from_edge).collect())?;
    }

    debug!(
        origin,
        destination,
        min_stops = bounds.min,
        max_stops = bounds.max,
        explored = search.explored,
        found = search.found.len(),
        "Route enumeration complete"
    );

    Ok(search.found)
}

/// State of one depth-first enumeration.
struct Enumeration<'a> {
    graph: &'a Graph,
    destination: &'a str,
    bounds: StopBounds,
    extend_past_match: bool,
    budget: usize,
    found: Vec<Path>,
    explored: usize,
}

impl Enumeration<'_> {
    /// Depth-first over an explicit stack, so deep stop bounds cannot
    /// exhaust the call stack.
    fn run(&mut self, mut stack: Vec<Path>) -> Result<(), SearchError> {
        while let Some(path) = stack.pop() {
            self.explored += 1;
            if self.explored > self.budget {
                return Err(SearchError::EnumerationExhausted {
                    budget: self.budget,
                });
            }

            let stops = path.stop_count();
            let matched =
                path.destination().as_str() == self.destination && stops >= self.bounds.min;
            let extend = stops < self.bounds.max && (self.extend_past_match || !matched);

            if extend {
                for edge in self.graph.edges_from(path.destination().as_str()) {
                    stack.push(path.fork(&edge)?);
                }
            }

            if matched {
                trace!(route = %path, distance = path.distance(), "Found route");
                self.found.push(path);
            }
        }

        Ok(())
    }
}
