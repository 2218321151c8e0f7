//! Route queries over a loaded graph.
//!
//! `RouteQuery` is the entry point for callers: it answers distance, route
//! enumeration, shortest-route and distance-limited questions by composing
//! the graph lookups, the enumerator and the route splicer.

use tracing::debug;

use crate::domain::Path;
use crate::graph::Graph;

use super::combine::combine_routes;
use super::config::SearchConfig;
use super::enumerate::{StopLimit, enumerate_paths};
use super::error::{NoRoute, SearchError};

/// Query facade over a read-only graph.
pub struct RouteQuery<'a> {
    graph: &'a Graph,
    config: &'a SearchConfig,
}

impl<'a> RouteQuery<'a> {
    /// Create a new query facade.
    pub fn new(graph: &'a Graph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Distance of the direct edge between two stations.
    pub fn distance_between(&self, origin: &str, destination: &str) -> Result<u64, NoRoute> {
        self.graph
            .edge_distance(origin, destination)
            .map(|d| d.get())
            .ok_or_else(|| NoRoute {
                from: origin.to_string(),
                to: destination.to_string(),
            })
    }

    /// Total distance travelling directly between consecutive stations.
    ///
    /// Stops at the first pair without a direct edge. A sequence of fewer
    /// than two stations travels nowhere and has distance 0.
    ///
    /// # Example
    ///
    /// ```
    /// use route_graph::graph::{Graph, sample_triples};
    /// use route_graph::planner::{RouteQuery, SearchConfig};
    ///
    /// let graph = Graph::from_triples(sample_triples()).unwrap();
    /// let config = SearchConfig::default();
    /// let query = RouteQuery::new(&graph, &config);
    ///
    /// assert_eq!(query.distance_along_route(&["A", "B", "C"]), Ok(9));
    /// assert!(query.distance_along_route(&["A", "E", "D"]).is_err());
    /// ```
    pub fn distance_along_route(&self, stations: &[&str]) -> Result<u64, NoRoute> {
        stations.windows(2).try_fold(0, |total, pair| {
            self.distance_between(pair[0], pair[1]).map(|d| total + d)
        })
    }

    /// All routes between two stations within the stop limit.
    pub fn routes_between(
        &self,
        origin: &str,
        destination: &str,
        limit: StopLimit,
    ) -> Result<Vec<Path>, SearchError> {
        let bounds = limit.resolve(self.graph, self.config);
        enumerate_paths(self.graph, origin, destination, bounds, self.config)
    }

    /// Number of routes between two stations within the stop limit.
    pub fn route_count(
        &self,
        origin: &str,
        destination: &str,
        limit: StopLimit,
    ) -> Result<usize, SearchError> {
        Ok(self.routes_between(origin, destination, limit)?.len())
    }

    /// Routes between two stations with default stop limits, shortest first.
    pub fn routes_by_distance(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<Path>, SearchError> {
        let mut routes = self.routes_between(origin, destination, StopLimit::unbounded())?;
        routes.sort_by_key(Path::distance);
        Ok(routes)
    }

    /// The shortest route between two stations.
    ///
    /// Fails with [`SearchError::Unreachable`] if no route exists.
    pub fn shortest_route(&self, origin: &str, destination: &str) -> Result<Path, SearchError> {
        self.routes_between(origin, destination, StopLimit::unbounded())?
            .into_iter()
            .min_by_key(Path::distance)
            .ok_or_else(|| SearchError::Unreachable {
                origin: origin.to_string(),
                destination: destination.to_string(),
            })
    }

    /// Length of the shortest route between two stations.
    pub fn shortest_distance(&self, origin: &str, destination: &str) -> Result<u64, SearchError> {
        Ok(self.shortest_route(origin, destination)?.distance())
    }

    /// Every distinct route between two stations shorter than `limit`,
    /// including routes that loop through the destination repeatedly.
    pub fn routes_under_distance(
        &self,
        origin: &str,
        destination: &str,
        limit: u64,
    ) -> Result<Vec<Path>, SearchError> {
        let base = self.routes_between(origin, destination, StopLimit::unbounded())?;
        let routes = combine_routes(base, limit, self.config.splice_budget)?;

        debug!(
            origin,
            destination,
            limit,
            routes = routes.len(),
            "Distance-limited query complete"
        );

        Ok(routes)
    }

    /// Number of distinct routes between two stations shorter than `limit`.
    pub fn route_count_under_distance(
        &self,
        origin: &str,
        destination: &str,
        limit: u64,
    ) -> Result<usize, SearchError> {
        Ok(self.routes_under_distance(origin, destination, limit)?.len())
    }
}
