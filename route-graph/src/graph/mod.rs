//! Station graph storage.
//!
//! The graph maps each station to its outbound edges. It is built once from
//! a list of `(origin, destination, distance)` triples and only read after
//! that. Lookups for unknown stations are misses, never errors: callers
//! report them as "no route".

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::domain::{Distance, Edge, InvalidDistance, InvalidStation, Station};

/// Errors from loading edges into the graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Origin or destination is not a valid station name
    #[error(transparent)]
    InvalidStation(#[from] InvalidStation),

    /// Distance is zero, negative or out of range
    #[error("edge {origin}{destination}: {source}")]
    InvalidDistance {
        origin: String,
        destination: String,
        source: InvalidDistance,
    },
}

/// A directed, weighted station graph.
///
/// At most one edge exists per `(origin, destination)` pair; loading the
/// same pair again replaces its distance. Edges are kept in name order so
/// that iteration is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Map from origin to (destination -> distance).
    adjacency: BTreeMap<Station, BTreeMap<Station, Distance>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a sequence of triples.
    ///
    /// Fails on the first malformed triple.
    ///
    /// # Example
    ///
    /// ```
    /// use route_graph::graph::Graph;
    ///
    /// let graph = Graph::from_triples([("A", "B", 5), ("B", "C", 4)]).unwrap();
    /// assert_eq!(graph.edge_count(), 2);
    /// assert_eq!(graph.edge_distance("A", "B").map(|d| d.get()), Some(5));
    ///
    /// assert!(Graph::from_triples([("A", "B", 0)]).is_err());
    /// ```
    pub fn from_triples<I, S>(triples: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (S, S, i64)>,
        S: AsRef<str>,
    {
        let mut graph = Graph::new();
        for (origin, destination, distance) in triples {
            graph.load(origin.as_ref(), destination.as_ref(), distance)?;
        }
        debug!(
            stations = graph.station_count(),
            edges = graph.edge_count(),
            "Graph loaded"
        );
        Ok(graph)
    }

    /// Register one edge, replacing any existing edge for the same pair.
    pub fn load(
        &mut self,
        origin: &str,
        destination: &str,
        distance: i64,
    ) -> Result<(), GraphError> {
        let distance = Distance::new(distance).map_err(|source| GraphError::InvalidDistance {
            origin: origin.to_string(),
            destination: destination.to_string(),
            source,
        })?;
        let origin = Station::parse(origin)?;
        let destination = Station::parse(destination)?;

        let previous = self
            .adjacency
            .entry(origin.clone())
            .or_default()
            .insert(destination.clone(), distance);

        match previous {
            Some(old) => debug!(
                origin = %origin,
                destination = %destination,
                old = %old,
                new = %distance,
                "Replaced existing edge"
            ),
            None => trace!(
                origin = %origin,
                destination = %destination,
                distance = %distance,
                "Loaded edge"
            ),
        }

        Ok(())
    }

    /// Get all edges leaving a station.
    ///
    /// Empty if the station is unknown or has no outbound edges.
    pub fn edges_from<'a>(&'a self, station: &str) -> impl Iterator<Item = Edge> + use<'a> {
        self.adjacency
            .get_key_value(station)
            .into_iter()
            .flat_map(|(origin, targets)| {
                targets
                    .iter()
                    .map(move |(dest, dist)| Edge::new(origin.clone(), dest.clone(), *dist))
            })
    }

    /// Get the distance of the direct edge between two stations, if any.
    pub fn edge_distance(&self, origin: &str, destination: &str) -> Option<Distance> {
        self.adjacency.get(origin)?.get(destination).copied()
    }

    /// Returns the number of distinct stations with at least one outbound edge.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    /// Returns true if no edges have been loaded.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the stations that have outbound edges, in name order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.adjacency.keys()
    }
}

/// Builder for creating graphs.
///
/// Provides a fluent API for adding edges. The first invalid edge is
/// remembered and reported by [`GraphBuilder::build`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    inner: Graph,
    error: Option<GraphError>,
}

impl GraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge.
    pub fn edge(mut self, origin: &str, destination: &str, distance: i64) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.inner.load(origin, destination, distance) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Build the graph.
    pub fn build(self) -> Result<Graph, GraphError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.inner),
        }
    }
}

/// The sample network used throughout the problem set:
/// `AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7`.
pub fn sample_triples() -> [(&'static str, &'static str, i64); 9] {
    [
        ("A", "B", 5),
        ("B", "C", 4),
        ("C", "D", 8),
        ("D", "C", 8),
        ("D", "E", 6),
        ("A", "D", 5),
        ("C", "E", 2),
        ("E", "B", 3),
        ("A", "E", 7),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        Graph::from_triples(sample_triples()).unwrap()
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.station_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges_from("A").count(), 0);
        assert!(graph.edge_distance("A", "B").is_none());
    }

    #[test]
    fn sample_counts() {
        let graph = sample();
        assert_eq!(graph.station_count(), 5);
        assert_eq!(graph.edge_count(), 9);
    }

    #[test]
    fn edges_from_known_station() {
        let graph = sample();
        let edges: Vec<String> = graph.edges_from("A").map(|e| e.to_string()).collect();
        assert_eq!(edges, vec!["AB5", "AD5", "AE7"]);

        for edge in graph.edges_from("D") {
            assert_eq!(edge.origin.as_str(), "D");
        }
    }

    #[test]
    fn edges_from_unknown_station_is_empty() {
        let graph = sample();
        assert_eq!(graph.edges_from("Z").count(), 0);
    }

    #[test]
    fn edge_distance_lookup() {
        let graph = sample();
        assert_eq!(graph.edge_distance("A", "B").map(Distance::get), Some(5));
        assert_eq!(graph.edge_distance("C", "E").map(Distance::get), Some(2));

        // Known stations, no direct edge
        assert!(graph.edge_distance("E", "D").is_none());
        // Direction matters
        assert!(graph.edge_distance("B", "A").is_none());
        // Unknown station
        assert!(graph.edge_distance("Z", "A").is_none());
    }

    #[test]
    fn destination_only_stations_are_not_counted() {
        let graph = Graph::from_triples([("A", "B", 1), ("A", "C", 2)]).unwrap();
        assert_eq!(graph.station_count(), 1);
        assert_eq!(graph.stations().map(Station::as_str).collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn duplicate_pair_overwrites() {
        let graph = Graph::from_triples([("A", "B", 5), ("A", "B", 9)]).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_distance("A", "B").map(Distance::get), Some(9));
    }

    #[test]
    fn rejects_zero_distance() {
        let err = Graph::from_triples([("A", "B", 0)]).unwrap_err();
        assert!(matches!(err, GraphError::InvalidDistance { .. }));
        assert_eq!(
            err.to_string(),
            "edge AB: invalid distance 0: must be a positive integer"
        );
    }

    #[test]
    fn rejects_negative_distance() {
        let mut graph = Graph::new();
        assert!(graph.load("A", "B", -4).is_err());
        assert!(graph.is_empty());
    }

    #[test]
    fn rejects_invalid_station() {
        let mut graph = Graph::new();
        let err = graph.load("", "B", 4).unwrap_err();
        assert!(matches!(err, GraphError::InvalidStation(_)));
    }

    #[test]
    fn builder() {
        let graph = GraphBuilder::new()
            .edge("A", "B", 5)
            .edge("B", "C", 4)
            .build()
            .unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.station_count(), 2);
    }

    #[test]
    fn builder_reports_first_error() {
        let err = GraphBuilder::new()
            .edge("A", "B", 5)
            .edge("B", "C", 0)
            .edge("C D", "E", 1)
            .build()
            .unwrap_err();

        assert!(matches!(err, GraphError::InvalidDistance { .. }));
    }
}
