//! Path types.
//!
//! A `Path` is a route through the graph: one or more edges, each starting
//! where the previous one ended. Paths are values; extending one builds a
//! new path and leaves the original untouched.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Edge, PathError, Station};

/// A connected, non-empty sequence of edges.
///
/// # Invariants
///
/// - At least one edge
/// - Consecutive edges connect (destination of one = origin of next)
/// - `distance` is the sum of the edge weights
///
/// Equality and hashing consider the edge sequence only, so two paths are
/// the same route exactly when they traverse the same edges in the same
/// order.
#[derive(Debug, Clone)]
pub struct Path {
    edges: Vec<Edge>,
    distance: u64,
}

impl Path {
    /// Builds a one-edge path.
    pub fn from_edge(edge: Edge) -> Self {
        let distance = edge.distance.get();
        Self {
            edges: vec![edge],
            distance,
        }
    }

    /// Builds a path from a sequence of edges.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - The sequence is empty
    /// - Consecutive edges don't connect
    ///
    /// # Examples
    ///
    /// ```
    /// use route_graph::domain::{Distance, Edge, Path, Station};
    ///
    /// let a = Station::parse("A").unwrap();
    /// let b = Station::parse("B").unwrap();
    /// let c = Station::parse("C").unwrap();
    ///
    /// let path = Path::from_edges(vec![
    ///     Edge::new(a.clone(), b.clone(), Distance::new(5).unwrap()),
    ///     Edge::new(b, c, Distance::new(4).unwrap()),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(path.distance(), 9);
    /// assert_eq!(path.stop_count(), 2);
    /// assert_eq!(path.to_string(), "A-B-C");
    /// ```
    pub fn from_edges(edges: Vec<Edge>) -> Result<Self, PathError> {
        let mut iter = edges.into_iter();
        let first = iter.next().ok_or(PathError::EmptyPath)?;

        let mut path = Path::from_edge(first);
        for edge in iter {
            path.push(edge)?;
        }
        Ok(path)
    }

    /// Returns a new path with `next` appended.
    ///
    /// `next` must leave from this path's destination.
    pub fn fork(&self, next: &Edge) -> Result<Self, PathError> {
        let mut forked = self.clone();
        forked.push(next.clone())?;
        Ok(forked)
    }

    /// Returns a new path running along this path and then `other`.
    ///
    /// `other` must start at this path's destination.
    pub fn splice(&self, other: &Path) -> Result<Self, PathError> {
        self.check_adjacent(other.origin())?;

        let mut edges = Vec::with_capacity(self.edges.len() + other.edges.len());
        edges.extend_from_slice(&self.edges);
        edges.extend_from_slice(&other.edges);

        Ok(Self {
            edges,
            distance: self.distance + other.distance,
        })
    }

    /// Returns the station the path leaves from.
    pub fn origin(&self) -> &Station {
        &self.first_edge().origin
    }

    /// Returns the station the path arrives at.
    pub fn destination(&self) -> &Station {
        &self.last_edge().destination
    }

    /// Returns the number of stops (edges traversed).
    pub fn stop_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the total distance of the path.
    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Returns the edges in travel order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns every station visited, origin first.
    pub fn stations(&self) -> Vec<&Station> {
        std::iter::once(self.origin())
            .chain(self.edges.iter().map(|e| &e.destination))
            .collect()
    }

    // Every constructor starts from one edge and only ever appends
    fn first_edge(&self) -> &Edge {
        self.edges.first().expect("path has at least one edge")
    }

    fn last_edge(&self) -> &Edge {
        self.edges.last().expect("path has at least one edge")
    }

    fn check_adjacent(&self, next: &Station) -> Result<(), PathError> {
        if self.destination() != next {
            return Err(PathError::NotAdjacent {
                at: self.destination().clone(),
                next: next.clone(),
            });
        }
        Ok(())
    }

    fn push(&mut self, edge: Edge) -> Result<(), PathError> {
        self.check_adjacent(&edge.origin)?;
        self.distance += edge.distance.get();
        self.edges.push(edge);
        Ok(())
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges
    }
}

impl Eq for Path {}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.edges.hash(state);
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, station) in self.stations().into_iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{station}")?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Distance;
    use proptest::prelude::*;

    /// Strategy for a connected edge chain over single-letter stations.
    fn chain_strategy() -> impl Strategy<Value = Vec<Edge>> {
        (
            proptest::collection::vec(proptest::char::range('A', 'F'), 2..10),
            proptest::collection::vec(1i64..100, 9),
        )
            .prop_map(|(names, dists)| {
                names
                    .windows(2)
                    .zip(dists)
                    .map(|(pair, d)| {
                        Edge::new(
                            Station::parse(&pair[0].to_string()).unwrap(),
                            Station::parse(&pair[1].to_string()).unwrap(),
                            Distance::new(d).unwrap(),
                        )
                    })
                    .collect()
            })
    }

    proptest! {
        /// Forking edge by edge sums distances and counts stops
        #[test]
        fn fork_chain_accumulates(edges in chain_strategy()) {
            let mut path = Path::from_edge(edges[0].clone());
            for e in &edges[1..] {
                path = path.fork(e).unwrap();
            }

            let expected: u64 = edges.iter().map(|e| e.distance.get()).sum();
            prop_assert_eq!(path.distance(), expected);
            prop_assert_eq!(path.stop_count(), edges.len());
            prop_assert_eq!(path.origin(), &edges[0].origin);
            prop_assert_eq!(path.destination(), &edges[edges.len() - 1].destination);
        }

        /// Splitting a chain anywhere and splicing it back gives the same path
        #[test]
        fn splice_of_split_is_identity(edges in chain_strategy(), split in any::<prop::sample::Index>()) {
            prop_assume!(edges.len() >= 2);
            let at = 1 + split.index(edges.len() - 1);

            let whole = Path::from_edges(edges.clone()).unwrap();
            let left = Path::from_edges(edges[..at].to_vec()).unwrap();
            let right = Path::from_edges(edges[at..].to_vec()).unwrap();

            let spliced = left.splice(&right).unwrap();
            prop_assert_eq!(spliced.distance(), whole.distance());
            prop_assert_eq!(spliced, whole);
        }
    }
}
