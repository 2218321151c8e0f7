//! Distance-limited route splicing.
//!
//! Depth-first enumeration is bounded by stop count, so it misses long
//! routes that loop through the destination many times on short edges.
//! This module recovers them: any two routes where the first ends where the
//! second starts can be joined, and joining is repeated until no new route
//! stays under the distance limit.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::domain::{Path, Station};

use super::error::SearchError;

/// Grow `base` to every distinct route with distance below `limit` that can
/// be built by splicing members end-to-start.
///
/// Seeds at or above the limit are dropped. Newly spliced routes take part
/// in further splicing, so the result is closed: running it again on its
/// own output adds nothing. Only ordered pairs that meet end-to-start are
/// checked, and each one counts against `budget`; running out aborts with
/// [`SearchError::BudgetExhausted`].
pub fn combine_routes(
    base: Vec<Path>,
    limit: u64,
    budget: usize,
) -> Result<Vec<Path>, SearchError> {
    let seeds = base.len();
    let mut index = RouteIndex::default();

    for path in base {
        if path.distance() < limit {
            index.insert(path);
        }
    }

    let mut checks = 0usize;
    let mut next = 0;

    // Pair each route with itself and every meeting route before it, both
    // ways round. Routes appended here are reached by the outer loop later,
    // so every meeting ordered pair is eventually checked.
    while next < index.routes.len() {
        let route = &index.routes[next];
        let mut pairs: Vec<(usize, usize)> = index
            .starting_at(route.destination(), next)
            .map(|right| (next, right))
            .collect();
        pairs.extend(
            index
                .ending_at(route.origin(), next)
                .filter(|&left| left != next)
                .map(|left| (left, next)),
        );

        for (left, right) in pairs {
            checks += 1;
            if checks > budget {
                return Err(SearchError::BudgetExhausted { budget });
            }

            if let Some(combo) = try_splice(&index.routes[left], &index.routes[right], limit)? {
                trace!(route = %combo, distance = combo.distance(), "Spliced route");
                index.insert(combo);
            }
        }
        next += 1;
    }

    debug!(
        seeds,
        routes = index.routes.len(),
        checks,
        limit,
        "Route splicing complete"
    );

    Ok(index.routes)
}

/// Distinct routes in insertion order, indexed by their endpoints.
#[derive(Default)]
struct RouteIndex {
    routes: Vec<Path>,
    seen: HashSet<Path>,
    by_origin: HashMap<Station, Vec<usize>>,
    by_destination: HashMap<Station, Vec<usize>>,
}

impl RouteIndex {
    /// Add `path` unless an identical route is already present.
    fn insert(&mut self, path: Path) {
        if !self.seen.insert(path.clone()) {
            return;
        }
        let at = self.routes.len();
        self.by_origin
            .entry(path.origin().clone())
            .or_default()
            .push(at);
        self.by_destination
            .entry(path.destination().clone())
            .or_default()
            .push(at);
        self.routes.push(path);
    }

    /// Positions up to `upto` of routes leaving from `station`.
    fn starting_at(&self, station: &Station, upto: usize) -> impl Iterator<Item = usize> + '_ {
        Self::upto(self.by_origin.get(station).map(Vec::as_slice), upto)
    }

    /// Positions up to `upto` of routes arriving at `station`.
    fn ending_at(&self, station: &Station, upto: usize) -> impl Iterator<Item = usize> + '_ {
        Self::upto(self.by_destination.get(station).map(Vec::as_slice), upto)
    }

    fn upto(positions: Option<&[usize]>, upto: usize) -> impl Iterator<Item = usize> + '_ {
        positions
            .into_iter()
            .flatten()
            .copied()
            .take_while(move |&at| at <= upto)
    }
}

/// Splice `left` and `right` if they meet and stay under `limit`.
fn try_splice(left: &Path, right: &Path, limit: u64) -> Result<Option<Path>, SearchError> {
    if left.destination() != right.origin() {
        return Ok(None);
    }
    if left.distance() + right.distance() >= limit {
        return Ok(None);
    }
    Ok(Some(left.splice(right)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Distance, Edge, Station};

    fn edge(from: &str, to: &str, dist: i64) -> Edge {
        Edge::new(
            Station::parse(from).unwrap(),
            Station::parse(to).unwrap(),
            Distance::new(dist).unwrap(),
        )
    }

    /// Build a path from a station string like "CDC" using the sample weights.
    fn path(stations: &str) -> Path {
        let weight = |from: char, to: char| match (from, to) {
            ('A', 'B') => 5,
            ('B', 'C') => 4,
            ('C', 'D') => 8,
            ('D', 'C') => 8,
            ('D', 'E') => 6,
            ('A', 'D') => 5,
            ('C', 'E') => 2,
            ('E', 'B') => 3,
            ('A', 'E') => 7,
            _ => panic!("no sample edge {from}{to}"),
        };
        let chars: Vec<char> = stations.chars().collect();
        let edges = chars
            .windows(2)
            .map(|w| edge(&w[0].to_string(), &w[1].to_string(), weight(w[0], w[1])))
            .collect();
        Path::from_edges(edges).unwrap()
    }

    fn names(paths: &[Path]) -> Vec<String> {
        let mut names: Vec<String> = paths
            .iter()
            .map(|p| p.to_string().replace('-', ""))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn splices_simple_cycles_under_limit() {
        let base = vec![path("CDC"), path("CEBC"), path("CDEBC")];
        let routes = combine_routes(base, 30, 10_000).unwrap();

        assert_eq!(
            names(&routes),
            vec!["CDC", "CDCEBC", "CDEBC", "CEBC", "CEBCDC", "CEBCEBC", "CEBCEBCEBC"]
        );
    }

    #[test]
    fn drops_seeds_at_or_over_limit() {
        let base = vec![path("CDC"), path("CDCDC")];
        let routes = combine_routes(base, 30, 10_000).unwrap();

        // CDCDC is 32; CDC + CDC is too
        assert_eq!(names(&routes), vec!["CDC"]);
    }

    #[test]
    fn limit_is_exclusive() {
        // CEBC (9) + CDEBC (21) = 30, not under 30
        let base = vec![path("CEBC"), path("CDEBC")];
        let routes = combine_routes(base, 30, 10_000).unwrap();

        assert!(!names(&routes).contains(&"CEBCDEBC".to_string()));
        assert!(names(&routes).contains(&"CEBCEBC".to_string()));
    }

    #[test]
    fn deduplicates_seeds() {
        let base = vec![path("CDC"), path("CDC")];
        let routes = combine_routes(base, 17, 10_000).unwrap();

        assert_eq!(names(&routes), vec!["CDC"]);
    }

    #[test]
    fn non_meeting_routes_are_not_spliced() {
        // Both run A -> C, so neither ends where the other starts
        let base = vec![path("ABC"), path("ADC")];
        let routes = combine_routes(base, 100, 10_000).unwrap();

        assert_eq!(names(&routes), vec!["ABC", "ADC"]);
    }

    #[test]
    fn non_meeting_routes_use_no_budget() {
        let base = vec![path("ABC"), path("ADC"), path("AEBC")];
        let routes = combine_routes(base, 100, 0).unwrap();

        assert_eq!(routes.len(), 3);
    }

    #[test]
    fn empty_base_is_empty() {
        assert!(combine_routes(vec![], 30, 10).unwrap().is_empty());
    }

    #[test]
    fn budget_exhaustion_is_reported() {
        let base = vec![path("CDC"), path("CEBC"), path("CDEBC")];
        let err = combine_routes(base, 30, 3).unwrap_err();

        assert_eq!(err, SearchError::BudgetExhausted { budget: 3 });
    }

    #[test]
    fn result_is_a_fixed_point() {
        let base = vec![path("CDC"), path("CEBC"), path("CDEBC")];
        let first = combine_routes(base, 40, 100_000).unwrap();
        let second = combine_routes(first.clone(), 40, 100_000).unwrap();

        assert_eq!(names(&first), names(&second));
    }
}
