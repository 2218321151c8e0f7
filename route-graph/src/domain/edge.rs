//! Edge and distance types.

use std::fmt;

use super::Station;

/// Error returned when a distance is not a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid distance {value}: must be a positive integer")]
pub struct InvalidDistance {
    value: i64,
}

/// A strictly positive edge weight.
///
/// Zero and negative weights are rejected at construction. Splicing two
/// routes therefore always yields a strictly longer route, which keeps the
/// distance-limited search finite.
///
/// # Examples
///
/// ```
/// use route_graph::domain::Distance;
///
/// assert_eq!(Distance::new(5).unwrap().get(), 5);
/// assert!(Distance::new(0).is_err());
/// assert!(Distance::new(-3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Distance(u32);

impl Distance {
    /// Create a distance, rejecting values that are not positive or do not
    /// fit the weight range.
    pub fn new(value: i64) -> Result<Self, InvalidDistance> {
        match u32::try_from(value) {
            Ok(v) if v > 0 => Ok(Distance(v)),
            _ => Err(InvalidDistance { value }),
        }
    }

    /// Returns the weight as an integer.
    pub fn get(self) -> u64 {
        u64::from(self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed, weighted connection between two stations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Station the edge leaves from
    pub origin: Station,
    /// Station the edge arrives at
    pub destination: Station,
    /// Weight of the edge
    pub distance: Distance,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(origin: Station, destination: Station, distance: Distance) -> Self {
        Self {
            origin,
            destination,
            distance,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.origin, self.destination, self.distance)
    }
}
