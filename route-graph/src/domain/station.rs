//! Station name types.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name {name:?}: {reason}")]
pub struct InvalidStation {
    name: String,
    reason: &'static str,
}

/// A station name token, e.g. `"A"` or `"KGX"`.
///
/// Names are non-empty and contain no whitespace. The name is the station's
/// whole identity; two stations are equal exactly when their names are.
/// Cloning is cheap, since paths copy station names on every fork.
///
/// # Examples
///
/// ```
/// use route_graph::domain::Station;
///
/// let a = Station::parse("A").unwrap();
/// assert_eq!(a.as_str(), "A");
///
/// assert!(Station::parse("").is_err());
/// assert!(Station::parse("A B").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct Station(Arc<str>);

impl Station {
    /// Parse a station name.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        if s.is_empty() {
            return Err(InvalidStation {
                name: s.to_string(),
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidStation {
                name: s.to_string(),
                reason: "must not contain whitespace",
            });
        }

        Ok(Station(Arc::from(s)))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by `Station` be queried with a plain `&str`.
impl Borrow<str> for Station {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<Station> for String {
    fn from(station: Station) -> Self {
        station.0.to_string()
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.as_str())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Za-z0-9_-]{1,8}") {
            let station = Station::parse(&s).unwrap();
            prop_assert_eq!(station.as_str(), s.as_str());
        }

        /// Names with embedded whitespace are always rejected
        #[test]
        fn whitespace_rejected(left in "[A-Z]{0,3}", right in "[A-Z]{0,3}", ws in "[ \t\n]") {
            let name = format!("{left}{ws}{right}");
            prop_assert!(Station::parse(&name).is_err());
        }
    }
}
