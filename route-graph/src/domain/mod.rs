//! Domain types for the route graph.
//!
//! This module contains the value types the search works with. All types
//! enforce their invariants at construction time, so code that receives
//! these types can trust their validity.

mod edge;
mod error;
mod path;
mod station;

pub use edge::{Distance, Edge, InvalidDistance};
pub use error::PathError;
pub use path::Path;
pub use station::{InvalidStation, Station};
