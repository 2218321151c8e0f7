//! Route planner over a station graph.
//!
//! This module answers the route questions a caller can ask of a loaded
//! [`Graph`](crate::graph::Graph): the distance of an explicit route, every
//! route within a stop limit, the shortest route, and every route under a
//! distance limit.
//!
//! Routes within a stop limit come from a bounded depth-first search.
//! Routes under a distance limit start from that search and are extended by
//! splicing routes that meet end-to-start until nothing new fits.

mod combine;
mod config;
mod enumerate;
mod error;
mod query;


pub use combine::combine_routes;
pub use config::SearchConfig;
pub use enumerate::{StopBounds, StopLimit, enumerate_paths};
pub use error::{NoRoute, SearchError};
pub use query::RouteQuery;
