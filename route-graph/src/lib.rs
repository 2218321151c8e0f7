//! Route graph query engine.
//!
//! Answers questions about a small directed, weighted rail network: "how far
//! is this exact route?", "which routes connect these stations within so
//! many stops?", "what is the shortest route?" and "how many routes are
//! shorter than this?".

pub mod domain;
pub mod graph;
pub mod planner;
pub mod report;
