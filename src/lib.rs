//! Visibility-graph path planning around polygonal obstacles.
//!
//! All state lives in fixed-capacity tables; planning never allocates. A `Planner`
//! holds the current objective (source and destination) and a set of convex
//! obstacle polygons, and `Planner::process` returns the shortest obstacle-free
//! sequence of checkpoints from the source to the destination.

pub mod arena;
pub mod config;
pub mod error;
pub mod geometry;
pub mod planner;
pub mod route;
pub mod shortest_path;
pub mod vec2;
pub mod visibility;

#[cfg(test)]
mod testing;

pub use arena::PolygonHandle;
pub use config::Playground;
pub use error::{Error, Result};
pub use planner::Planner;
pub use route::Route;
pub use vec2::Point;

/// Cost of a ray or a path: Euclidean length in arena units, rounded so that every
/// ray costs at least 1.
pub type Weight = u32;
