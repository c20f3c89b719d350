//! Convex tessellations of a point set.
//!
//! # Key Types
//!
//! - [`Polygon`]: ordered loop of point indices
//! - [`Tessellation`]: ordered list of polygons, the GA individual
//! - [`TessellationProblem`]: the [`GaProblem`](crate::ga::GaProblem) wiring
//!
//! # Submodules
//!
//! - [`builder`]: greedy convex grouping of a permutation
//! - [`fitness`]: isoperimetric compactness score
//! - [`operators`]: prefix crossover and split mutation

pub mod builder;
pub mod fitness;
pub mod operators;
mod problem;
mod types;

pub use builder::create_random_tessellation;
pub use fitness::tessellation_fitness;
pub use problem::TessellationProblem;
pub use types::{vertices_of, Polygon, Tessellation};
