//! Convex tessellation of 2D point sets by genetic search.
//!
//! Partitions a finite point set into disjoint convex polygons and evolves
//! the partition toward compact shapes:
//!
//! - **Geometry** ([`geometry`]): convexity predicate, shoelace area,
//!   perimeter, isoperimetric quotient.
//! - **Tessellation** ([`tessellation`]): greedy convex grouping of a random
//!   permutation, compactness fitness, prefix crossover, split mutation.
//! - **GA engine** ([`ga`]): generic population loop with pluggable
//!   selection; knows nothing about polygons.
//! - **Driver** ([`Polygonator`]): owns points, population, and RNG; runs a
//!   fixed number of generations and emits the best candidate.
//!
//! # Example
//!
//! ```
//! use u_polygonate::{GaConfig, Polygonator};
//!
//! let points = vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (1.0, 3.0), (3.0, 1.0)];
//! let config = GaConfig::default().with_generations(25).with_seed(7);
//! let mut optimizer = Polygonator::new(points, config)?;
//!
//! let polygons = optimizer.optimize();
//! let shapes = optimizer.resolve(&polygons);
//! assert_eq!(polygons.len(), shapes.len());
//! # Ok::<(), u_polygonate::PolygonateError>(())
//! ```
//!
//! # Guarantees
//!
//! The result is a heuristic improvement, not an optimum. Points the greedy
//! grouping could not place are dropped, so callers must not assume full
//! coverage. Runs are reproducible only with [`GaConfig::seed`] set.
//!
//! # Features
//!
//! - `parallel`: evaluate fitness on a rayon pool
//! - `serde`: `Serialize`/`Deserialize` for points, polygons, config, results

mod error;
pub mod ga;
pub mod geometry;
mod polygonator;
pub mod random;
pub mod tessellation;

pub use error::{PolygonateError, Result};
pub use ga::{GaConfig, Selection};
pub use geometry::Point;
pub use polygonator::{emit, PolygonateResult, Polygonator, MIN_POINTS};
