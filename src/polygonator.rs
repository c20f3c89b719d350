//! Optimizer driver.
//!
//! [`Polygonator`] owns the point set, the population, and the RNG. It
//! builds the initial population at construction, evolves it for a fixed
//! number of generations, and emits the best final candidate as index sets.
//!
//! # Usage
//!
//! ```
//! use u_polygonate::{GaConfig, Polygonator};
//!
//! let points = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 2.0)];
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_generations(10)
//!     .with_seed(42);
//!
//! let mut optimizer = Polygonator::new(points, config).unwrap();
//! for polygon in optimizer.optimize() {
//!     assert!(polygon.len() >= 3);
//!     assert!(polygon.iter().all(|&i| i < 5));
//! }
//! ```

use crate::error::{PolygonateError, Result};
use crate::ga::{evaluate_population, find_best, GaConfig, GaRunner, Individual};
use crate::geometry::Point;
use crate::random::rng_from_seed;
use crate::tessellation::{Polygon, Tessellation, TessellationProblem};
use rand::rngs::StdRng;

/// Minimum number of input points.
pub const MIN_POINTS: usize = 3;

/// Outcome of [`Polygonator::optimize_detailed`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolygonateResult {
    /// Emitted polygons: sorted, duplicate-free index sets of size ≥ 3.
    pub polygons: Vec<Vec<usize>>,

    /// Fitness of the chosen candidate before emission.
    pub best_fitness: f64,

    /// Generations run by this call.
    pub generations: usize,

    /// Best score at the start of each generation, plus the final scoring.
    pub fitness_history: Vec<f64>,
}

/// Genetic optimizer for convex tessellations of a point set.
pub struct Polygonator {
    problem: TessellationProblem,
    config: GaConfig,
    population: Vec<Tessellation>,
    rng: StdRng,
}

impl Polygonator {
    /// Validates the input and builds the initial population.
    ///
    /// # Errors
    ///
    /// - [`PolygonateError::TooFewPoints`] for fewer than three points
    /// - [`PolygonateError::NonFinitePoint`] for NaN or infinite coordinates
    /// - [`PolygonateError::InvalidConfig`] if `config` fails validation
    ///
    /// Nothing is allocated for the population when an error is returned.
    pub fn new<I>(points: I, config: GaConfig) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        let points: Vec<Point> = points.into_iter().map(Into::into).collect();
        if points.len() < MIN_POINTS {
            return Err(PolygonateError::TooFewPoints {
                count: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(PolygonateError::NonFinitePoint { index });
        }
        config.validate().map_err(PolygonateError::InvalidConfig)?;

        let problem = TessellationProblem::new(points);
        let mut rng = rng_from_seed(config.seed);
        let population = GaRunner::initialize(&problem, &config, &mut rng);

        log::info!(
            "initialized {} tessellations over {} points",
            population.len(),
            problem.points().len()
        );

        Ok(Self {
            problem,
            config,
            population,
            rng,
        })
    }

    /// Same as [`new`](Self::new) with [`GaConfig::default`].
    pub fn with_defaults<I>(points: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        Self::new(points, GaConfig::default())
    }

    /// Runs the configured number of generations and returns the best
    /// candidate's polygons as index sets.
    ///
    /// Each set is sorted and duplicate-free with at least three indices,
    /// all below `points().len()`. The sets need not cover every point, and
    /// a set may no longer be convex once duplicates are removed.
    ///
    /// Calling this again continues from the current population.
    pub fn optimize(&mut self) -> Vec<Vec<usize>> {
        self.optimize_detailed().polygons
    }

    /// Like [`optimize`](Self::optimize), with the score and history.
    pub fn optimize_detailed(&mut self) -> PolygonateResult {
        let fitness_history = GaRunner::evolve(
            &self.problem,
            &self.config,
            &mut self.population,
            &mut self.rng,
        );

        let best = find_best(&self.population);
        let polygons = emit(best.polygons());

        log::info!(
            "best tessellation after {} generations: fitness {:.6}, {} polygons",
            self.config.generations,
            best.fitness(),
            polygons.len()
        );

        PolygonateResult {
            polygons,
            best_fitness: best.fitness(),
            generations: self.config.generations,
            fitness_history,
        }
    }

    /// Scores the current population without evolving it.
    pub fn evaluate(&mut self) {
        evaluate_population(&self.problem, &mut self.population, self.config.parallel);
    }

    pub fn points(&self) -> &[Point] {
        self.problem.points()
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Current candidates. Scores are stale until the next evaluation.
    pub fn population(&self) -> &[Tessellation] {
        &self.population
    }

    /// Maps index sets back to coordinates.
    ///
    /// # Panics
    /// Panics if an index is out of range.
    pub fn resolve(&self, polygons: &[Vec<usize>]) -> Vec<Vec<Point>> {
        polygons
            .iter()
            .map(|indices| indices.iter().map(|&i| self.points()[i]).collect())
            .collect()
    }
}

/// Collapses each polygon to its sorted distinct indices and drops those
/// left with fewer than three.
pub fn emit(polygons: &[Polygon]) -> Vec<Vec<usize>> {
    polygons
        .iter()
        .map(Polygon::unique_indices)
        .filter(|set| set.len() >= MIN_POINTS)
        .collect()
}
