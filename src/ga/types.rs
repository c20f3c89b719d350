//! Core trait definitions for the GA engine.
//!
//! [`Individual`] and [`GaProblem`] form the contract between the generic
//! evolutionary loop and a concrete problem such as
//! [`TessellationProblem`](crate::tessellation::TessellationProblem).

use rand::Rng;

/// Marker trait for fitness values.
///
/// Lower fitness is considered better (minimization).
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used for individuals that have not been scored yet.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for selection weights and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution carrying its own fitness.
///
/// The runner calls [`GaProblem::evaluate`] and stores the score via
/// [`set_fitness`](Individual::set_fitness) before every selection round.
pub trait Individual: Clone + Send + Sync {
    type Fitness: Fitness;

    fn fitness(&self) -> Self::Fitness;

    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimization problem.
///
/// 1. **Initialization**: how to create a random individual
/// 2. **Evaluation**: how to score one
/// 3. **Crossover**: how to combine two parents into one child
/// 4. **Mutation**: how to perturb a child
///
/// The runner decides *whether* to mutate (by the configured rate);
/// [`mutate`](GaProblem::mutate) only decides *how*.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because evaluation may run on a rayon
/// pool when the `parallel` feature is enabled. Every other call happens on
/// the thread that owns the RNG.
pub trait GaProblem: Send + Sync {
    type Individual: Individual;

    /// Creates a random, unevaluated individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Scores an individual. Must be pure: the same input always yields the
    /// same fitness, independent of evaluation order.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Produces one child from an ordered pair of parents.
    ///
    /// The runner calls this once per parent order, so an asymmetric
    /// operator yields two distinct children per pair.
    ///
    /// The default implementation clones `parent1`.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Perturbs an individual in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}
}
