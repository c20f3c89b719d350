//! Tessellation search as a [`GaProblem`].

use super::builder::create_random_tessellation;
use super::fitness::tessellation_fitness;
use super::operators::{crossover, split_mutation};
use super::types::Tessellation;
use crate::ga::GaProblem;
use crate::geometry::Point;
use crate::random::permutation;
use rand::Rng;

/// Plugs the builder, scorer, and operators into the GA engine.
///
/// Individuals are [`Tessellation`]s over a fixed, read-only point set.
#[derive(Debug, Clone)]
pub struct TessellationProblem {
    points: Vec<Point>,
}

impl TessellationProblem {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl GaProblem for TessellationProblem {
    type Individual = Tessellation;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Tessellation {
        let perm = permutation(self.points.len(), rng);
        create_random_tessellation(&self.points, &perm, rng)
    }

    fn evaluate(&self, individual: &Tessellation) -> f64 {
        tessellation_fitness(&self.points, individual.polygons())
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Tessellation,
        parent2: &Tessellation,
        rng: &mut R,
    ) -> Tessellation {
        Tessellation::new(crossover(parent1.polygons(), parent2.polygons(), rng))
    }

    fn mutate<R: Rng>(&self, individual: &mut Tessellation, rng: &mut R) {
        *individual = Tessellation::new(split_mutation(individual.polygons(), rng));
    }
}
