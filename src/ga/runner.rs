//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.
//!
//! Generations are replaced wholesale. There is no elitism and no early
//! termination: the loop runs exactly [`GaConfig::generations`] times.

use super::config::GaConfig;
use super::types::{Fitness, GaProblem, Individual};
use crate::random::rng_from_seed;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual of the final population.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness of the scored population at the start of each
    /// generation, followed by the final scoring.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config);
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA from a fresh population.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`] first
    /// to get a descriptive error).
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> GaResult<P::Individual> {
        config.validate().expect("invalid GaConfig");

        let mut rng = rng_from_seed(config.seed);
        let mut population = Self::initialize(problem, config, &mut rng);
        let fitness_history = Self::evolve(problem, config, &mut population, &mut rng);
        let best = find_best(&population).clone();

        GaResult {
            best_fitness: best.fitness(),
            best,
            generations: config.generations,
            fitness_history,
        }
    }

    /// Creates `config.population_size` unevaluated individuals.
    pub fn initialize<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Vec<P::Individual> {
        (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect()
    }

    /// Runs `config.generations` generations over `population`, then scores
    /// the final population.
    ///
    /// Returns the best fitness seen at each scoring (one per generation
    /// plus the final one). On return every individual in `population`
    /// carries an up-to-date fitness.
    pub fn evolve<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        population: &mut Vec<P::Individual>,
        rng: &mut R,
    ) -> Vec<f64> {
        let mut fitness_history = Vec::with_capacity(config.generations + 1);

        for gen in 0..config.generations {
            evaluate_population(problem, population, config.parallel);
            let best = find_best(population).fitness().to_f64();
            fitness_history.push(best);
            log::debug!("generation {gen}: best fitness {best:.6}");

            *population = Self::next_generation(problem, config, population, rng);
        }

        evaluate_population(problem, population, config.parallel);
        fitness_history.push(find_best(population).fitness().to_f64());
        fitness_history
    }

    /// Breeds one replacement generation from a scored population.
    ///
    /// Draws `population_size / 2` parent pairs. Each pair yields two
    /// children, one per parent order, each mutated with probability
    /// `mutation_rate`.
    pub fn next_generation<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        population: &[P::Individual],
        rng: &mut R,
    ) -> Vec<P::Individual> {
        let sampler = config.selection.sampler(population);
        let pairs = config.population_size / 2;
        let mut next_gen = Vec::with_capacity(pairs * 2);

        for _ in 0..pairs {
            let (p1, p2) = sampler.sample_pair(rng);
            for (a, b) in [(p1, p2), (p2, p1)] {
                let mut child = problem.crossover(&population[a], &population[b], rng);
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    problem.mutate(&mut child, rng);
                }
                next_gen.push(child);
            }
        }

        next_gen
    }
}

/// Evaluate all individuals in the population.
pub(crate) fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            population.par_iter_mut().for_each(|ind| {
                let f = problem.evaluate(ind);
                ind.set_fitness(f);
            });
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Find the individual with the best (lowest) fitness.
///
/// Ties go to the earliest individual.
///
/// # Panics
/// Panics if `population` is empty.
pub(crate) fn find_best<I: Individual>(population: &[I]) -> &I {
    population
        .iter()
        .reduce(|best, ind| {
            if ind.fitness() < best.fitness() {
                ind
            } else {
                best
            }
        })
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
