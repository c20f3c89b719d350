//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents. A
//! [`ParentSampler`] is built once per generation from the scored
//! population and then drawn from repeatedly, with replacement.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::{Fitness, Individual};
use rand::Rng;

/// Added to the fitness total in [`Selection::InverseShare`] so a population
/// of zero scores still yields finite weights.
pub const INVERSE_SHARE_EPSILON: f64 = 0.001;

/// Selection strategy for choosing parents.
///
/// All strategies assume **minimization** (lower fitness = better).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Inverted fitness-share selection.
    ///
    /// Weight of individual `i` is `1 - f_i / (Σf + ε)`, normalized to sum
    /// to 1. Lower scores get more weight, but the scheme is neither rank-
    /// nor strictly proportional: when one score dominates the total, all
    /// the others end up with nearly equal weight.
    ///
    /// # Complexity
    /// O(n) per generation, O(log n) per draw
    #[default]
    InverseShare,

    /// Tournament selection: pick `k` individuals uniformly, keep the best.
    ///
    /// # Complexity
    /// O(k) per draw
    Tournament(usize),
}

impl Selection {
    /// Prepares a sampler over a scored population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn sampler<I: Individual>(&self, population: &[I]) -> ParentSampler {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        let fitnesses: Vec<f64> = population
            .iter()
            .map(|ind| ind.fitness().to_f64())
            .collect();

        match self {
            Selection::InverseShare => {
                ParentSampler::Weighted(cumulative(&inverse_share_weights(&fitnesses)))
            }
            Selection::Tournament(k) => ParentSampler::Tournament {
                k: (*k).max(1),
                fitnesses,
            },
        }
    }
}

/// Selection probabilities for [`Selection::InverseShare`].
///
/// Returns normalized weights summing to 1. Falls back to uniform weights
/// if the scores are not finite.
pub fn inverse_share_weights(fitnesses: &[f64]) -> Vec<f64> {
    let n = fitnesses.len();
    let total: f64 = fitnesses.iter().sum();

    let raw: Vec<f64> = fitnesses
        .iter()
        .map(|&f| 1.0 - f / (total + INVERSE_SHARE_EPSILON))
        .collect();
    let sum: f64 = raw.iter().sum();

    if !sum.is_finite() || sum <= 0.0 || raw.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return vec![1.0 / n as f64; n];
    }
    raw.into_iter().map(|w| w / sum).collect()
}

fn cumulative(weights: &[f64]) -> Vec<f64> {
    weights
        .iter()
        .scan(0.0, |acc, &w| {
            *acc += w;
            Some(*acc)
        })
        .collect()
}

/// Per-generation parent sampler produced by [`Selection::sampler`].
#[derive(Debug, Clone)]
pub enum ParentSampler {
    /// Cumulative selection weights.
    Weighted(Vec<f64>),
    /// Tournament size and the scores it compares.
    Tournament { k: usize, fitnesses: Vec<f64> },
}

impl ParentSampler {
    /// Draws one parent index.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match self {
            ParentSampler::Weighted(cdf) => {
                let n = cdf.len();
                let total = cdf[n - 1];
                let threshold = rng.random_range(0.0..1.0) * total;
                // first index whose cumulative weight exceeds the threshold
                cdf.partition_point(|&c| c <= threshold).min(n - 1)
            }
            ParentSampler::Tournament { k, fitnesses } => {
                let n = fitnesses.len();
                let mut best_idx = rng.random_range(0..n);
                for _ in 1..*k {
                    let idx = rng.random_range(0..n);
                    if fitnesses[idx] < fitnesses[best_idx] {
                        best_idx = idx;
                    }
                }
                best_idx
            }
        }
    }

    /// Draws two parent indices independently (they may coincide).
    pub fn sample_pair<R: Rng>(&self, rng: &mut R) -> (usize, usize) {
        let first = self.sample(rng);
        let second = self.sample(rng);
        (first, second)
    }
}
