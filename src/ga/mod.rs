//! Genetic Algorithm engine.
//!
//! A generic, domain-agnostic GA built on trait-based abstractions.
//! Problems plug in by implementing [`GaProblem`], which specifies how to
//! create, evaluate, crossover, and mutate individuals.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with associated fitness type
//! - [`GaProblem`]: Problem definition: initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, rates)
//! - [`Selection`]: Parent selection strategy
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final population's best individual with statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub(crate) use runner::{evaluate_population, find_best};
pub use runner::{GaResult, GaRunner};
pub use selection::{inverse_share_weights, ParentSampler, Selection, INVERSE_SHARE_EPSILON};
pub use types::{Fitness, GaProblem, Individual};
