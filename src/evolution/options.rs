//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds every parameter of a run. It is built once,
//! validated when the run starts, and never changes while the loop executes.
//!
//! ## Example
//!
//! ```rust
//! use tourga::evolution::options::{EvolutionOptions, LogLevel, ReplacementPolicy};
//! use tourga::mutation::MutationOperator;
//!
//! // Defaults: population 100, 1000 generations, mutation rate 0.01,
//! // tournaments of 5 and a single elite
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 100);
//!
//! let custom_options = EvolutionOptions::builder()
//!     .population_size(300)
//!     .num_generations(400)
//!     .mutation_rate(0.2)
//!     .tournament_size(20)
//!     .weakness_threshold(900.0)
//!     .fixed_depot(true)
//!     .mutation(MutationOperator::scramble())
//!     .replacement(ReplacementPolicy::Append { num_offspring: 60 })
//!     .log_level(LogLevel::Minimal)
//!     .build();
//!
//! assert!(custom_options.validate().is_ok());
//! assert_eq!(custom_options.offspring_count(), 60);
//! ```
//!
//! ## Enums
//!
//! ### `LogLevel`
//!
//! - `Verbose`: emits a progress event every generation.
//! - `Minimal`: emits a progress event every 100 generations, on the last one, and a summary.
//! - `None`: emits no progress events.
//!
//! ### `ReplacementPolicy`
//!
//! - `Generational`: offspring replace the whole population, elites are carried over.
//! - `Append { num_offspring }`: offspring join the population, which is then culled
//!   back to its target size by cost.

use crate::error::{GeneticError, Result};
use crate::mutation::MutationOperator;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

/// How offspring are merged into the population each generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplacementPolicy {
    /// Breed `population_size` offspring that replace the population; the
    /// `elite_count` best known genomes overwrite the worst offspring.
    #[default]
    Generational,
    /// Append `num_offspring` offspring, then keep the `population_size`
    /// cheapest genomes.
    Append { num_offspring: usize },
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    num_generations: usize,
    mutation_rate: f64,
    tournament_size: usize,
    elite_count: usize,
    /// Genomes costing more than this are pruned; `None` never prunes.
    weakness_threshold: Option<f64>,
    /// Location `0` is the implicit start and end of every tour.
    fixed_depot: bool,
    replacement: ReplacementPolicy,
    mutation: MutationOperator,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Number of elites, never more than the population size.
    pub fn get_elite_count(&self) -> usize {
        self.elite_count.min(self.population_size)
    }

    /// The weakness threshold, `f64::INFINITY` when pruning is disabled.
    pub fn get_weakness_threshold(&self) -> f64 {
        self.weakness_threshold.unwrap_or(f64::INFINITY)
    }

    pub fn has_fixed_depot(&self) -> bool {
        self.fixed_depot
    }

    pub fn get_replacement(&self) -> ReplacementPolicy {
        self.replacement
    }

    pub fn get_mutation(&self) -> &MutationOperator {
        &self.mutation
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Number of offspring bred each generation.
    pub fn offspring_count(&self) -> usize {
        match self.replacement {
            ReplacementPolicy::Generational => self.population_size,
            ReplacementPolicy::Append { num_offspring } => num_offspring,
        }
    }

    /// Checks every parameter before a run starts.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidConfig`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::InvalidConfig(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.num_generations == 0 {
            return Err(GeneticError::InvalidConfig(
                "Number of generations cannot be zero".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::InvalidConfig(format!(
                "Mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }

        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(GeneticError::InvalidConfig(format!(
                "Tournament size must be within [1, {}], got {}",
                self.population_size, self.tournament_size
            )));
        }

        if self.weakness_threshold.is_some_and(f64::is_nan) {
            return Err(GeneticError::InvalidConfig(
                "Weakness threshold cannot be NaN".to_string(),
            ));
        }

        if self.replacement == (ReplacementPolicy::Append { num_offspring: 0 }) {
            return Err(GeneticError::InvalidConfig(
                "Number of offspring cannot be zero".to_string(),
            ));
        }

        self.mutation.validate()
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 100,
            num_generations: 1000,
            mutation_rate: 0.01,
            tournament_size: 5,
            elite_count: 1,
            weakness_threshold: None,
            fixed_depot: false,
            replacement: ReplacementPolicy::Generational,
            mutation: MutationOperator::Swap,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields take the values of [`EvolutionOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    num_generations: Option<usize>,
    mutation_rate: Option<f64>,
    tournament_size: Option<usize>,
    elite_count: Option<usize>,
    weakness_threshold: Option<f64>,
    fixed_depot: Option<bool>,
    replacement: Option<ReplacementPolicy>,
    mutation: Option<MutationOperator>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn elite_count(mut self, value: usize) -> Self {
        self.elite_count = Some(value);
        self
    }

    pub fn weakness_threshold(mut self, value: f64) -> Self {
        self.weakness_threshold = Some(value);
        self
    }

    pub fn fixed_depot(mut self, value: bool) -> Self {
        self.fixed_depot = Some(value);
        self
    }

    pub fn replacement(mut self, value: ReplacementPolicy) -> Self {
        self.replacement = Some(value);
        self
    }

    pub fn mutation(mut self, value: MutationOperator) -> Self {
        self.mutation = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    ///
    /// The result is not validated here; [`EvolutionOptions::validate`] runs
    /// when evolution starts.
    pub fn build(self) -> EvolutionOptions {
        let default = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(default.population_size),
            num_generations: self.num_generations.unwrap_or(default.num_generations),
            mutation_rate: self.mutation_rate.unwrap_or(default.mutation_rate),
            tournament_size: self.tournament_size.unwrap_or(default.tournament_size),
            elite_count: self.elite_count.unwrap_or(default.elite_count),
            weakness_threshold: self.weakness_threshold.or(default.weakness_threshold),
            fixed_depot: self.fixed_depot.unwrap_or(default.fixed_depot),
            replacement: self.replacement.unwrap_or(default.replacement),
            mutation: self.mutation.unwrap_or(default.mutation),
            log_level: self.log_level.unwrap_or(default.log_level),
        }
    }
}
