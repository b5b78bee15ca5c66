//! # Ordered Breeding
//!
//! Breeds offspring for permutation problems: two parents are chosen by
//! tournament, recombined with ordered crossover, and the child is mutated
//! with the configured probability.

use crate::crossover::ordered_crossover;
use crate::error::{GeneticError, Result};
use crate::evolution::options::EvolutionOptions;
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;
use crate::selection::TournamentSelection;
use crate::strategy::BreedStrategy;

/// Tournament selection, ordered crossover, then swap or scramble mutation.
///
/// When weakness pruning has shrunk the population below the configured
/// tournament size, tournaments span the whole population instead.
#[derive(Debug, Clone, Default)]
pub struct OrderedBreedStrategy;

impl OrderedBreedStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl BreedStrategy for OrderedBreedStrategy {
    fn breed(
        &self,
        parents: &[Genome],
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome>> {
        if parents.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let tournament_size = evol_options.get_tournament_size().min(parents.len());
        if tournament_size < evol_options.get_tournament_size() {
            tracing::debug!(
                configured = evol_options.get_tournament_size(),
                population_size = parents.len(),
                "tournament narrowed to the surviving population"
            );
        }
        let selection = TournamentSelection::new(tournament_size)?;

        let num_offspring = evol_options.offspring_count();
        let mut offspring = Vec::with_capacity(num_offspring);

        for _ in 0..num_offspring {
            let parent_a = selection.select_one(parents, rng)?;
            let parent_b = selection.select_one(parents, rng)?;

            let chromosome = ordered_crossover(parent_a.chromosome(), parent_b.chromosome(), rng)?;
            let mut child = Genome::new(chromosome);

            if rng.chance(evol_options.get_mutation_rate()) {
                child.mutate(evol_options.get_mutation(), rng);
            }

            offspring.push(child);
        }

        Ok(offspring)
    }
}
