use crate::error::{GeneticError, Result};
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects genomes through tournament selection.
///
/// Each tournament draws `tournament_size` distinct genomes uniformly at random
/// and returns the one with the lowest cost. Tournaments are independent, so
/// the same genome may win several of them.
///
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best genomes)
///
/// # Examples
///
/// ```
/// use tourga::selection::TournamentSelection;
///
/// assert!(TournamentSelection::new(3).is_ok());
/// assert!(TournamentSelection::new(0).is_err());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// A tournament size of 1 is equivalent to random selection.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::InvalidConfig(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty, smaller than the tournament,
    /// or holds an unevaluated genome among the participants.
    pub fn run_tournament(
        &self,
        population: &[Genome],
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if self.tournament_size > population.len() {
            return Err(GeneticError::InvalidConfig(format!(
                "Tournament size ({}) exceeds population size ({})",
                self.tournament_size,
                population.len()
            )));
        }

        let mut best: Option<(usize, f64)> = None;
        for idx in rng.sample_indices(population.len(), self.tournament_size) {
            let cost = population[idx].evaluated_cost()?;
            if best.map_or(true, |(_, best_cost)| cost < best_cost) {
                best = Some((idx, cost));
            }
        }

        best.map(|(idx, _)| idx)
            .ok_or_else(|| GeneticError::EmptyPopulation)
    }

    /// Runs a single tournament and returns the winner.
    pub fn select_one<'a>(
        &self,
        population: &'a [Genome],
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Genome> {
        let winner = self.run_tournament(population, rng)?;
        Ok(&population[winner])
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(
        &self,
        population: &[Genome],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome>> {
        (0..num_to_select)
            .map(|_| self.select_one(population, rng).cloned())
            .collect()
    }
}
