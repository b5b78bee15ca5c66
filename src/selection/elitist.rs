use crate::error::{GeneticError, Result};
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects the lowest-cost genomes.
///
/// This strategy sorts genomes by cost and takes the first N, each at most once.
/// The evolution loop uses it to pick the elites that are carried into the
/// next generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ElitistSelection;

impl ElitistSelection {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionStrategy for ElitistSelection {
    fn select(
        &self,
        population: &[Genome],
        num_to_select: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut ranked = Vec::with_capacity(population.len());
        for genome in population {
            ranked.push((genome.evaluated_cost()?, genome));
        }
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

        Ok(ranked
            .into_iter()
            .take(num_to_select)
            .map(|(_, genome)| genome.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::Challenge;

    struct SumChallenge;

    impl Challenge for SumChallenge {
        fn genes(&self) -> &[usize] {
            &[0, 1, 2]
        }

        fn score(&self, chromosome: &[usize]) -> Result<f64> {
            Ok(chromosome[0] as f64)
        }
    }

    fn population() -> Vec<Genome> {
        let mut population = vec![
            Genome::new(vec![2, 0, 1]),
            Genome::new(vec![0, 1, 2]),
            Genome::new(vec![1, 2, 0]),
        ];
        for genome in &mut population {
            genome.evaluate(&SumChallenge).unwrap();
        }
        population
    }

    #[test]
    fn test_elitist_selection() {
        let mut rng = RandomNumberGenerator::new();
        let selected = ElitistSelection::new()
            .select(&population(), 2, &mut rng)
            .unwrap();

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].cost(), Some(0.0));
        assert_eq!(selected[1].cost(), Some(1.0));
    }

    #[test]
    fn test_elitist_selection_more_than_available() {
        let mut rng = RandomNumberGenerator::new();
        let selected = ElitistSelection::new()
            .select(&population(), 10, &mut rng)
            .unwrap();

        // Each genome is selected at most once
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_elitist_selection_empty_population() {
        let mut rng = RandomNumberGenerator::new();
        let result = ElitistSelection::new().select(&[], 2, &mut rng);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_elitist_selection_unevaluated() {
        let mut rng = RandomNumberGenerator::new();
        let result = ElitistSelection::new().select(&[Genome::new(vec![0, 1, 2])], 1, &mut rng);
        assert!(matches!(result, Err(GeneticError::InvariantViolation(_))));
    }
}
