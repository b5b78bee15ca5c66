use crate::{
    error::{GeneticError, Result},
    strategy::BreedStrategy,
};

use super::{Challenge, EvolutionLauncher};

/// Assembles an [`EvolutionLauncher`] from its parts.
///
/// # Examples
///
/// ```rust
/// use tourga::distance::EuclideanDistance;
/// use tourga::evolution::{builder::EvolutionLauncherBuilder, TourChallenge};
/// use tourga::strategy::OrderedBreedStrategy;
///
/// let model = EuclideanDistance::from_pairs(&[(0.0, 0.0), (3.0, 4.0), (6.0, 0.0)]);
/// let launcher = EvolutionLauncherBuilder::new()
///     .with_breed_strategy(OrderedBreedStrategy::new())
///     .with_challenge(TourChallenge::new(model, false).unwrap())
///     .build()
///     .unwrap();
/// assert!(!launcher.challenge().has_fixed_depot());
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionLauncherBuilder<B, C>
where
    B: BreedStrategy,
    C: Challenge,
{
    breed_strategy: Option<B>,
    challenge: Option<C>,
}

impl<B, C> EvolutionLauncherBuilder<B, C>
where
    B: BreedStrategy,
    C: Challenge,
{
    pub fn new() -> Self {
        Self {
            breed_strategy: None,
            challenge: None,
        }
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_challenge(mut self, challenge: C) -> Self {
        self.challenge = Some(challenge);
        self
    }

    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidConfig`] if a part was never supplied.
    pub fn build(self) -> Result<EvolutionLauncher<B, C>> {
        let breed_strategy = self.breed_strategy.ok_or_else(|| {
            GeneticError::InvalidConfig("Breeding strategy not specified".to_string())
        })?;

        let challenge = self
            .challenge
            .ok_or_else(|| GeneticError::InvalidConfig("Challenge not specified".to_string()))?;

        Ok(EvolutionLauncher::new(breed_strategy, challenge))
    }
}

impl<B, C> Default for EvolutionLauncherBuilder<B, C>
where
    B: BreedStrategy,
    C: Challenge,
{
    fn default() -> Self {
        Self::new()
    }
}
