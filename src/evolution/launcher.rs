use std::ops::ControlFlow;

use super::{
    challenge::{Challenge, TourChallenge},
    options::{EvolutionOptions, LogLevel, ReplacementPolicy},
};
use crate::{
    distance::DistanceModel,
    error::{GeneticError, OptionExt, Result},
    genome::Genome,
    population::{initialize_with_genes, Population},
    rng::RandomNumberGenerator,
    selection::{ElitistSelection, SelectionStrategy},
    strategy::{BreedStrategy, OrderedBreedStrategy},
};

/// Lifecycle of a run.
///
/// There is no convergence criterion: a run that is not cancelled always
/// executes every configured generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Initializing,
    Running,
    MaxGenerationsReached,
    /// The progress callback asked to stop between generations.
    Cancelled,
}

/// The outcome of a completed run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The lowest-cost chromosome seen during the run.
    pub chromosome: Vec<usize>,
    /// Cost of `chromosome`.
    pub cost: f64,
    /// Number of generations executed.
    pub generations: usize,
    pub status: RunStatus,
    /// Best cost after initialization and after every generation.
    pub cost_history: Vec<f64>,
}

impl EvolutionResult {
    /// The `(best tour, best cost)` pair.
    pub fn into_tour(self) -> (Vec<usize>, f64) {
        (self.chromosome, self.cost)
    }
}

/// Snapshot handed to the progress callback after each generation.
#[derive(Debug, Clone, Copy)]
pub struct GenerationProgress<'a> {
    /// 1-based index of the generation that just completed.
    pub generation: usize,
    /// Always [`RunStatus::Running`] while the loop reports progress.
    pub status: RunStatus,
    pub best_cost: f64,
    pub population_size: usize,
    /// Best genome seen so far, which may no longer be in `population`.
    pub best: &'a Genome,
    pub population: &'a [Genome],
}

/// Run-scoped state: the generation counter and the best genome ever seen.
#[derive(Debug)]
struct EvolutionState {
    generation: usize,
    best: Genome,
    best_cost: f64,
    status: RunStatus,
}

impl EvolutionState {
    fn new(population: &[Genome]) -> Result<Self> {
        let best = cheapest(population)?.clone();
        let best_cost = best.evaluated_cost()?;
        Ok(Self {
            generation: 0,
            best,
            best_cost,
            status: RunStatus::Initializing,
        })
    }

    /// Records the cheapest genome of `population` if it beats the best so far.
    fn observe(&mut self, population: &[Genome]) -> Result<()> {
        let candidate = cheapest(population)?;
        let cost = candidate.evaluated_cost()?;
        if cost < self.best_cost {
            self.best = candidate.clone();
            self.best_cost = cost;
        }
        Ok(())
    }
}

/// Manages the evolution process using a specified breeding strategy and challenge.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Strategy, Chall>
where
    Strategy: BreedStrategy,
    Chall: Challenge,
{
    strategy: Strategy,
    challenge: Chall,
}

impl<Strategy, Chall> EvolutionLauncher<Strategy, Chall>
where
    Strategy: BreedStrategy,
    Chall: Challenge,
{
    /// Creates a new `EvolutionLauncher` instance with the specified breeding strategy and challenge.
    ///
    /// # Arguments
    ///
    /// * `strategy` - The breeding strategy used for generating offspring during evolution.
    /// * `challenge` - The challenge used to score chromosomes.
    pub fn new(strategy: Strategy, challenge: Chall) -> Self {
        Self {
            strategy,
            challenge,
        }
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Evolves a population over `options.get_num_generations()` generations.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid (before any work is done)
    /// - Scoring a chromosome fails, for example on an unknown location
    /// - Weakness pruning removes every genome
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        self.evolve_with_progress(options, rng, |_| ControlFlow::Continue(()))
    }

    /// Like [`evolve`](Self::evolve), invoking `progress` after every completed
    /// generation. Returning `ControlFlow::Break` ends the run with
    /// [`RunStatus::Cancelled`] and the best result found so far.
    pub fn evolve_with_progress<F>(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
        mut progress: F,
    ) -> Result<EvolutionResult>
    where
        F: FnMut(&GenerationProgress<'_>) -> ControlFlow<()>,
    {
        options.validate()?;

        let span = tracing::info_span!(
            "evolve",
            population_size = options.get_population_size(),
            num_generations = options.get_num_generations()
        );
        let _enter = span.enter();

        let mut population =
            initialize_with_genes(options.get_population_size(), self.challenge.genes(), rng)?;
        self.evaluate(&mut population)?;

        let mut state = EvolutionState::new(&population)?;
        let mut cost_history = Vec::with_capacity(options.get_num_generations() + 1);
        cost_history.push(state.best_cost);
        tracing::debug!(
            status = ?state.status,
            best_cost = state.best_cost,
            "initial population evaluated"
        );
        state.status = RunStatus::Running;

        while state.generation < options.get_num_generations() {
            state.generation += 1;

            let mut offspring = self.strategy.breed(&population, options, rng)?;
            self.evaluate(&mut offspring)?;

            population = match options.get_replacement() {
                ReplacementPolicy::Generational => {
                    let elites = select_elites(&population, &state, options, rng)?;
                    replace_generation(offspring, elites)
                }
                ReplacementPolicy::Append { .. } => {
                    population.extend(offspring);
                    cull(population, options.get_population_size())
                }
            };

            state.observe(&population)?;
            prune(
                &mut population,
                options.get_weakness_threshold(),
                state.generation,
            )?;
            cost_history.push(state.best_cost);

            log_generation(
                options,
                state.generation,
                state.best_cost,
                population.len(),
            );

            let report = GenerationProgress {
                generation: state.generation,
                status: state.status,
                best_cost: state.best_cost,
                population_size: population.len(),
                best: &state.best,
                population: &population,
            };
            if progress(&report).is_break() {
                state.status = RunStatus::Cancelled;
                break;
            }
        }

        if state.status == RunStatus::Running {
            state.status = RunStatus::MaxGenerationsReached;
        }

        if options.get_log_level() != LogLevel::None {
            tracing::info!(
                generations = state.generation,
                best_cost = state.best_cost,
                status = ?state.status,
                "evolution finished"
            );
        }

        Ok(EvolutionResult {
            chromosome: state.best.into_chromosome(),
            cost: state.best_cost,
            generations: state.generation,
            status: state.status,
            cost_history,
        })
    }

    fn evaluate(&self, population: &mut [Genome]) -> Result<()> {
        for genome in population.iter_mut() {
            genome.evaluate(&self.challenge)?;
        }
        Ok(())
    }
}

/// Runs a genetic algorithm for the traveling salesman problem over `model`.
///
/// Tours are scored by a [`TourChallenge`] honoring `options.has_fixed_depot()`
/// and bred with [`OrderedBreedStrategy`].
///
/// # Examples
///
/// ```rust
/// use tourga::distance::EuclideanDistance;
/// use tourga::evolution::{solve, EvolutionOptions};
/// use tourga::rng::RandomNumberGenerator;
///
/// let model = EuclideanDistance::from_pairs(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
/// let options = EvolutionOptions::builder()
///     .population_size(20)
///     .num_generations(30)
///     .tournament_size(3)
///     .fixed_depot(true)
///     .build();
///
/// let result = solve(model, &options, &mut RandomNumberGenerator::from_seed(1)).unwrap();
/// assert!((result.cost - 4.0).abs() < 1e-9);
/// ```
pub fn solve<D: DistanceModel>(
    model: D,
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
) -> Result<EvolutionResult> {
    solve_with_progress(model, options, rng, |_| ControlFlow::Continue(()))
}

/// Like [`solve`], reporting every completed generation to `progress`.
pub fn solve_with_progress<D, F>(
    model: D,
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
    progress: F,
) -> Result<EvolutionResult>
where
    D: DistanceModel,
    F: FnMut(&GenerationProgress<'_>) -> ControlFlow<()>,
{
    options.validate()?;
    let challenge = TourChallenge::new(model, options.has_fixed_depot())?;
    EvolutionLauncher::new(OrderedBreedStrategy::new(), challenge)
        .evolve_with_progress(options, rng, progress)
}

fn cheapest(population: &[Genome]) -> Result<&Genome> {
    population
        .iter()
        .min_by(|a, b| a.cmp_cost(b))
        .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
}

/// The elites carried into the next generation, best known genome first.
fn select_elites(
    population: &[Genome],
    state: &EvolutionState,
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Genome>> {
    let elite_count = options.get_elite_count();
    if elite_count == 0 {
        return Ok(Vec::new());
    }

    let mut elites = ElitistSelection::new().select(population, elite_count, rng)?;
    let best_survived = elites
        .first()
        .and_then(Genome::cost)
        .is_some_and(|cost| cost <= state.best_cost);
    if !best_survived {
        elites.insert(0, state.best.clone());
        elites.truncate(elite_count);
    }
    Ok(elites)
}

/// Overwrites the worst offspring with the elites.
fn replace_generation(mut offspring: Population, elites: Vec<Genome>) -> Population {
    offspring.sort_by(Genome::cmp_cost);
    let keep = offspring.len().saturating_sub(elites.len());
    offspring.truncate(keep);
    offspring.extend(elites);
    offspring
}

/// Keeps the `size` cheapest genomes.
fn cull(mut population: Population, size: usize) -> Population {
    if population.len() > size {
        population.sort_by(Genome::cmp_cost);
        population.truncate(size);
    }
    population
}

/// Drops every genome costing more than `threshold`.
fn prune(population: &mut Population, threshold: f64, generation: usize) -> Result<()> {
    population.retain(|genome| genome.cost().is_some_and(|cost| cost <= threshold));
    if population.is_empty() {
        tracing::warn!(generation, threshold, "weakness pruning removed every genome");
        return Err(GeneticError::PopulationExhausted {
            generation,
            threshold,
        });
    }
    Ok(())
}

fn log_generation(
    options: &EvolutionOptions,
    generation: usize,
    best_cost: f64,
    population_size: usize,
) {
    let report = match options.get_log_level() {
        LogLevel::Verbose => true,
        LogLevel::Minimal => {
            generation % 100 == 0 || generation == options.get_num_generations()
        }
        LogLevel::None => false,
    };
    if report {
        tracing::info!(generation, best_cost, population_size, "generation complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{DistanceMatrix, EuclideanDistance};
    use crate::genome::is_permutation_of;
    use crate::mutation::MutationOperator;

    fn cities() -> EuclideanDistance {
        EuclideanDistance::from_pairs(&[
            (5.0, 80.0),
            (124.0, 31.0),
            (46.0, 54.0),
            (86.0, 148.0),
            (21.0, 8.0),
            (134.0, 72.0),
            (49.0, 126.0),
            (36.0, 34.0),
            (26.0, 49.0),
            (141.0, 6.0),
        ])
    }

    fn launcher(
        model: EuclideanDistance,
        fixed_depot: bool,
    ) -> EvolutionLauncher<OrderedBreedStrategy, TourChallenge<EuclideanDistance>> {
        EvolutionLauncher::new(
            OrderedBreedStrategy::new(),
            TourChallenge::new(model, fixed_depot).unwrap(),
        )
    }

    /// Claims more genes than its model has locations.
    struct OversizedChallenge {
        inner: TourChallenge<DistanceMatrix>,
        genes: Vec<usize>,
    }

    impl Challenge for OversizedChallenge {
        fn genes(&self) -> &[usize] {
            &self.genes
        }

        fn score(&self, chromosome: &[usize]) -> Result<f64> {
            self.inner.score(chromosome)
        }
    }

    #[test]
    fn test_generational_elitism_never_regresses() {
        let options = EvolutionOptions::builder()
            .population_size(30)
            .num_generations(60)
            .tournament_size(3)
            .mutation_rate(0.9)
            .elite_count(2)
            .build();

        let mut bests = Vec::new();
        let mut population_best = Vec::new();
        let result = launcher(cities(), false)
            .evolve_with_progress(&options, &mut RandomNumberGenerator::from_seed(61), |p| {
                bests.push(p.best_cost);
                let cheapest = p
                    .population
                    .iter()
                    .filter_map(Genome::cost)
                    .fold(f64::INFINITY, f64::min);
                population_best.push(cheapest);
                ControlFlow::Continue(())
            })
            .unwrap();

        assert_eq!(result.status, RunStatus::MaxGenerationsReached);
        assert_eq!(result.generations, 60);
        assert_eq!(result.cost_history.len(), 61);
        assert!(bests.windows(2).all(|w| w[1] <= w[0]));
        // The elite keeps the best known genome inside the population
        assert_eq!(bests, population_best);
        assert_eq!(result.cost, *bests.last().unwrap());
    }

    #[test]
    fn test_append_policy_culls_to_target_size() {
        let options = EvolutionOptions::builder()
            .population_size(20)
            .num_generations(15)
            .tournament_size(4)
            .mutation_rate(0.2)
            .mutation(MutationOperator::scramble())
            .replacement(ReplacementPolicy::Append { num_offspring: 4 })
            .fixed_depot(true)
            .build();
        let genes: Vec<usize> = (1..10).collect();

        let result = launcher(cities(), true)
            .evolve_with_progress(&options, &mut RandomNumberGenerator::from_seed(62), |p| {
                assert_eq!(p.population_size, 20);
                assert!(p
                    .population
                    .iter()
                    .all(|g| is_permutation_of(g.chromosome(), &genes)));
                ControlFlow::Continue(())
            })
            .unwrap();

        assert!(is_permutation_of(&result.chromosome, &genes));
        assert!(result.cost_history.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn test_cancellation_between_generations() {
        let options = EvolutionOptions::builder()
            .population_size(10)
            .num_generations(100)
            .tournament_size(2)
            .build();

        let mut calls = 0;
        let result = launcher(cities(), false)
            .evolve_with_progress(&options, &mut RandomNumberGenerator::from_seed(63), |p| {
                assert_eq!(p.status, RunStatus::Running);
                calls += 1;
                if p.generation == 5 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .unwrap();

        assert_eq!(calls, 5);
        assert_eq!(result.generations, 5);
        assert_eq!(result.status, RunStatus::Cancelled);
        assert_eq!(result.cost_history.len(), 6);
    }

    #[test]
    fn test_invalid_options_abort_before_running() {
        let options = EvolutionOptions::builder()
            .population_size(5)
            .tournament_size(6)
            .build();

        let mut calls = 0;
        let result = launcher(cities(), false).evolve_with_progress(
            &options,
            &mut RandomNumberGenerator::from_seed(64),
            |_| {
                calls += 1;
                ControlFlow::Continue(())
            },
        );

        assert!(matches!(result, Err(GeneticError::InvalidConfig(_))));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_weakness_threshold_exhaustion() {
        let options = EvolutionOptions::builder()
            .population_size(10)
            .num_generations(10)
            .tournament_size(2)
            .weakness_threshold(1.0)
            .build();

        let result = launcher(cities(), false).evolve(&options, &mut RandomNumberGenerator::from_seed(65));

        assert_eq!(
            result,
            Err(GeneticError::PopulationExhausted {
                generation: 1,
                threshold: 1.0
            })
        );
    }

    #[test]
    fn test_weakness_threshold_prunes_without_exhausting() {
        let options = EvolutionOptions::builder()
            .population_size(30)
            .num_generations(20)
            .tournament_size(3)
            .elite_count(1)
            .build();
        let unpruned = launcher(cities(), false)
            .evolve(&options, &mut RandomNumberGenerator::from_seed(66))
            .unwrap();

        // The best genome is always kept, so a threshold at its initial cost never exhausts
        let threshold = unpruned.cost_history[0];
        let options = EvolutionOptions::builder()
            .population_size(30)
            .num_generations(20)
            .tournament_size(3)
            .elite_count(1)
            .weakness_threshold(threshold)
            .build();

        launcher(cities(), false)
            .evolve_with_progress(&options, &mut RandomNumberGenerator::from_seed(66), |p| {
                assert!(p.population_size >= 1);
                assert!(p
                    .population
                    .iter()
                    .all(|g| g.cost().is_some_and(|c| c <= threshold)));
                ControlFlow::Continue(())
            })
            .unwrap();
    }

    #[test]
    fn test_index_error_propagates() {
        let matrix = DistanceMatrix::new(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 1.5],
            vec![2.0, 1.5, 0.0],
        ])
        .unwrap();
        let challenge = OversizedChallenge {
            inner: TourChallenge::new(matrix, false).unwrap(),
            genes: vec![0, 1, 2, 3],
        };
        let launcher = EvolutionLauncher::new(OrderedBreedStrategy::new(), challenge);
        let options = EvolutionOptions::builder()
            .population_size(4)
            .num_generations(3)
            .tournament_size(2)
            .build();

        let result = launcher.evolve(&options, &mut RandomNumberGenerator::from_seed(67));

        assert_eq!(
            result,
            Err(GeneticError::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_replace_generation_overwrites_worst() {
        let challenge = TourChallenge::new(
            EuclideanDistance::from_pairs(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]),
            true,
        )
        .unwrap();
        let mut offspring: Population = [vec![1, 3, 2], vec![2, 1, 3], vec![3, 1, 2]]
            .into_iter()
            .map(Genome::new)
            .collect();
        let mut elite = Genome::new(vec![1, 2, 3]);
        elite.evaluate(&challenge).unwrap();
        for genome in &mut offspring {
            genome.evaluate(&challenge).unwrap();
        }

        let next = replace_generation(offspring, vec![elite.clone()]);

        assert_eq!(next.len(), 3);
        assert!(next.contains(&elite));
    }

    #[test]
    fn test_cull_keeps_cheapest() {
        let challenge = TourChallenge::new(cities(), false).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(68);
        let mut population = initialize_with_genes(12, challenge.genes(), &mut rng).unwrap();
        for genome in &mut population {
            genome.evaluate(&challenge).unwrap();
        }
        let mut costs: Vec<f64> = population.iter().filter_map(Genome::cost).collect();
        costs.sort_by(f64::total_cmp);

        let culled = cull(population, 5);

        let kept: Vec<f64> = culled.iter().filter_map(Genome::cost).collect();
        assert_eq!(kept, costs[..5].to_vec());
    }
}
