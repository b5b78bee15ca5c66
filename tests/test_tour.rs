use std::ops::ControlFlow;

use tourga::{
    distance::EuclideanDistance,
    error::GeneticError,
    evolution::{
        solve, solve_with_progress, Challenge, EvolutionLauncher, EvolutionOptions, LogLevel,
        ReplacementPolicy, RunStatus, TourChallenge,
    },
    genome::is_permutation_of,
    mutation::MutationOperator,
    rng::RandomNumberGenerator,
    strategy::OrderedBreedStrategy,
};

const CITY_COORDINATES: [(f64, f64); 15] = [
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
    (124.0, 122.0),
    (80.0, 92.0),
    (70.0, 69.0),
    (76.0, 133.0),
    (23.0, 65.0),
];

fn cities() -> EuclideanDistance {
    EuclideanDistance::from_pairs(&CITY_COORDINATES)
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_unit_square_with_depot_finds_perimeter() {
    let square = EuclideanDistance::from_pairs(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    let options = EvolutionOptions::builder()
        .population_size(20)
        .num_generations(50)
        .tournament_size(3)
        .fixed_depot(true)
        .build();

    let result = solve(square, &options, &mut RandomNumberGenerator::from_seed(7)).unwrap();

    assert!((result.cost - 4.0).abs() < 1e-9);
    assert!(result.chromosome == vec![1, 2, 3] || result.chromosome == vec![3, 2, 1]);
    assert_eq!(result.status, RunStatus::MaxGenerationsReached);
    assert_eq!(result.generations, 50);
}

#[test]
fn test_rectangle_cost_is_bounded_by_optimum() {
    let rectangle = EuclideanDistance::from_pairs(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (3.0, 0.0),
        (3.0, 1.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (0.0, 1.0),
    ]);
    let options = EvolutionOptions::builder()
        .population_size(60)
        .num_generations(200)
        .tournament_size(4)
        .mutation_rate(0.2)
        .elite_count(2)
        .build();

    let result = solve(rectangle, &options, &mut RandomNumberGenerator::from_seed(11)).unwrap();

    // Every leg is at least one unit long
    assert!(result.cost >= 8.0 - 1e-9);
    assert!(result.cost <= result.cost_history[0]);
    assert!(is_permutation_of(
        &result.chromosome,
        &[0, 1, 2, 3, 4, 5, 6, 7]
    ));
}

#[test]
fn test_same_seed_same_result() {
    let options = EvolutionOptions::builder()
        .population_size(40)
        .num_generations(80)
        .tournament_size(5)
        .mutation_rate(0.1)
        .fixed_depot(true)
        .build();

    let first = solve(cities(), &options, &mut RandomNumberGenerator::from_seed(2024)).unwrap();
    let second = solve(cities(), &options, &mut RandomNumberGenerator::from_seed(2024)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_reported_cost_matches_tour() {
    let options = EvolutionOptions::builder()
        .population_size(30)
        .num_generations(40)
        .tournament_size(3)
        .fixed_depot(true)
        .build();

    let result = solve(cities(), &options, &mut RandomNumberGenerator::from_seed(5)).unwrap();

    let challenge = TourChallenge::new(cities(), true).unwrap();
    let genes: Vec<usize> = (1..15).collect();
    assert!(is_permutation_of(&result.chromosome, &genes));
    assert_eq!(challenge.score(&result.chromosome).unwrap(), result.cost);
}

#[test]
fn test_best_cost_is_monotonic_and_population_stays_valid() {
    init_logging();
    let options = EvolutionOptions::builder()
        .population_size(25)
        .num_generations(120)
        .tournament_size(4)
        .mutation_rate(0.3)
        .log_level(LogLevel::Minimal)
        .build();
    let genes: Vec<usize> = (0..15).collect();

    let mut reported = Vec::new();
    let result = solve_with_progress(
        cities(),
        &options,
        &mut RandomNumberGenerator::from_seed(99),
        |progress| {
            assert_eq!(progress.population_size, 25);
            assert!(progress
                .population
                .iter()
                .all(|genome| is_permutation_of(genome.chromosome(), &genes)));
            assert_eq!(progress.best.cost(), Some(progress.best_cost));
            reported.push(progress.best_cost);
            ControlFlow::Continue(())
        },
    )
    .unwrap();

    assert_eq!(reported.len(), 120);
    assert!(reported.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(&result.cost_history[1..], reported.as_slice());
    assert_eq!(result.cost, reported[119]);
}

#[test]
fn test_append_policy_with_scramble() {
    init_logging();
    let options = EvolutionOptions::builder()
        .population_size(30)
        .num_generations(50)
        .tournament_size(5)
        .mutation_rate(0.25)
        .mutation(MutationOperator::scramble())
        .replacement(ReplacementPolicy::Append { num_offspring: 10 })
        .fixed_depot(true)
        .log_level(LogLevel::Verbose)
        .build();

    let result = solve(cities(), &options, &mut RandomNumberGenerator::from_seed(31)).unwrap();

    assert_eq!(result.generations, 50);
    assert!(result.cost_history.windows(2).all(|w| w[1] <= w[0]));
    assert!(is_permutation_of(
        &result.chromosome,
        &(1..15).collect::<Vec<_>>()
    ));
}

#[test]
fn test_weakness_threshold_exhausts_population() {
    let options = EvolutionOptions::builder()
        .population_size(20)
        .num_generations(10)
        .tournament_size(3)
        .weakness_threshold(1.0)
        .build();

    let result = solve(cities(), &options, &mut RandomNumberGenerator::from_seed(8));

    assert_eq!(
        result,
        Err(GeneticError::PopulationExhausted {
            generation: 1,
            threshold: 1.0
        })
    );
}

#[test]
fn test_append_policy_exhausts_population() {
    let options = EvolutionOptions::builder()
        .population_size(20)
        .num_generations(10)
        .tournament_size(3)
        .replacement(ReplacementPolicy::Append { num_offspring: 5 })
        .weakness_threshold(1.0)
        .build();

    let result = solve(cities(), &options, &mut RandomNumberGenerator::from_seed(8));

    assert_eq!(
        result,
        Err(GeneticError::PopulationExhausted {
            generation: 1,
            threshold: 1.0
        })
    );
}

#[test]
fn test_best_survives_without_elitism() {
    let options = EvolutionOptions::builder()
        .population_size(10)
        .num_generations(100)
        .tournament_size(5)
        .elite_count(0)
        .mutation_rate(1.0)
        .build();

    let mut lost_best = 0;
    let result = solve_with_progress(
        cities(),
        &options,
        &mut RandomNumberGenerator::from_seed(1),
        |progress| {
            let population_best = progress
                .population
                .iter()
                .filter_map(|genome| genome.cost())
                .fold(f64::INFINITY, f64::min);
            assert!(population_best >= progress.best_cost);
            if population_best > progress.best_cost {
                lost_best += 1;
            }
            ControlFlow::Continue(())
        },
    )
    .unwrap();

    assert!(lost_best > 0);
    assert!(result.cost_history.windows(2).all(|w| w[1] <= w[0]));
    let lowest = result
        .cost_history
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    assert_eq!(result.cost, lowest);

    let challenge = TourChallenge::new(cities(), false).unwrap();
    assert_eq!(challenge.score(&result.chromosome).unwrap(), result.cost);
}

#[test]
fn test_invalid_configurations() {
    let mut rng = RandomNumberGenerator::from_seed(1);

    let too_large_tournament = EvolutionOptions::builder()
        .population_size(4)
        .tournament_size(5)
        .build();
    assert!(matches!(
        solve(cities(), &too_large_tournament, &mut rng),
        Err(GeneticError::InvalidConfig(_))
    ));

    let bad_rate = EvolutionOptions::builder().mutation_rate(2.0).build();
    assert!(matches!(
        solve(cities(), &bad_rate, &mut rng),
        Err(GeneticError::InvalidConfig(_))
    ));

    let single_city = EuclideanDistance::from_pairs(&[(1.0, 1.0)]);
    assert!(matches!(
        solve(single_city, &EvolutionOptions::default(), &mut rng),
        Err(GeneticError::InvalidConfig(_))
    ));
}

#[test]
fn test_cancellation_returns_best_so_far() {
    let options = EvolutionOptions::builder()
        .population_size(20)
        .num_generations(1000)
        .tournament_size(3)
        .build();
    let launcher = EvolutionLauncher::new(
        OrderedBreedStrategy::new(),
        TourChallenge::new(cities(), false).unwrap(),
    );

    let result = launcher
        .evolve_with_progress(&options, &mut RandomNumberGenerator::from_seed(4), |progress| {
            if progress.generation >= 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .unwrap();

    assert_eq!(result.status, RunStatus::Cancelled);
    assert_eq!(result.generations, 3);
    assert_eq!(result.cost, result.cost_history[3]);
    assert_eq!(
        launcher.challenge().score(&result.chromosome).unwrap(),
        result.cost
    );
}

#[test]
fn test_two_locations_with_depot() {
    let pair = EuclideanDistance::from_pairs(&[(0.0, 0.0), (3.0, 4.0)]);
    let options = EvolutionOptions::builder()
        .population_size(3)
        .num_generations(5)
        .tournament_size(2)
        .mutation_rate(1.0)
        .fixed_depot(true)
        .build();

    let result = solve(pair, &options, &mut RandomNumberGenerator::from_seed(12)).unwrap();

    assert_eq!(result.chromosome, vec![1]);
    assert_eq!(result.cost, 10.0);
}

#[cfg(feature = "serde")]
#[test]
fn test_options_and_result_serialize() {
    let options = EvolutionOptions::builder()
        .population_size(10)
        .num_generations(5)
        .tournament_size(2)
        .replacement(ReplacementPolicy::Append { num_offspring: 3 })
        .build();

    let json = serde_json::to_string(&options).unwrap();
    let decoded: EvolutionOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, options);

    let result = solve(cities(), &options, &mut RandomNumberGenerator::from_seed(3)).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"status\""));
}
