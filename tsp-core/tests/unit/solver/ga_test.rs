use super::*;
use crate::helpers::solver::*;

fn create_engine(matrix: Arc<DistanceMatrix>, config: GaConfig, seed: u64) -> GaEngine {
    GaEngine::new(matrix, config, TelemetryMode::None, create_test_environment(seed)).unwrap()
}

fn create_parents() -> (Tour, Tour) {
    (Tour::try_new(vec![0, 1, 2, 3, 4], 5).unwrap(), Tour::try_new(vec![4, 3, 2, 1, 0], 5).unwrap())
}

parameterized_test! {can_reject_invalid_config, config, {
    let result = GaEngine::new(create_five_city_matrix(), config, TelemetryMode::None, create_test_environment(1));

    assert!(result.is_err());
}}

can_reject_invalid_config! {
    case01_empty_population: (GaConfig { population_size: 0, ..GaConfig::default() }),
    case02_negative_mutation_rate: (GaConfig { mutation_rate: -0.5, ..GaConfig::default() }),
    case03_too_large_mutation_rate: (GaConfig { mutation_rate: 1.5, ..GaConfig::default() }),
}

parameterized_test! {can_crossover_with_any_cut_points, (a, b, expected), {
    let (parent1, parent2) = create_parents();

    let child = crossover_with_cut_points(&parent1, &parent2, a, b);

    assert_valid_tour(&child, 5);
    assert_eq!(child.as_slice()[a..b], parent1.as_slice()[a..b]);
    assert_eq!(child.as_slice(), expected.as_slice());
}}

can_crossover_with_any_cut_points! {
    case01_empty_segment_start: (0, 0, vec![4, 3, 2, 1, 0]),
    case02_empty_segment_middle: (2, 2, vec![4, 3, 2, 1, 0]),
    case03_full_segment: (0, 5, vec![0, 1, 2, 3, 4]),
    case04_middle_segment: (1, 4, vec![4, 1, 2, 3, 0]),
    case05_prefix_segment: (0, 3, vec![0, 1, 2, 4, 3]),
    case06_suffix_segment: (3, 5, vec![2, 1, 0, 3, 4]),
}

#[test]
fn can_crossover_with_random_cut_points() {
    let (parent1, parent2) = create_parents();
    let environment = create_test_environment(17);

    (0..100).for_each(|_| {
        let child = crossover(&parent1, &parent2, environment.random.as_ref());
        assert_valid_tour(&child, 5);
    });
}

#[test]
fn can_mutate_with_guaranteed_swap() {
    let environment = create_test_environment(29);
    let original = Tour::try_new(vec![0, 1, 2, 3], 4).unwrap();

    let mut mutated = original.clone();
    mutate(&mut mutated, 1., environment.random.as_ref());

    assert_valid_tour(&mutated, 4);
    assert_ne!(mutated, original);
}

#[test]
fn can_skip_mutation_with_zero_rate() {
    let environment = create_test_environment(29);
    let original = Tour::try_new(vec![0, 1, 2, 3], 4).unwrap();

    let mut mutated = original.clone();
    mutate(&mut mutated, 0., environment.random.as_ref());

    assert_eq!(mutated, original);
}

#[test]
fn can_produce_valid_tours_with_non_increasing_best() {
    let matrix = create_random_matrix(10, 13);
    let engine = create_engine(matrix.clone(), GaConfig { generations: 50, ..GaConfig::default() }, 13);

    let mut previous_distance = Float::INFINITY;
    let mut expected_step = 0;

    for progress in engine {
        assert_eq!(progress.step, expected_step);
        expected_step += 1;

        let tour = progress.tour.expect("genetic engine always has a best tour");
        assert_valid_tour(&tour, matrix.size());
        assert!((matrix.tour_distance(&tour) - progress.distance).abs() < 1e-9);

        assert!(progress.distance <= previous_distance);
        previous_distance = progress.distance;
    }
}

#[test]
fn can_match_round_trip_distance_on_two_cities() {
    let mut engine = create_engine(create_two_city_matrix(), GaConfig::default(), 3);

    let progress = engine.next().unwrap();

    assert_eq!(progress.step, 0);
    assert_eq!(progress.distance, 10.);
}

#[test]
fn can_terminate_by_patience() {
    let matrix = create_two_city_matrix();
    let config = GaConfig { generations: 100, patience: 3, ..GaConfig::default() };
    let mut engine = create_engine(matrix, config, 5);

    let records = engine.by_ref().collect::<Vec<_>>();

    // the initial best is created at construction, so every generation stagnates
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|progress| !progress.improved));
    assert_eq!(records.last().unwrap().step, 3);

    assert_eq!(engine.history().len(), 3);
    assert!(engine.next().is_none());
    assert!(engine.next().is_none());
}

#[test]
fn can_handle_zero_patience() {
    let mut engine = create_engine(create_five_city_matrix(), GaConfig { patience: 0, ..GaConfig::default() }, 5);

    let progress = engine.next().unwrap();

    assert_eq!(progress.step, 0);
    assert!(!progress.improved);
    assert!(progress.tour.is_some());

    assert!(engine.history().is_empty());
    assert!(engine.next().is_none());
}

#[test]
fn can_stop_at_generation_cap_without_terminal_record() {
    let config = GaConfig { generations: 3, patience: 100, ..GaConfig::default() };
    let mut engine = create_engine(create_five_city_matrix(), config, 7);

    let records = engine.by_ref().collect::<Vec<_>>();

    assert_eq!(records.len(), 3);
    assert_eq!(engine.history().len(), 3);
    assert!(engine.next().is_none());
}

#[test]
fn can_find_optimum_on_five_cities() {
    let config = GaConfig { generations: 200, patience: 200, ..GaConfig::default() };
    let engine = create_engine(create_five_city_matrix(), config, 2020);

    let last = engine.last().unwrap();

    assert!((last.distance - five_cities_optimum()).abs() < 1e-6);
}
