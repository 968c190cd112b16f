use super::*;
use crate::helpers::solver::*;

fn create_engine(matrix: Arc<DistanceMatrix>, config: AcoConfig, seed: u64) -> AcoEngine {
    AcoEngine::new(matrix, config, TelemetryMode::None, create_test_environment(seed)).unwrap()
}

parameterized_test! {can_reject_invalid_config, config, {
    let result = AcoEngine::new(create_five_city_matrix(), config, TelemetryMode::None, create_test_environment(1));

    assert!(result.is_err());
}}

can_reject_invalid_config! {
    case01_no_ants: (AcoConfig { ants: 0, ..AcoConfig::default() }),
    case02_negative_evaporation: (AcoConfig { rho: -0.1, ..AcoConfig::default() }),
    case03_too_large_evaporation: (AcoConfig { rho: 1.5, ..AcoConfig::default() }),
}

#[test]
fn can_produce_valid_tours_with_non_increasing_best() {
    let matrix = create_random_matrix(10, 11);
    let engine = create_engine(matrix.clone(), AcoConfig { iterations: 50, ..AcoConfig::default() }, 11);

    let mut previous_distance = Float::INFINITY;
    let mut expected_step = 0;

    for progress in engine {
        assert_eq!(progress.step, expected_step);
        expected_step += 1;

        let tour = progress.tour.expect("tour is expected after the first iteration");
        assert_valid_tour(&tour, matrix.size());
        assert!((matrix.tour_distance(&tour) - progress.distance).abs() < 1e-9);

        assert!(progress.distance <= previous_distance);
        previous_distance = progress.distance;
    }
}

#[test]
fn can_match_round_trip_distance_on_two_cities() {
    let mut engine = create_engine(create_two_city_matrix(), AcoConfig::default(), 3);

    let progress = engine.next().unwrap();

    assert_eq!(progress.step, 0);
    assert!(progress.improved);
    assert_eq!(progress.distance, 10.);
}

#[test]
fn can_terminate_by_patience() {
    let matrix = create_two_city_matrix();
    let config = AcoConfig { iterations: 100, patience: 2, ..AcoConfig::default() };
    let mut engine = create_engine(matrix, config, 5);

    let records = engine.by_ref().collect::<Vec<_>>();

    // one improving step, two stagnating ones, then the terminal record
    assert_eq!(records.len(), 4);
    assert!(records[0].improved);
    assert!(records.iter().skip(1).all(|progress| !progress.improved));
    assert_eq!(records.last().unwrap().step, 3);

    assert_eq!(engine.history().len(), 3);
    assert!(engine.next().is_none());
    assert!(engine.next().is_none());
}

#[test]
fn can_handle_zero_patience() {
    let mut engine = create_engine(create_five_city_matrix(), AcoConfig { patience: 0, ..AcoConfig::default() }, 5);

    let progress = engine.next().unwrap();

    assert_eq!(progress.step, 0);
    assert!(!progress.improved);
    assert!(progress.tour.is_none());
    assert!(progress.distance.is_infinite());

    assert!(engine.history().is_empty());
    assert!(engine.next().is_none());
}

#[test]
fn can_stop_at_iteration_cap_without_terminal_record() {
    let config = AcoConfig { iterations: 3, patience: 100, ..AcoConfig::default() };
    let mut engine = create_engine(create_five_city_matrix(), config, 7);

    let records = engine.by_ref().collect::<Vec<_>>();

    assert_eq!(records.len(), 3);
    assert_eq!(engine.history().len(), 3);
    assert!(engine.next().is_none());
}

#[test]
fn can_find_optimum_on_five_cities() {
    let config = AcoConfig { iterations: 200, patience: 200, ..AcoConfig::default() };
    let engine = create_engine(create_five_city_matrix(), config, 2020);

    let last = engine.last().unwrap();

    assert!((last.distance - five_cities_optimum()).abs() < 1e-6);
}
