use crate::models::{generate_cities, City, DistanceMatrix, Tour};
use crate::utils::{DefaultRandom, Environment, Float};
use std::sync::Arc;

/// Five cities: four corners of a 10x10 square plus its center.
pub fn create_five_cities() -> Vec<City> {
    vec![City::new(0., 0.), City::new(10., 0.), City::new(10., 10.), City::new(0., 10.), City::new(5., 5.)]
}

/// Length of the optimal five city cycle: the square corners in order with the center
/// inserted between two adjacent corners.
pub fn five_cities_optimum() -> Float {
    30. + 10. * std::f64::consts::SQRT_2
}

pub fn create_five_city_matrix() -> Arc<DistanceMatrix> {
    Arc::new(DistanceMatrix::new(&create_five_cities()).unwrap())
}

/// Two cities with distance 5, so the round trip is 10.
pub fn create_two_city_matrix() -> Arc<DistanceMatrix> {
    Arc::new(DistanceMatrix::new(&[City::new(0., 0.), City::new(3., 4.)]).unwrap())
}

pub fn create_random_matrix(count: usize, seed: u64) -> Arc<DistanceMatrix> {
    let random = DefaultRandom::new_with_seed(seed);
    let cities = generate_cities(count, 1000., 1000., 50., &random).unwrap();

    Arc::new(DistanceMatrix::new(&cities).unwrap())
}

/// Creates an environment with a seeded random source and a silent logger.
pub fn create_test_environment(seed: u64) -> Arc<Environment> {
    Arc::new(Environment::new(Arc::new(DefaultRandom::new_with_seed(seed)), Arc::new(|_: &str| {})))
}

pub fn assert_valid_tour(tour: &Tour, size: usize) {
    assert!(Tour::try_new(tour.as_slice().to_vec(), size).is_ok());
}
