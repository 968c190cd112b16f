#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::models::{City, Tour};
use crate::utils::{parallel_into_collect, Float, GenericResult};

/// Stores pairwise euclidean distances between cities as an owned row-major matrix.
/// The matrix is symmetric with a zero diagonal and is read-only after construction.
pub struct DistanceMatrix {
    size: usize,
    values: Vec<Float>,
}

impl DistanceMatrix {
    /// Computes the full distance matrix for the given city set.
    pub fn new(cities: &[City]) -> GenericResult<Self> {
        if cities.len() < 2 {
            return Err("at least two cities are required".into());
        }

        let size = cities.len();
        let values = parallel_into_collect((0..size).collect(), |from| {
            (0..size).map(|to| cities[from].distance_to(&cities[to])).collect::<Vec<_>>()
        })
        .into_iter()
        .flatten()
        .collect();

        Ok(Self { size, values })
    }

    /// Returns amount of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns distance between two cities.
    pub fn distance(&self, from: usize, to: usize) -> Float {
        self.values[from * self.size + to]
    }

    /// Returns the total length of the tour interpreted as a closed cycle: the edge from
    /// the last city back to the first one is included.
    pub fn tour_distance(&self, tour: &Tour) -> Float {
        assert_eq!(tour.len(), self.size, "tour size must match distance matrix size");

        let cities = tour.as_slice();

        cities
            .iter()
            .enumerate()
            .map(|(index, &from)| self.distance(from, cities[(index + 1) % cities.len()]))
            .sum()
    }
}
