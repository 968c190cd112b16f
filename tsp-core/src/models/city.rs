#[cfg(test)]
#[path = "../../tests/unit/models/city_test.rs"]
mod city_test;

use crate::utils::{Float, GenericResult, Random};

/// Represents a city as a point in two dimensional euclidean space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct City {
    /// A x coordinate.
    pub x: Float,
    /// A y coordinate.
    pub y: Float,
}

impl City {
    /// Creates a new instance of `City`.
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Returns euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> Float {
        let dx = self.x - other.x;
        let dy = self.y - other.y;

        (dx * dx + dy * dy).sqrt()
    }
}

/// Generates cities uniformly within a `width` x `height` rectangle keeping the given
/// margin free on all sides.
pub fn generate_cities(
    count: usize,
    width: Float,
    height: Float,
    margin: Float,
    random: &dyn Random,
) -> GenericResult<Vec<City>> {
    if count < 2 {
        return Err("at least two cities are required".into());
    }

    if margin < 0. || 2. * margin >= width || 2. * margin >= height {
        return Err(format!("margin {margin} does not fit into {width}x{height} bounds").into());
    }

    Ok((0..count)
        .map(|_| City::new(random.uniform_real(margin, width - margin), random.uniform_real(margin, height - margin)))
        .collect())
}
