#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use crate::utils::{GenericResult, Random};
use rand::prelude::SliceRandom;
use rustc_hash::FxHashSet;
use std::ops::Index;

/// A tour: permutation of city indices `0..N` interpreted as a closed cycle.
/// The permutation invariant is established at construction and cannot be broken
/// afterwards as mutation is limited to position swaps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// Creates a tour from the given city order validating it against the expected size.
    /// Fails fast on malformed input: wrong length, city index out of `[0, size)` range
    /// or duplicated cities.
    pub fn try_new(cities: Vec<usize>, size: usize) -> GenericResult<Self> {
        if cities.len() != size {
            return Err(format!("invalid tour size: expected {size}, got {}", cities.len()).into());
        }

        let mut seen = FxHashSet::with_capacity_and_hasher(size, Default::default());
        for &city in cities.iter() {
            if city >= size {
                return Err(format!("city {city} is out of [0, {size}) range").into());
            }

            if !seen.insert(city) {
                return Err(format!("city {city} is visited more than once").into());
            }
        }

        Ok(Self { cities })
    }

    /// Creates a uniformly random tour over `size` cities.
    pub fn random(size: usize, random: &dyn Random) -> Self {
        let mut cities = (0..size).collect::<Vec<_>>();
        cities.shuffle(&mut random.get_rng());

        Self { cities }
    }

    /// Creates a tour skipping validation. The caller must guarantee a valid permutation.
    pub(crate) fn new_unchecked(cities: Vec<usize>) -> Self {
        debug_assert!(Self::try_new(cities.clone(), cities.len()).is_ok());

        Self { cities }
    }

    /// Returns amount of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if the tour has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns city order as a slice.
    pub fn as_slice(&self) -> &[usize] {
        self.cities.as_slice()
    }

    /// Returns an iterator over cities in visiting order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.cities.iter().copied()
    }

    /// Swaps cities at two positions.
    pub(crate) fn swap(&mut self, first: usize, second: usize) {
        self.cities.swap(first, second);
    }
}

impl Index<usize> for Tour {
    type Output = usize;

    fn index(&self, position: usize) -> &Self::Output {
        &self.cities[position]
    }
}
