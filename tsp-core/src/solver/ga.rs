#[cfg(test)]
#[path = "../../tests/unit/solver/ga_test.rs"]
mod ga_test;

use super::*;
use crate::models::{DistanceMatrix, Tour};
use crate::utils::{compare_floats_refs, parallel_collect, Environment, Float, GenericResult, Random};
use std::sync::Arc;

/// Specifies Genetic Algorithm engine parameters.
#[derive(Clone, Debug)]
pub struct GaConfig {
    /// Amount of tours kept in the population.
    pub population_size: usize,
    /// Maximum amount of generations.
    pub generations: usize,
    /// Probability to mutate a child tour.
    pub mutation_rate: Float,
    /// Maximum consecutive non-improving generations tolerated before early termination.
    pub patience: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self { population_size: 50, generations: 500, mutation_rate: 0.05, patience: 200 }
    }
}

/// A Genetic Algorithm engine: evolutionary search over tour permutations with elitism.
/// Implements the step-wise execution protocol, one full generation per `next`.
pub struct GaEngine {
    matrix: Arc<DistanceMatrix>,
    config: GaConfig,
    environment: Arc<Environment>,
    telemetry: Telemetry,
    stagnation: Stagnation,
    population: Vec<Tour>,
    best_tour: Tour,
    best_distance: Float,
    step: usize,
    exhausted: bool,
}

impl GaEngine {
    /// Creates a new instance of `GaEngine` with a random initial population.
    pub fn new(
        matrix: Arc<DistanceMatrix>,
        config: GaConfig,
        telemetry_mode: TelemetryMode,
        environment: Arc<Environment>,
    ) -> GenericResult<Self> {
        if config.population_size == 0 {
            return Err("population size must be positive".into());
        }

        if !(0. ..=1.).contains(&config.mutation_rate) {
            return Err(format!("mutation rate must be in [0, 1] range, got {}", config.mutation_rate).into());
        }

        let size = matrix.size();
        let population = (0..config.population_size)
            .map(|_| Tour::random(size, environment.random.as_ref()))
            .collect::<Vec<_>>();

        let (best_tour, best_distance) = find_best(matrix.as_ref(), population.as_slice());

        Ok(Self {
            matrix,
            environment,
            telemetry: Telemetry::new(telemetry_mode),
            stagnation: Stagnation::new(config.patience),
            population,
            best_tour,
            best_distance,
            step: 0,
            exhausted: false,
            config,
        })
    }

    /// Returns the best tour found so far with its distance.
    pub fn best(&self) -> (&Tour, Float) {
        (&self.best_tour, self.best_distance)
    }

    /// Returns the accumulated history log.
    pub fn history(&self) -> &[HistoryEntry] {
        self.telemetry.history()
    }

    /// Breeds the next generation: the best known tour survives unchanged, the remaining
    /// slots are filled with mutated crossover children of random parents.
    fn breed(&self) -> Vec<Tour> {
        let random = self.environment.random.as_ref();
        let last_index = self.population.len() as i32 - 1;

        let mut next_population = Vec::with_capacity(self.config.population_size);
        next_population.push(self.best_tour.clone());

        while next_population.len() < self.config.population_size {
            let parent1 = &self.population[random.uniform_int(0, last_index) as usize];
            let parent2 = &self.population[random.uniform_int(0, last_index) as usize];

            let mut child = crossover(parent1, parent2, random);
            mutate(&mut child, self.config.mutation_rate, random);

            next_population.push(child);
        }

        next_population
    }
}

impl Iterator for GaEngine {
    type Item = Progress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted || self.step >= self.config.generations {
            self.exhausted = true;
            return None;
        }

        if self.stagnation.is_exceeded() {
            self.exhausted = true;
            self.telemetry.on_stagnation(self.step, self.best_distance);

            return Some(Progress {
                step: self.step,
                tour: Some(self.best_tour.clone()),
                distance: self.best_distance,
                improved: false,
            });
        }

        self.population = self.breed();

        let (generation_best, generation_distance) = find_best(self.matrix.as_ref(), self.population.as_slice());

        let improved = generation_distance < self.best_distance;
        if improved {
            self.best_tour = generation_best;
            self.best_distance = generation_distance;
        }

        self.stagnation.observe(improved);

        let step = self.step;
        self.step += 1;
        self.telemetry.on_step(step, self.best_distance, improved);

        Some(Progress { step, tour: Some(self.best_tour.clone()), distance: self.best_distance, improved })
    }
}

/// Returns a copy of the shortest tour in the population with its distance. The first
/// minimum wins on ties.
fn find_best(matrix: &DistanceMatrix, population: &[Tour]) -> (Tour, Float) {
    let distances = parallel_collect(population, |tour| matrix.tour_distance(tour));

    let (index, &distance) = distances
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| compare_floats_refs(a, b))
        .expect("population cannot be empty");

    (population[index].clone(), distance)
}

/// Produces a child via order preserving partial crossover with random distinct cut points.
fn crossover(parent1: &Tour, parent2: &Tour, random: &dyn Random) -> Tour {
    let (a, b) = pick_cut_points(parent1.len(), random);

    crossover_with_cut_points(parent1, parent2, a, b)
}

/// Copies the `[a, b)` segment of the first parent into the child at the same positions,
/// then fills the remaining positions left to right with the second parent's cities in
/// their original order, skipping cities already present. Any `a <= b <= N` is valid,
/// including the degenerate empty segment where the child is built entirely from the
/// second parent's order.
fn crossover_with_cut_points(parent1: &Tour, parent2: &Tour, a: usize, b: usize) -> Tour {
    const UNSET: usize = usize::MAX;

    let size = parent1.len();
    let mut child = vec![UNSET; size];
    let mut taken = vec![false; size];

    for position in a..b {
        let city = parent1[position];
        child[position] = city;
        taken[city] = true;
    }

    let mut insert_at = 0;
    for city in parent2.iter() {
        if taken[city] {
            continue;
        }

        while child[insert_at] != UNSET {
            insert_at += 1;
        }

        child[insert_at] = city;
    }

    Tour::new_unchecked(child)
}

/// Swaps two random distinct positions with the given probability.
fn mutate(child: &mut Tour, mutation_rate: Float, random: &dyn Random) {
    if random.is_hit(mutation_rate) {
        let (first, second) = pick_cut_points(child.len(), random);
        child.swap(first, second);
    }
}

/// Picks two distinct positions in `0..size` and returns them in ascending order.
fn pick_cut_points(size: usize, random: &dyn Random) -> (usize, usize) {
    let first = random.uniform_int(0, size as i32 - 1) as usize;
    let mut second = random.uniform_int(0, size as i32 - 2) as usize;
    if second >= first {
        second += 1;
    }

    (first.min(second), first.max(second))
}
