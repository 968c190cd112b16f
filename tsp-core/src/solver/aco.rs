#[cfg(test)]
#[path = "../../tests/unit/solver/aco_test.rs"]
mod aco_test;

use super::*;
use crate::models::{DistanceMatrix, Tour};
use crate::utils::{parallel_collect, Environment, Float, GenericResult};
use std::sync::Arc;

/// Keeps a small constant added to edge distances when computing desirability, so that
/// coincident cities do not cause a division by zero.
const DISTANCE_EPSILON: Float = 1e-6;

/// Specifies Ant Colony Optimization engine parameters.
#[derive(Clone, Debug)]
pub struct AcoConfig {
    /// Amount of ants constructing tours every iteration.
    pub ants: usize,
    /// Maximum amount of iterations.
    pub iterations: usize,
    /// Pheromone importance exponent.
    pub alpha: Float,
    /// Distance importance exponent.
    pub beta: Float,
    /// Pheromone evaporation rate.
    pub rho: Float,
    /// Pheromone deposit constant.
    pub q: Float,
    /// Maximum consecutive non-improving iterations tolerated before early termination.
    pub patience: usize,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self { ants: 50, iterations: 500, alpha: 1., beta: 2., rho: 0.1, q: 1., patience: 200 }
    }
}

/// An Ant Colony Optimization engine: pheromone guided probabilistic construction of
/// tours. Implements the step-wise execution protocol, one full iteration per `next`.
pub struct AcoEngine {
    matrix: Arc<DistanceMatrix>,
    config: AcoConfig,
    environment: Arc<Environment>,
    telemetry: Telemetry,
    stagnation: Stagnation,
    pheromone: Vec<Float>,
    best_tour: Option<Tour>,
    best_distance: Float,
    step: usize,
    exhausted: bool,
}

impl AcoEngine {
    /// Creates a new instance of `AcoEngine`.
    pub fn new(
        matrix: Arc<DistanceMatrix>,
        config: AcoConfig,
        telemetry_mode: TelemetryMode,
        environment: Arc<Environment>,
    ) -> GenericResult<Self> {
        if config.ants == 0 {
            return Err("ant count must be positive".into());
        }

        if !(0. ..=1.).contains(&config.rho) {
            return Err(format!("evaporation rate must be in [0, 1] range, got {}", config.rho).into());
        }

        let size = matrix.size();

        Ok(Self {
            matrix,
            environment,
            telemetry: Telemetry::new(telemetry_mode),
            stagnation: Stagnation::new(config.patience),
            pheromone: vec![1.; size * size],
            best_tour: None,
            best_distance: Float::INFINITY,
            step: 0,
            exhausted: false,
            config,
        })
    }

    /// Returns the best tour found so far with its distance.
    pub fn best(&self) -> Option<(&Tour, Float)> {
        self.best_tour.as_ref().map(|tour| (tour, self.best_distance))
    }

    /// Returns the accumulated history log.
    pub fn history(&self) -> &[HistoryEntry] {
        self.telemetry.history()
    }

    /// Builds a single ant tour: a randomized greedy walk from a random start city.
    fn construct_tour(&self) -> Tour {
        let size = self.matrix.size();
        let random = self.environment.random.as_ref();

        let start = random.uniform_int(0, size as i32 - 1) as usize;
        let mut cities = Vec::with_capacity(size);
        let mut visited = vec![false; size];
        let mut current = start;

        cities.push(start);
        visited[start] = true;

        while cities.len() < size {
            let next = self.select_next(current, &visited);
            cities.push(next);
            visited[next] = true;
            current = next;
        }

        Tour::new_unchecked(cities)
    }

    /// Selects the next city by roulette-wheel sampling proportional to desirability.
    /// Zero total desirability (numeric underflow) falls back to a uniform choice.
    fn select_next(&self, current: usize, visited: &[bool]) -> usize {
        let size = self.matrix.size();
        let random = self.environment.random.as_ref();

        let mut candidates = Vec::with_capacity(size);
        let mut total = 0.;
        for next in 0..size {
            if visited[next] {
                continue;
            }

            let tau = self.pheromone[current * size + next].powf(self.config.alpha);
            let eta = (1. / (self.matrix.distance(current, next) + DISTANCE_EPSILON)).powf(self.config.beta);
            let desirability = tau * eta;

            total += desirability;
            candidates.push((next, desirability));
        }

        if total == 0. {
            let index = random.uniform_int(0, candidates.len() as i32 - 1) as usize;
            return candidates[index].0;
        }

        let threshold = random.uniform_real(0., 1.) * total;
        let mut cumulative = 0.;
        for &(next, desirability) in candidates.iter() {
            cumulative += desirability;
            if cumulative >= threshold {
                return next;
            }
        }

        candidates.last().expect("no unvisited cities left").0
    }

    /// Evaporates pheromone globally, then deposits on every edge traversed by the ants.
    /// The pheromone matrix stays symmetric: both edge directions get the deposit.
    fn update_pheromone(&mut self, tours: &[Tour], distances: &[Float]) {
        let size = self.matrix.size();

        self.pheromone.iter_mut().for_each(|value| *value *= 1. - self.config.rho);

        for (tour, &distance) in tours.iter().zip(distances.iter()) {
            let deposit = self.config.q / distance;
            for (index, from) in tour.iter().enumerate() {
                let to = tour[(index + 1) % size];
                self.pheromone[from * size + to] += deposit;
                self.pheromone[to * size + from] += deposit;
            }
        }
    }
}

impl Iterator for AcoEngine {
    type Item = Progress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted || self.step >= self.config.iterations {
            self.exhausted = true;
            return None;
        }

        if self.stagnation.is_exceeded() {
            self.exhausted = true;
            self.telemetry.on_stagnation(self.step, self.best_distance);

            return Some(Progress {
                step: self.step,
                tour: self.best_tour.clone(),
                distance: self.best_distance,
                improved: false,
            });
        }

        let tours = (0..self.config.ants).map(|_| self.construct_tour()).collect::<Vec<_>>();
        let matrix = self.matrix.as_ref();
        let distances = parallel_collect(&tours, |tour| matrix.tour_distance(tour));

        let mut improved = false;
        for (tour, &distance) in tours.iter().zip(distances.iter()) {
            if distance < self.best_distance {
                self.best_distance = distance;
                self.best_tour = Some(tour.clone());
                improved = true;
            }
        }

        self.stagnation.observe(improved);
        self.update_pheromone(&tours, &distances);

        let step = self.step;
        self.step += 1;
        self.telemetry.on_step(step, self.best_distance, improved);

        Some(Progress { step, tour: self.best_tour.clone(), distance: self.best_distance, improved })
    }
}
