#[cfg(test)]
#[path = "../../tests/unit/solver/race_test.rs"]
mod race_test;

use super::*;
use crate::models::Tour;
use crate::utils::{Float, GenericResult};

/// Specifies race coordination parameters.
#[derive(Clone, Debug)]
pub struct RaceConfig {
    /// Maximum amount of steps each engine is advanced per burst.
    pub batch_size: usize,
    /// Maximum distance gap at which the genetic engine is deemed to have caught up with
    /// the finished ant colony engine.
    pub tolerance: Float,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self { batch_size: 10, tolerance: 0.5 }
    }
}

/// A snapshot of both engines after one burst.
#[derive(Clone, Debug)]
pub struct RaceTick {
    /// The latest ant colony progress record, if any was produced.
    pub aco: Option<Progress>,
    /// The latest genetic progress record, if any was produced.
    pub ga: Option<Progress>,
    /// True once the ant colony sequence is exhausted.
    pub aco_finished: bool,
    /// True once the genetic sequence is exhausted or stopped by the catch-up rule.
    pub ga_finished: bool,
    /// True once the genetic engine was stopped by the catch-up rule.
    pub ga_caught_up: bool,
}

/// Final state of a single engine after the race.
#[derive(Clone, Debug)]
pub struct EngineReport {
    /// Best tour found.
    pub best_tour: Option<Tour>,
    /// Best distance found.
    pub best_distance: Float,
    /// Amount of fully processed steps.
    pub steps: usize,
    /// The accumulated history log.
    pub history: Vec<HistoryEntry>,
}

/// Final state of the whole race.
#[derive(Clone, Debug)]
pub struct RaceReport {
    /// Ant colony engine state.
    pub aco: EngineReport,
    /// Genetic engine state.
    pub ga: EngineReport,
    /// True if the genetic engine was stopped by the catch-up rule rather than by its
    /// own termination criteria.
    pub ga_caught_up: bool,
}

/// Advances both engines in bounded bursts and applies the catch-up stopping rule:
/// the ant colony engine always runs to its own termination; once it is done, the
/// genetic engine is stopped at the first step whose best distance is within the
/// tolerance of the ant colony result. A finished engine is never pulled again.
///
/// Each `next` call runs one burst and yields a snapshot of both engines; the sequence
/// ends when both engines are done.
pub struct Race {
    aco: AcoEngine,
    ga: GaEngine,
    config: RaceConfig,
    aco_last: Option<Progress>,
    ga_last: Option<Progress>,
    aco_done: bool,
    ga_done: bool,
    ga_caught_up: bool,
}

impl Race {
    /// Creates a new instance of `Race`.
    pub fn new(aco: AcoEngine, ga: GaEngine, config: RaceConfig) -> GenericResult<Self> {
        if config.batch_size == 0 {
            return Err("batch size must be positive".into());
        }

        Ok(Self {
            aco,
            ga,
            config,
            aco_last: None,
            ga_last: None,
            aco_done: false,
            ga_done: false,
            ga_caught_up: false,
        })
    }

    /// Drives the race to completion and returns the final report.
    pub fn run(mut self) -> RaceReport {
        for _ in self.by_ref() {}

        let aco_best = self.aco.best().map(|(tour, distance)| (tour.clone(), distance));
        let (ga_tour, ga_distance) = self.ga.best();

        RaceReport {
            aco: EngineReport {
                best_tour: aco_best.as_ref().map(|(tour, _)| tour.clone()),
                best_distance: aco_best.map_or(Float::INFINITY, |(_, distance)| distance),
                steps: self.aco.history().len(),
                history: self.aco.history().to_vec(),
            },
            ga: EngineReport {
                best_tour: Some(ga_tour.clone()),
                best_distance: ga_distance,
                steps: self.ga.history().len(),
                history: self.ga.history().to_vec(),
            },
            ga_caught_up: self.ga_caught_up,
        }
    }

    fn advance_aco(&mut self) {
        for _ in 0..self.config.batch_size {
            match self.aco.next() {
                Some(progress) => self.aco_last = Some(progress),
                None => {
                    self.aco_done = true;
                    break;
                }
            }
        }
    }

    fn advance_ga(&mut self) {
        let target = self.aco_last.as_ref().map_or(Float::INFINITY, |progress| progress.distance);

        for _ in 0..self.config.batch_size {
            match self.ga.next() {
                Some(progress) => {
                    let distance = progress.distance;
                    self.ga_last = Some(progress);

                    // GA may stop chasing only once ACO is already finished
                    if self.aco_done && is_caught_up(distance, target, self.config.tolerance) {
                        self.ga_done = true;
                        self.ga_caught_up = true;
                        break;
                    }
                }
                None => {
                    self.ga_done = true;
                    break;
                }
            }
        }
    }
}

impl Iterator for Race {
    type Item = RaceTick;

    fn next(&mut self) -> Option<Self::Item> {
        if self.aco_done && self.ga_done {
            return None;
        }

        if !self.aco_done {
            self.advance_aco();
        }

        if !self.ga_done {
            self.advance_ga();
        }

        Some(RaceTick {
            aco: self.aco_last.clone(),
            ga: self.ga_last.clone(),
            aco_finished: self.aco_done,
            ga_finished: self.ga_done,
            ga_caught_up: self.ga_caught_up,
        })
    }
}

fn is_caught_up(ga_distance: Float, aco_distance: Float, tolerance: Float) -> bool {
    ga_distance <= aco_distance + tolerance
}
