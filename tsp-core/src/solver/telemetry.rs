//! A module which provides the logic to collect progress of algorithm execution and
//! simple logging.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use crate::models::Tour;
use crate::utils::{Float, InfoLogger, Timer};

/// A progress record emitted by an engine once per step.
///
/// `tour` is a defensive copy of the engine's best known tour, so the caller cannot
/// corrupt engine state through it. It is `None` only when the engine terminates before
/// any tour was built, which can happen solely with zero patience; `distance` is
/// infinite in that case.
#[derive(Clone, Debug)]
pub struct Progress {
    /// Step (iteration or generation) sequence number.
    pub step: usize,
    /// Best tour found so far.
    pub tour: Option<Tour>,
    /// Length of the best tour found so far.
    pub distance: Float,
    /// True if this step improved the best known tour.
    pub improved: bool,
}

/// A history log entry: best known distance after a fully processed step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistoryEntry {
    /// Step sequence number.
    pub step: usize,
    /// Best known distance after the step.
    pub best_distance: Float,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No logging at all.
    None,
    /// Progress logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often the best known distance is logged regardless of improvements.
        log_best: usize,
    },
}

/// Provides way to track progress history and write information into log.
pub struct Telemetry {
    mode: TelemetryMode,
    time: Timer,
    history: Vec<HistoryEntry>,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode, time: Timer::start(), history: Default::default() }
    }

    /// Reports a fully processed step: appends it to the history log and, depending on
    /// the mode, writes progress information into log.
    pub fn on_step(&mut self, step: usize, best_distance: Float, improved: bool) {
        self.history.push(HistoryEntry { step, best_distance });

        let TelemetryMode::OnlyLogging { log_best, .. } = &self.mode else { return };

        if improved || step % *log_best == 0 {
            self.log(format!("[{}s] step {step}: best distance {best_distance:.4}", self.time.elapsed_secs()).as_str());
        }
    }

    /// Reports early termination caused by stagnation. The terminal record is not a
    /// processed step, so the history log is left untouched.
    pub fn on_stagnation(&self, step: usize, best_distance: Float) {
        self.log(format!("[{}s] stagnated at step {step}: best distance {best_distance:.4}", self.time.elapsed_secs()).as_str());
    }

    /// Returns the accumulated history log.
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.as_slice()
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(message)
        }
    }
}

/// Counts consecutive non-improving steps against a patience limit.
pub(crate) struct Stagnation {
    patience: usize,
    no_improve: usize,
}

impl Stagnation {
    pub fn new(patience: usize) -> Self {
        Self { patience, no_improve: 0 }
    }

    pub fn observe(&mut self, improved: bool) {
        if improved {
            self.no_improve = 0;
        } else {
            self.no_improve += 1;
        }
    }

    pub fn is_exceeded(&self) -> bool {
        self.no_improve >= self.patience
    }
}
