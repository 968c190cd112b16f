//! Serialization of solver results: CSV history logs and JSON summaries.

#[cfg(test)]
#[path = "../tests/unit/export_test.rs"]
mod export_test;

use serde::Serialize;
use std::io::Write;
use tsp_core::prelude::*;

/// History index column label used by the genetic engine.
pub const GA_INDEX_LABEL: &str = "Generation";
/// History index column label used by the ant colony engine.
pub const ACO_INDEX_LABEL: &str = "Iteration";

/// Final state of a single engine prepared for serialization.
#[derive(Serialize)]
pub struct EngineSummary {
    /// Engine name.
    pub algorithm: String,
    /// Amount of cities in the problem.
    pub cities: usize,
    /// Amount of fully processed steps.
    pub steps: usize,
    /// Best distance found.
    pub best_distance: Float,
    /// Best tour found as city order.
    pub best_tour: Option<Vec<usize>>,
}

/// Final state of the race prepared for serialization.
#[derive(Serialize)]
pub struct RaceSummary {
    /// Catch-up distance tolerance used.
    pub tolerance: Float,
    /// True if the genetic engine was stopped by the catch-up rule.
    pub ga_caught_up: bool,
    /// Ant colony engine state.
    pub aco: EngineSummary,
    /// Genetic engine state.
    pub ga: EngineSummary,
}

/// Creates an engine summary from its final state.
pub fn create_engine_summary(
    algorithm: &str,
    cities: usize,
    steps: usize,
    best_tour: Option<&Tour>,
    best_distance: Float,
) -> EngineSummary {
    EngineSummary {
        algorithm: algorithm.to_string(),
        cities,
        steps,
        best_distance,
        best_tour: best_tour.map(|tour| tour.as_slice().to_vec()),
    }
}

/// Writes the accumulated history log as a two column CSV table.
pub fn write_history<W: Write>(writer: W, index_label: &str, history: &[HistoryEntry]) -> GenericResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record([index_label, "BestDistance"]).map_err(map_csv_error)?;

    for entry in history {
        writer
            .write_record([entry.step.to_string(), entry.best_distance.to_string()])
            .map_err(map_csv_error)?;
    }

    writer.flush()?;

    Ok(())
}

/// Writes a summary as pretty printed JSON.
pub fn write_result<W: Write, S: Serialize>(writer: W, summary: &S) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, summary).map_err(|err| GenericError::from(err.to_string()))
}

fn map_csv_error(error: csv::Error) -> GenericError {
    error.to_string().into()
}
