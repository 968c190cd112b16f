//! This module reimports commonly used types.

pub use crate::models::generate_cities;
pub use crate::models::City;
pub use crate::models::DistanceMatrix;
pub use crate::models::Tour;

pub use crate::solver::AcoConfig;
pub use crate::solver::AcoEngine;
pub use crate::solver::GaConfig;
pub use crate::solver::GaEngine;
pub use crate::solver::HistoryEntry;
pub use crate::solver::Progress;
pub use crate::solver::Race;
pub use crate::solver::RaceConfig;
pub use crate::solver::RaceReport;
pub use crate::solver::TelemetryMode;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Timer;
pub use crate::utils::{Random, RandomGen};
