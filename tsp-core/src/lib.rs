//! This crate exposes two independent metaheuristics for the Traveling Salesman Problem,
//! a Genetic Algorithm and Ant Colony Optimization, together with a resumable step-wise
//! execution protocol which lets an external driver observe and race them incrementally.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
