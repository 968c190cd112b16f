//! This module contains the problem data model: cities, the pairwise distance matrix
//! and validated tours over it.

mod city;
pub use self::city::*;

mod matrix;
pub use self::matrix::*;

mod tour;
pub use self::tour::*;
