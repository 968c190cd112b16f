//! This module contains the optimization engines and their step-wise execution protocol.
//!
//! Both engines implement `Iterator<Item = Progress>`: one `next` call runs exactly one
//! full iteration (ACO) or generation (GA) and yields a progress record. The caller may
//! interleave pulls from different engines or abandon a sequence at any step boundary
//! without corrupting engine state. A sequence is restarted only by constructing a new
//! engine instance.

mod aco;
pub use self::aco::*;

mod ga;
pub use self::ga::*;

mod race;
pub use self::race::*;

pub mod telemetry;
pub use self::telemetry::*;
