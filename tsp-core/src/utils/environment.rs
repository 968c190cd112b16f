use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// Specifies a logger type which outputs progress information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
pub struct Environment {
    /// A random generator.
    pub random: Arc<dyn Random>,
    /// A logger used to output information.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }

    /// Creates a new instance of `Environment` with a seeded random generator.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_with_seed(seed)), ..Self::default() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { random: Arc::new(DefaultRandom::default()), logger: Arc::new(|msg: &str| println!("{msg}")) }
    }
}
