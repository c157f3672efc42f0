use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// Specifies a logger type which outputs information messages.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific entities shared by engines and tooling.
pub struct Environment {
    /// A random generator.
    pub random: Arc<dyn Random + Send + Sync>,
    /// A logger used to output information messages.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random + Send + Sync>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()), Arc::new(|msg: &str| println!("{msg}")))
    }
}
