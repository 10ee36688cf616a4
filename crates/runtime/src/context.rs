//! Top-level runtime context
//!
//! Owns the configuration and an explicit [`RandomGenerator`]. Hosts that
//! embed the runtime (or generated code that wants reproducible draws) hold
//! one of these instead of relying on the thread-local default generator.
//!
//! ```
//! use redline_runtime::{RuntimeConfig, RuntimeContext};
//!
//! let mut a = RuntimeContext::new(RuntimeConfig::default().with_seed(9));
//! let mut b = RuntimeContext::new(RuntimeConfig::default().with_seed(9));
//! assert_eq!(a.random_int(1, 100), b.random_int(1, 100));
//! ```

use crate::config::RuntimeConfig;
use crate::logging::init_logging;
use crate::random::RandomGenerator;

#[derive(Debug)]
pub struct RuntimeContext {
    config: RuntimeConfig,
    rng: RandomGenerator,
}

impl RuntimeContext {
    /// Build a context; the generator is seeded from `config.seed` or the clock
    pub fn new(config: RuntimeConfig) -> Self {
        let rng = RandomGenerator::from_config(&config);
        Self { config, rng }
    }

    /// Build a context from `REDLINE_*` environment variables
    pub fn from_env() -> Self {
        Self::new(RuntimeConfig::from_env())
    }

    /// Use an existing generator instead of seeding a new one
    pub fn with_rng(config: RuntimeConfig, rng: RandomGenerator) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn rng_mut(&mut self) -> &mut RandomGenerator {
        &mut self.rng
    }

    /// Install the stderr log subscriber described by this context's config
    pub fn init_logging(&self) -> bool {
        init_logging(&self.config)
    }

    /// Uniform integer over `[min, max]`
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.int(min, max)
    }

    /// Uniform float over `[0.0, 1.0)`
    pub fn random_float(&mut self) -> f64 {
        self.rng.float()
    }
}

impl Default for RuntimeContext {
    fn default() -> Self {
        Self::new(RuntimeConfig::default())
    }
}
