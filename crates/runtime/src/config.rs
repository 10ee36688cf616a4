//! Runtime configuration
//!
//! ## Configuration (Environment Variables)
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `REDLINE_SEED` | unset | Fixed `u64` seed for the default random generator |
//! | `REDLINE_LOG` | `warn` | `tracing` filter directive for runtime logs |
//!
//! ## Example
//!
//! ```bash
//! # Reproduce a run's random draws and see why the runtime made its choices
//! REDLINE_SEED=42 REDLINE_LOG=redline_runtime=debug ./my-program
//! ```

pub const SEED_ENV: &str = "REDLINE_SEED";
pub const LOG_ENV: &str = "REDLINE_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Fixed seed for random generators; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Filter directive handed to the log subscriber
    pub log_filter: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables
    ///
    /// Unparseable or empty values fall back to the defaults.
    pub fn from_env() -> Self {
        let seed = std::env::var(SEED_ENV)
            .ok()
            .and_then(|s| s.trim().parse().ok());

        let log_filter = std::env::var(LOG_ENV)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self { seed, log_filter }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
