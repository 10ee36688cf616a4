//! Log subscriber installation
//!
//! The runtime only emits `tracing` events; nothing is printed unless the
//! program installs a subscriber. `rl_runtime_init` does so via
//! [`init_logging`], writing to stderr so program output on stdout stays clean.

use crate::config::RuntimeConfig;
use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber filtered by `config.log_filter`
///
/// Returns false if a global subscriber was already installed (by an earlier
/// call or by the embedding program). An unparseable filter falls back to
/// `warn`.
pub fn init_logging(config: &RuntimeConfig) -> bool {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_is_refused() {
        let config = RuntimeConfig::default().with_log_filter("not a [valid filter");
        // The first call may or may not win depending on test order
        let _ = init_logging(&config);
        assert!(!init_logging(&config));
    }
}
