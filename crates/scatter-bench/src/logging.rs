//! Diagnostic logging setup.
//!
//! Results go to stdout; diagnostics go to stderr through `tracing`, so
//! the two never interleave in a captured result stream.

use tracing_subscriber::{fmt, prelude::*};

use crate::config::BenchConfig;
use crate::error::HarnessError;

/// Install a stderr `fmt` subscriber filtered by `config.log_filter`.
///
/// # Errors
///
/// Returns [`HarnessError::Config`] for an unparsable filter and
/// [`HarnessError::Logging`] if a global subscriber is already set.
pub fn init(config: &BenchConfig) -> Result<(), HarnessError> {
    let filter = config.env_filter()?;
    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| HarnessError::Logging {
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails_cleanly() {
        let config = BenchConfig::with_record_count(1);
        // Another test in this binary may have won the race; either way the
        // second call must report rather than panic.
        let _ = init(&config);
        assert!(matches!(init(&config), Err(HarnessError::Logging { .. })));
    }

    #[test]
    fn bad_filter_is_config_error() {
        let config = BenchConfig {
            log_filter: "scatter=notalevel".to_string(),
            ..BenchConfig::with_record_count(1)
        };
        assert!(matches!(init(&config), Err(HarnessError::Config(_))));
    }
}
