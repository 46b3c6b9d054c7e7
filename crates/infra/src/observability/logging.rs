use papertrail_domain::constants::DEFAULT_LOG_LEVEL;
use papertrail_domain::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG` if set, else from `config.level`.
///
/// An unparsable level falls back to the default directive.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install a global fmt subscriber writing to stderr.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes. Safe to call more than once.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = build_filter(config);

    let installed = if config.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .json()
            .flatten_event(true)
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok()
    };

    if installed {
        tracing::debug!(level = %config.level, json = config.json, "Tracing initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let config = LoggingConfig::default();
        init_tracing(&config);
        assert!(!init_tracing(&config));
        assert!(!init_tracing(&LoggingConfig { level: "debug".into(), json: true }));
    }

    #[test]
    fn bad_level_falls_back() {
        let config = LoggingConfig { level: "not a [directive".into(), json: false };
        // must not panic
        let _ = build_filter(&config);
    }
}
