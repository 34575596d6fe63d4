//! Logging bootstrap

use tracing_subscriber::EnvFilter;

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_ENV: &str = "CHIRPY_LOG";

/// Pick the filter directive: `CHIRPY_LOG`, then `-v` count, then config.
pub fn filter_directive(env_value: Option<&str>, verbosity: u8, configured: &str) -> String {
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return value.to_string();
    }

    match verbosity {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the stderr subscriber. Later calls leave the first one in place.
pub fn init_logging(verbosity: u8, configured: &str) {
    let env_value = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(env_value.as_deref(), verbosity, configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_wins() {
        assert_eq!(filter_directive(Some("chirpy=trace"), 2, "warn"), "chirpy=trace");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        assert_eq!(filter_directive(Some("  "), 0, "error"), "error");
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(filter_directive(None, 0, "warn"), "warn");
        assert_eq!(filter_directive(None, 1, "warn"), "info");
        assert_eq!(filter_directive(None, 2, "warn"), "debug");
        assert_eq!(filter_directive(None, 5, "warn"), "trace");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging(0, "warn");
        init_logging(2, "not a valid [directive");
    }
}
