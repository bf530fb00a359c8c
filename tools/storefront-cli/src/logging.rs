//! Tracing setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Crates whose events are governed by `logging.level`.
const STOREFRONT_TARGETS: [&str; 3] = ["storefront_cli", "storefront_commerce", "storefront_data"];

/// Default filter directives when `RUST_LOG` is unset.
///
/// Dependencies stay at `warn`; the storefront crates use the configured
/// level, or `debug` when verbose.
pub fn default_directives(config: &LoggingConfig, verbose: bool) -> String {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let mut directives = vec!["warn".to_string()];
    directives.extend(
        STOREFRONT_TARGETS
            .iter()
            .map(|target| format!("{}={}", target, level)),
    );
    directives.join(",")
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for `--json` output.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(config, verbose)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_use_configured_level() {
        let config = LoggingConfig {
            level: "info".to_string(),
            format: LogFormat::Text,
        };
        assert_eq!(
            default_directives(&config, false),
            "warn,storefront_cli=info,storefront_commerce=info,storefront_data=info"
        );
    }

    #[test]
    fn test_verbose_overrides_level() {
        let directives = default_directives(&LoggingConfig::default(), true);
        assert!(directives.contains("storefront_data=debug"));
        assert!(directives.starts_with("warn,"));
    }

    #[test]
    fn test_default_directives_parse() {
        let directives = default_directives(&LoggingConfig::default(), false);
        assert!(EnvFilter::try_new(directives).is_ok());
    }
}
