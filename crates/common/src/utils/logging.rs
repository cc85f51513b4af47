use std::io;
use tracing_subscriber::{fmt, EnvFilter};

use configs::{LogFormat, LoggingConfig};

const DEFAULT_FILTER: &str = "info,sea_orm=warn,sqlx=warn";

fn env_filter_or(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize tracing subscriber with sensible defaults and stdout writer.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,sea_orm=warn,sqlx=warn`
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter_or(DEFAULT_FILTER))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize tracing subscriber with JSON structured output.
/// - Respects `RUST_LOG` if set, defaults to `info` with store-level debug
/// - Writes to stdout for consistent container logging behavior
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter_or("info,service::service_provider=debug"))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize tracing from the `[logging]` section of the app config.
/// `RUST_LOG` still wins over `logging.filter`.
pub fn init_logging(cfg: &LoggingConfig) {
    let filter = env_filter_or(cfg.filter.as_deref().unwrap_or(DEFAULT_FILTER));
    let builder = fmt().with_env_filter(filter).with_target(cfg.with_target);
    let _ = match cfg.format {
        LogFormat::Compact => builder.compact().with_writer(io::stdout).try_init(),
        LogFormat::Json => builder.json().with_writer(io::stdout).try_init(),
    };
}

/// Test-friendly subscriber: output captured by the libtest harness.
/// Safe to call from every test; only the first call installs it.
pub fn init_test_logging() {
    let _ = fmt()
        .with_env_filter(env_filter_or("debug,sea_orm=info,sqlx=warn"))
        .with_test_writer()
        .compact()
        .try_init();
}
