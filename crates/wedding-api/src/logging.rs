//! Tracing subscriber setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ApiConfig;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Initialize tracing: JSON for CloudWatch, plain text for local runs.
///
/// JSON is used when `LOG_FORMAT=json`, or when `LOG_FORMAT` is unset and the
/// process runs inside Lambda or in production.
pub fn init_tracing(config: &ApiConfig) {
    let use_json = match std::env::var("LOG_FORMAT") {
        Ok(format) => format.eq_ignore_ascii_case("json"),
        Err(_) => config.is_production() || std::env::var("AWS_LAMBDA_FUNCTION_NAME").is_ok(),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_current_span(false))
            .with(env_filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing already initialized: {}", e);
    }
}
