//! Logging initialization
//!
//! Diagnostics go to stderr so stdout carries only the generated command.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Normalize a user-supplied level into an `EnvFilter` directive.
///
/// Unknown values fall back to "warn".
pub fn normalize_level(log_level: &str) -> &'static str {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" | "warning" => "warn",
        "error" | "critical" => "error",
        _ => "warn",
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` takes precedence over `log_level`.
pub fn init_logging(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(normalize_level(log_level)));

    // 테스트 등에서 이미 초기화된 경우 무시
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
