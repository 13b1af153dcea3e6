//! Logging utilities

use crate::config::get_env_or;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Variable consulted for the default level when `RUST_LOG` is unset
pub const LOG_LEVEL_VAR: &str = "SHELTER_LOG_LEVEL";

/// Initialize the global logging system
///
/// `RUST_LOG` wins; otherwise `SHELTER_LOG_LEVEL` (default `info`) applies.
/// Output goes to stderr so stdout stays free for command results. Calling
/// this twice is harmless.
pub fn init_logging() {
    let level = get_env_or(LOG_LEVEL_VAR, "info");
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
