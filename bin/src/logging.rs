//! Log wiring for the command line tool.
//!
//! Logs go to stderr so that stdout only carries verdicts.
//! `RUST_LOG` takes precedence over `--debug`.

use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Filter used when `RUST_LOG` is not set.
/// Dependencies stay at `warn`, they are noisy at `debug`.
fn default_directives(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("warn,gverify={level},gverify_lib={level}")
}

/// Install the global subscriber.
///
/// # Errors
/// Returns an error if a subscriber has already been installed
pub fn init(debug: bool) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(debug)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(debug),
        )
        .try_init()
}
