//! Tracing setup for the `hookgen` binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Crates whose logs a plain level in `HOOKGEN_LOG` applies to.
const LOG_TARGETS: [&str; 2] = ["hookgen", "hookgen_core"];

/// Install the stderr fmt subscriber.
///
/// `HOOKGEN_LOG` controls the filter: a plain level ("trace", "debug", "info",
/// "warn", "error") scoped to the hookgen crates, or a full tracing filter spec
/// like "hookgen_core=debug".
pub fn init_tracing() {
    let filter = filter_spec(std::env::var("HOOKGEN_LOG").ok().as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn filter_spec(value: Option<&str>) -> String {
    match value {
        Some(level) if is_plain_level(level) => scoped(level),
        Some(spec) => spec.to_string(),
        None => scoped("info"),
    }
}

fn scoped(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
