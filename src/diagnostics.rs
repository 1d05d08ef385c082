//! Tracing subscriber for the sink's own lifecycle events.
//!
//! The sink reports file opens, retention removals, flush-thread start and
//! stop, and write errors it swallows as [`tracing`] events. Applications
//! with their own subscriber receive them there; otherwise
//! [`init_diagnostics`] installs a minimal stderr one.
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostics filter, e.g. `daylog=debug`.
pub const DIAGNOSTICS_ENV: &str = "DAYLOG_LOG";

/// Filter used when [`DIAGNOSTICS_ENV`] is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global subscriber printing sink diagnostics to stderr.
///
/// Must be called at most once, before the first sink is created. Returns
/// `false` if another global subscriber is already installed.
pub fn init_diagnostics() -> bool {
    use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

    let directives = std::env::var(DIAGNOSTICS_ENV).ok();
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(true);

    tracing_subscriber::registry()
        .with(filter_from(directives.as_deref()))
        .with(stderr_layer)
        .try_init()
        .is_ok()
}
