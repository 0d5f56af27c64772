use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

pub const DEFAULT_LOGLEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

/// Filter from the configured directive, then `RUST_LOG`, then the default.
///
/// Returns the rejected directive alongside the filter when it did not parse.
pub fn env_filter(directive: Option<&str>) -> (EnvFilter, Option<String>) {
    if let Some(directive) = directive {
        match EnvFilter::try_new(directive) {
            Ok(filter) => return (filter, None),
            Err(_) => {
                let fallback = EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOGLEVEL));
                return (fallback, Some(directive.to_string()));
            }
        }
    }
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOGLEVEL));
    (filter, None)
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_tracing(directive: Option<&str>) {
    let (env_filter_layer, rejected) = env_filter(directive);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_thread_ids(false);

    #[cfg(target_arch = "wasm32")]
    let fmt_layer = fmt_layer.with_writer(crate::browser::ConsoleWriter);

    let installed = tracing_subscriber::registry()
        .with(env_filter_layer)
        .with(fmt_layer)
        .try_init()
        .is_ok();

    if let Some(directive) = rejected {
        tracing::warn!(%directive, "Invalid log level, using default");
    }
    if installed {
        tracing::debug!("Tracing initialized");
    }
}
