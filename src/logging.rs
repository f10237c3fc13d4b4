use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Without debug logging the filter is pinned to `info` so a stray
/// `RUST_LOG` in the environment cannot flood the console. With debug
/// logging enabled `RUST_LOG` wins and falls back to `debug` for this
/// crate only.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,pinned_notes=debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .try_init();
}
