use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or cannot be parsed
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the level filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_LEVEL`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global tracing subscriber (called once per Lambda container)
pub fn init() {
    // CloudWatch timestamps every line already, and stdout is reserved for message bodies
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
