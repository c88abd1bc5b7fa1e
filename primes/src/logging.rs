use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for the prime list.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // A second init (e.g. from tests) is ignored
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
