use tracing::Level;
use tracing_subscriber::prelude::*;

pub(crate) fn init() {
    // set by GitHub Actions when step debug logging is enabled
    let own_level = if std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1") {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let tracing_layer = tracing_subscriber::fmt::layer();
    let filter = tracing_subscriber::filter::Targets::new()
        .with_target(env!("CARGO_CRATE_NAME"), own_level)
        .with_target("octocrab", Level::DEBUG)
        .with_default(Level::INFO);

    tracing_subscriber::registry()
        .with(tracing_layer)
        .with(filter)
        .init();
}
