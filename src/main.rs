use std::path::Path;
use std::process;

use statuscheck::clock::SystemClock;
use statuscheck::config::Config;
use statuscheck::pipeline;
use statuscheck::source::StaticStatusSource;
use tracing_subscriber::EnvFilter;

// ========================================
// MAIN ENTRY POINT
// ========================================

/// One invocation = one check cycle. No flags, no arguments; configuration
/// comes from the environment (see `config.rs`).
fn main() {
    let config = Config::global();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    let clock = SystemClock;
    let source = StaticStatusSource::default();

    if let Err(e) = pipeline::run(Path::new(&config.data_path), &clock, &source) {
        tracing::error!("check run failed: {}", e);
        process::exit(1);
    }
}
