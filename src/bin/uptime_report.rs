//! Read-only report: per-entity hourly and daily uptime percentages.
//!
//! Reads the same store file the checker writes, never modifies it.

use std::path::Path;
use std::process;

use statuscheck::config::Config;
use statuscheck::persistence::load_store;
use statuscheck::summary::{daily_uptime, hourly_uptime};

fn main() {
    let config = Config::global();

    let store = match load_store(Path::new(&config.data_path)) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("uptime_report: {}", e);
            process::exit(1);
        }
    };

    if store.entities.is_empty() {
        println!("no entities recorded in {}", config.data_path);
        return;
    }

    for (name, series) in &store.entities {
        println!("\n{} ({} measurements)", name, series.len());

        println!("  by hour:");
        for (hour, ratio) in hourly_uptime(series) {
            println!("    {}  {:>6.2}%", hour, ratio * 100.0);
        }

        println!("  by day:");
        for (date, ratio) in daily_uptime(series) {
            println!("    {}  {:>6.2}%", date, ratio * 100.0);
        }
    }
}
