// src/bin/amplicon-coverage.rs
use clap::Parser;
use depth_tide::cli::{CoverageCli, RunConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = CoverageCli::parse();

    let config = match RunConfig::from_cli(&opts) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = depth_tide::run(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
