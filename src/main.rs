//! Diagnostic binary for `frame_filter`.
//!
//! Loads a JSON chain definition, builds it and prints the traversal order.

mod cli;

use std::fs;

use clap::Parser;
use frame_filter::ChainConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Applications embedding the library should install their own subscriber.
    tracing_subscriber::fmt::init();

    let cli = cli::Cli::parse();
    let raw = fs::read_to_string(&cli.config)?;
    let config: ChainConfig = serde_json::from_str(&raw)?;
    let chain = config.build()?;

    println!("{chain}");
    if cli.verbose {
        for filter in &config.filters {
            println!("  {filter}");
        }
    }
    Ok(())
}
