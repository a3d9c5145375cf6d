//! Command line interface for the `frame_filter` diagnostic binary.
//!
//! Loads a filter chain definition and prints how the chain will be
//! traversed.

use std::path::PathBuf;

use clap::Parser;

/// Command line arguments for the `frame_filter` binary.
#[derive(Debug, Parser)]
#[command(
    name = "frame_filter",
    version,
    about = "Inspect a frame filter chain definition"
)]
pub struct Cli {
    /// Path to a JSON chain definition.
    #[arg(short, long)]
    pub config: PathBuf,

    /// Print each filter's settings below the chain rendering.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn parses_config_option() {
        let cli = Cli::parse_from(["frame_filter", "--config", "chain.json"]);
        assert_eq!(cli.config.to_str(), Some("chain.json"));
        assert!(!cli.verbose);
    }

    #[test]
    fn config_is_required() {
        assert!(Cli::try_parse_from(["frame_filter"]).is_err());
    }
}
