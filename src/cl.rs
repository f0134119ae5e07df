//! Command line interface

use std::path::PathBuf;

use clap::Parser;

/// Command line arguments for `perceptualhash` binary
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct PerceptualHashArgs {
    /// Image file path (provide at least once)
    #[clap(short = 'f', long = "filepath", required = true)]
    pub filepaths: Vec<PathBuf>,
    /// Hash grid dimension N, the hash has N² bits.
    /// N must be even.
    #[clap(short, long, default_value_t = 16)]
    pub bits: u32,
    /// Just print digests (no file paths)
    #[clap(short, long)]
    pub digest: bool,
    /// Level of logging output
    #[clap(short, long, default_value_t = log::Level::Info)]
    pub verbosity: log::Level,
}
