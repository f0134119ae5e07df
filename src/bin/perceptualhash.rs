//! perceptualhash main binary

use anyhow::Context as _;
use clap::Parser as _;
use perceptualhash::{HashStatus, cl, hash_and_print};

fn main() -> anyhow::Result<HashStatus> {
    // Parse CL args
    let cl_args = cl::PerceptualHashArgs::parse();

    // Init logger
    simple_logger::init_with_level(cl_args.verbosity).context("Failed to setup logger")?;

    // Run
    hash_and_print(&cl_args, &mut std::io::stdout().lock())
}
