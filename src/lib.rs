//! Blockhash perceptual image hashing, and internal API exposed for the `perceptualhash` binary

use std::{
    io::Write,
    path::Path,
    process::{ExitCode, Termination},
};

use anyhow::Context as _;

pub use crate::{
    config::{DigestWidth, HashConfig},
    error::HashError,
    hash::Blockhash,
    hex::encode_hex,
    sampler::{ColorModel, RasterImage},
};

pub mod cl;
mod config;
mod error;
mod grid;
mod hash;
mod hex;
mod quantize;
mod sampler;

/// Status of a hashing run
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HashStatus {
    /// All files were hashed
    AllHashed,
    /// At least one file could not be hashed
    SomeFailed,
}

impl Termination for HashStatus {
    fn report(self) -> ExitCode {
        match self {
            HashStatus::AllHashed => ExitCode::SUCCESS,
            HashStatus::SomeFailed => ExitCode::FAILURE,
        }
    }
}

/// Decode an image file and compute its blockhash digest
pub fn hash_file(path: &Path, config: HashConfig) -> anyhow::Result<String> {
    let img = image::ImageReader::open(path)
        .and_then(image::ImageReader::with_guessed_format)
        .with_context(|| format!("Failed to read image {path:?}"))?
        .decode()
        .with_context(|| format!("Failed to decode image {path:?}"))?;
    let mut hash = Blockhash::with_config(img, config)
        .with_context(|| format!("Failed to setup hash for {path:?}"))?;
    let digest = hash
        .digest()
        .with_context(|| format!("Failed to compute hash for {path:?}"))?;
    Ok(digest.to_owned())
}

/// Hash all files from command line, and write one line per hashed file
pub fn hash_and_print<W>(args: &cl::PerceptualHashArgs, out: &mut W) -> anyhow::Result<HashStatus>
where
    W: Write,
{
    let config = HashConfig::new(args.bits).context("Invalid hash bit length")?;
    let names: Vec<_> = args
        .filepaths
        .iter()
        .map(|path| path.to_string_lossy())
        .collect();
    // paths are padded by byte length
    let width = names.iter().map(|name| name.len()).max().unwrap_or(0);

    let mut status = HashStatus::AllHashed;
    for (path, name) in args.filepaths.iter().zip(&names) {
        match hash_file(path, config) {
            Ok(digest) => {
                log::debug!("{path:?}: {digest}");
                if args.digest {
                    writeln!(out, "{digest}")?;
                } else {
                    let pad = " ".repeat(width - name.len());
                    writeln!(out, "{name}{pad} {digest}")?;
                }
            }
            Err(err) => {
                log::error!("{err:#}");
                status = HashStatus::SomeFailed;
            }
        }
    }
    Ok(status)
}
