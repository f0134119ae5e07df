//! Blockhash computation

use crate::{
    config::HashConfig,
    error::HashError,
    grid::BlockGrid,
    hex::encode_hex,
    quantize::quantize,
    sampler::{PixelSampler, RasterImage},
};

/// Blockhash of a single image, computed once on first request
#[derive(Debug)]
pub struct Blockhash<I> {
    /// Source image
    image: I,
    /// Hash parameters
    config: HashConfig,
    /// Pixel sampler matching the image color model
    sampler: PixelSampler,
    /// Cached hex digest
    digest: Option<String>,
}

impl<I: RasterImage> Blockhash<I> {
    /// Prepare hashing of an image with a N×N block grid
    pub fn new(image: I, grid_dimension: u32) -> Result<Self, HashError> {
        Self::with_config(image, HashConfig::new(grid_dimension)?)
    }

    /// Prepare hashing of an image with custom configuration
    pub fn with_config(image: I, config: HashConfig) -> Result<Self, HashError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(HashError::InvalidConfiguration(format!(
                "can not hash empty {width}x{height} image"
            )));
        }
        let sampler = PixelSampler::for_image(&image)?;
        Ok(Self {
            image,
            config,
            sampler,
            digest: None,
        })
    }

    /// Compute the hash bits, in grid row major order
    fn bits(&self) -> Result<Vec<u8>, HashError> {
        let grid =
            BlockGrid::accumulate(&self.image, self.sampler, self.config.grid_dimension())?;
        quantize(grid.values(), grid.block_area())
    }

    /// Get hex digest, computing it on first call
    pub fn digest(&mut self) -> Result<&str, HashError> {
        let digest = match self.digest.take() {
            Some(digest) => {
                log::trace!("Reusing cached blockhash {digest}");
                digest
            }
            None => {
                let bits = self.bits()?;
                let digest = encode_hex(&bits, self.config.nominal_bits())?;
                log::debug!(
                    "Computed {n}x{n} blockhash {digest}",
                    n = self.config.grid_dimension()
                );
                digest
            }
        };
        Ok(self.digest.insert(digest).as_str())
    }
}
