//! Hash configuration

use crate::error::HashError;

/// Nominal bit count the digest is padded for
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum DigestWidth {
    /// One bit per grid block, so the digest always has N²/4 hex characters
    #[default]
    GridBits,
    /// Fixed nominal bit count, the digest is padded to `bits / 4` characters but never truncated
    Bits(u32),
}

/// Validated hash parameters
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HashConfig {
    /// Blocks per grid side
    grid_dimension: u32,
    /// Digest padding policy
    digest_width: DigestWidth,
}

impl HashConfig {
    /// Create configuration for a N×N block grid
    ///
    /// N must be positive and N² divisible by 4, so that the grid splits into 4 equal bands.
    pub fn new(grid_dimension: u32) -> Result<Self, HashError> {
        let bits = u64::from(grid_dimension) * u64::from(grid_dimension);
        if bits == 0 || !bits.is_multiple_of(4) || u32::try_from(bits).is_err() {
            return Err(HashError::InvalidConfiguration(format!(
                "grid dimension must be a positive even number, got {grid_dimension}"
            )));
        }
        Ok(Self {
            grid_dimension,
            digest_width: DigestWidth::default(),
        })
    }

    /// Set digest padding policy
    #[must_use]
    pub fn with_digest_width(self, digest_width: DigestWidth) -> Self {
        Self {
            digest_width,
            ..self
        }
    }

    /// Blocks per grid side
    #[must_use]
    pub fn grid_dimension(&self) -> u32 {
        self.grid_dimension
    }

    /// Total count of hash bits
    #[must_use]
    pub fn bit_count(&self) -> u32 {
        self.grid_dimension * self.grid_dimension
    }

    /// Bit count the digest is padded for
    #[must_use]
    pub fn nominal_bits(&self) -> u32 {
        match self.digest_width {
            DigestWidth::GridBits => self.bit_count(),
            DigestWidth::Bits(bits) => bits,
        }
    }
}
