//! Hash computation errors

/// Error that aborts a hash computation
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// Grid dimension or image size can not produce a hash
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Image color representation can not be sampled
    #[error("Unsupported color model: {0}")]
    UnsupportedColorModel(String),
    /// Encoder was given a digit that is neither 0 nor 1
    #[error("Invalid bit value {value} at offset {index}")]
    InvalidBitValue {
        /// Offset of the digit in the bit sequence
        index: usize,
        /// Offending digit
        value: u8,
    },
    /// Block grid holds a negative or non-finite sum
    #[error("Invalid value {value} for block {index}")]
    InvalidBlockValue {
        /// Index of the block in the flattened grid
        index: usize,
        /// Offending value
        value: f64,
    },
    /// Pixel could not be read from the image
    #[error("Failed to read pixel at ({x}, {y}): {reason}")]
    ImageAccess {
        /// Pixel column
        x: u32,
        /// Pixel row
        y: u32,
        /// Failure description
        reason: String,
    },
}
