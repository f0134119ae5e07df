//! Bit sequence to hexadecimal digest encoding

use itertools::Itertools as _;

use crate::error::HashError;

/// Encode bits, most significant first, as a lowercase hex string
///
/// The result is left padded with zeros to `nominal_bits / 4` characters. Values that need more
/// digits than that are never truncated, so the output can be longer than the nominal width.
pub fn encode_hex(bits: &[u8], nominal_bits: u32) -> Result<String, HashError> {
    if let Some((index, &value)) = bits.iter().find_position(|b| **b > 1) {
        return Err(HashError::InvalidBitValue { index, value });
    }

    let significant = bits
        .iter()
        .position(|b| *b == 1)
        .and_then(|first| bits.get(first..))
        .unwrap_or_default();
    let digits = if significant.is_empty() {
        "0".to_owned()
    } else {
        significant
            .rchunks(4)
            .rev()
            .map(|nibble| {
                let n = nibble.iter().fold(0_u8, |acc, b| (acc << 1) | b);
                format!("{n:x}")
            })
            .join("")
    };

    let width = (nominal_bits / 4) as usize;
    Ok(format!("{digits:0>width$}"))
}
