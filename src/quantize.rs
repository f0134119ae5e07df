//! Per band median thresholding of block values into bits

use typed_floats::PositiveFinite;

use crate::error::HashError;

/// Count of bands the block sequence is split into
const BAND_COUNT: usize = 4;

/// Relative difference to the median below which a block is not above it
///
/// Fractional pixel weights leave rounding noise in block sums of uniform areas, far below
/// this margin.
const MEDIAN_MARGIN: f64 = 1e-9;

/// Median of a band, computed on a sorted copy
///
/// For even lengths this is the upper of the two middle elements.
fn band_median(band: &[f64], offset: usize) -> Result<f64, HashError> {
    let mut sorted = band
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            PositiveFinite::<f64>::try_from(value).map_err(|_| HashError::InvalidBlockValue {
                index: offset + i,
                value,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    sorted.sort_unstable();
    sorted
        .get(sorted.len() / 2)
        .map(|m| m.get())
        .ok_or_else(|| HashError::InvalidConfiguration("empty band".to_owned()))
}

/// Binarize flattened block values, each band against its own median
///
/// `block_area` is the average pixel count of a block, used to break ties for bands whose
/// values all sit on the median.
pub(crate) fn quantize(blocks: &[f64], block_area: f64) -> Result<Vec<u8>, HashError> {
    if blocks.is_empty() || !blocks.len().is_multiple_of(BAND_COUNT) {
        return Err(HashError::InvalidConfiguration(format!(
            "{} blocks can not be split into {BAND_COUNT} bands",
            blocks.len()
        )));
    }
    let half_block_value = block_area * 256.0 * 3.0 / 2.0;
    let band_len = blocks.len() / BAND_COUNT;

    let mut bits = Vec::with_capacity(blocks.len());
    for (band_idx, band) in blocks.chunks_exact(band_len).enumerate() {
        let median = band_median(band, band_idx * band_len)?;
        let margin = median * MEDIAN_MARGIN;
        log::trace!("Band {band_idx} median: {median}");
        bits.extend(band.iter().map(|&v| {
            u8::from(
                v - median > margin || ((v - median).abs() < 1.0 && median > half_block_value),
            )
        }));
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_even() {
        assert!((band_median(&[4.0, 1.0, 3.0, 2.0], 0).unwrap() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn median_odd() {
        assert!((band_median(&[5.0, 1.0, 3.0], 0).unwrap() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn median_keeps_order() {
        let band = [4.0, 1.0, 3.0, 2.0];
        band_median(&band, 0).unwrap();
        assert_eq!(band, [4.0, 1.0, 3.0, 2.0]);
    }

    #[test]
    fn above_median() {
        let blocks = [
            1.0, 2.0, 3.0, 4.0, //
            40.0, 30.0, 20.0, 10.0, //
            0.0, 100.0, 0.0, 100.0, //
            7.0, 7.5, 9.0, 1.0,
        ];
        assert_eq!(
            quantize(&blocks, 1.0).unwrap(),
            [
                0, 0, 0, 1, //
                1, 0, 0, 0, //
                0, 0, 0, 0, //
                0, 0, 1, 0
            ]
        );
    }

    #[test]
    fn tie_break_on_bright_bands() {
        // half block value for 1 pixel blocks is 384
        let blocks = [
            100.0, 100.0, 100.0, 100.0, //
            700.0, 700.0, 700.0, 700.0, //
            384.0, 384.0, 384.0, 384.0, //
            700.0, 700.5, 700.0, 700.0,
        ];
        assert_eq!(
            quantize(&blocks, 1.0).unwrap(),
            [
                0, 0, 0, 0, //
                1, 1, 1, 1, //
                0, 0, 0, 0, //
                1, 1, 1, 1
            ]
        );
    }

    #[test]
    fn rounding_noise_is_not_above_median() {
        let dark = 170.0_f64;
        let bright = 1000.0_f64;
        let blocks = [
            dark,
            dark.next_up(),
            dark.next_down().next_down(),
            dark, //
            dark,
            dark,
            dark.next_up(),
            dark, //
            bright,
            bright.next_up(),
            bright,
            bright.next_down(),
            bright,
            bright,
            bright,
            bright.next_up(),
        ];
        assert_eq!(
            quantize(&blocks, 1.0).unwrap(),
            [
                0, 0, 0, 0, //
                0, 0, 0, 0, //
                1, 1, 1, 1, //
                1, 1, 1, 1
            ]
        );
    }

    #[test]
    fn band_sizes() {
        assert!(matches!(
            quantize(&[], 1.0),
            Err(HashError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            quantize(&[1.0; 6], 1.0),
            Err(HashError::InvalidConfiguration(_))
        ));
        assert_eq!(quantize(&[1.0; 4], 1.0).unwrap().len(), 4);
    }

    #[test]
    fn invalid_block_value() {
        let mut blocks = [1.0; 8];
        blocks[5] = -1.0;
        assert!(matches!(
            quantize(&blocks, 1.0),
            Err(HashError::InvalidBlockValue { index: 5, .. })
        ));
        blocks[5] = f64::NAN;
        assert!(matches!(
            quantize(&blocks, 1.0),
            Err(HashError::InvalidBlockValue { index: 5, .. })
        ));
    }
}
