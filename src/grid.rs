//! Boundary weighted accumulation of pixel values into a block grid

use crate::{
    error::HashError,
    sampler::{PixelSampler, RasterImage},
};

/// How a pixel row or column spreads over one or two blocks
#[derive(Debug, Copy, Clone, PartialEq)]
struct AxisSpan {
    /// First block index
    low: usize,
    /// Second block index, equal to `low` if the pixel does not straddle a boundary
    high: usize,
    /// Share of the pixel going to `low`
    weight_low: f64,
    /// Share of the pixel going to `high`
    weight_high: f64,
}

impl AxisSpan {
    /// Compute span of pixel at `coord` on an axis of `extent` pixels split in `blocks` blocks
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn new(coord: u32, extent: u32, blocks: u32) -> Self {
        let block_size = f64::from(extent) / f64::from(blocks);
        let pos = f64::from(coord);
        let max_block = blocks as usize - 1;
        let low = ((pos / block_size).floor() as usize).min(max_block);

        if extent.is_multiple_of(blocks) {
            return Self {
                low,
                high: low,
                weight_low: 1.0,
                weight_high: 0.0,
            };
        }

        let modulo = (pos + 1.0) % block_size;
        let frac = modulo.fract();
        // integer part is zero only when the pixel crosses a block boundary
        let high = if modulo.trunc() > 0.0 || coord + 1 == extent {
            low
        } else {
            ((pos / block_size).ceil() as usize).min(max_block)
        };
        Self {
            low,
            high,
            weight_low: 1.0 - frac,
            weight_high: frac,
        }
    }
}

/// N×N grid of weighted pixel value sums, flattened row major
#[derive(Debug, Clone)]
pub(crate) struct BlockGrid {
    /// Blocks per side
    dimension: u32,
    /// Block sums, at index `row * dimension + col`
    cells: Vec<f64>,
    /// Average count of pixels per block
    block_area: f64,
}

impl BlockGrid {
    /// Scan the whole image once and accumulate every pixel into the grid
    pub(crate) fn accumulate<I>(
        image: &I,
        sampler: PixelSampler,
        dimension: u32,
    ) -> Result<Self, HashError>
    where
        I: RasterImage,
    {
        let (width, height) = image.dimensions();
        if dimension == 0 || width == 0 || height == 0 {
            return Err(HashError::InvalidConfiguration(format!(
                "can not split {width}x{height} image into {dimension}x{dimension} blocks"
            )));
        }

        let side = dimension as usize;
        let mut grid = Self {
            dimension,
            cells: vec![0.0; side * side],
            block_area: (f64::from(width) / f64::from(dimension))
                * (f64::from(height) / f64::from(dimension)),
        };

        let col_spans: Vec<AxisSpan> = (0..width)
            .map(|x| AxisSpan::new(x, width, dimension))
            .collect();
        for y in 0..height {
            let row = AxisSpan::new(y, height, dimension);
            for (x, col) in (0..width).zip(&col_spans) {
                let value = f64::from(sampler.sample(image, x, y)?);
                grid.add(row.low, col.low, value * row.weight_low * col.weight_low);
                grid.add(row.low, col.high, value * row.weight_low * col.weight_high);
                grid.add(row.high, col.low, value * row.weight_high * col.weight_low);
                grid.add(row.high, col.high, value * row.weight_high * col.weight_high);
            }
        }

        log::trace!(
            "Accumulated {}x{} image into {dimension}x{dimension} grid, total mass {}",
            width,
            height,
            grid.total_mass()
        );
        Ok(grid)
    }

    // AxisSpan::new bounds row and col to dimension - 1
    #[expect(clippy::indexing_slicing)]
    fn add(&mut self, row: usize, col: usize, value: f64) {
        self.cells[row * self.dimension as usize + col] += value;
    }

    /// Block sums in row major order
    pub(crate) fn values(&self) -> &[f64] {
        &self.cells
    }

    /// Average count of pixels per block
    pub(crate) fn block_area(&self) -> f64 {
        self.block_area
    }

    /// Sum of all block values
    pub(crate) fn total_mass(&self) -> f64 {
        self.cells.iter().sum()
    }
}
