//! Decoded image access and per pixel intensity sampling

use image::{ColorType, DynamicImage, GenericImageView, Rgba};

use crate::error::HashError;

/// Sampled value of a fully transparent pixel, same as white
pub(crate) const MAX_TOTAL_VALUE: u32 = 255 * 3;

/// Whether an image color representation carries an alpha channel
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ColorModel {
    /// No alpha channel
    Opaque,
    /// Alpha channel, fully transparent pixels are sampled as white
    AlphaAware,
}

/// Already decoded image, with random pixel access
pub trait RasterImage {
    /// Width and height in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Color representation of the pixels, or an error if it can not be sampled
    fn color_model(&self) -> Result<ColorModel, HashError>;

    /// Read pixel at given coordinates, normalized to 8 bit RGBA
    fn rgba(&self, x: u32, y: u32) -> Result<Rgba<u8>, HashError>;
}

impl<T: RasterImage + ?Sized> RasterImage for &T {
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    fn color_model(&self) -> Result<ColorModel, HashError> {
        (**self).color_model()
    }

    fn rgba(&self, x: u32, y: u32) -> Result<Rgba<u8>, HashError> {
        (**self).rgba(x, y)
    }
}

impl RasterImage for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn color_model(&self) -> Result<ColorModel, HashError> {
        match self.color() {
            ColorType::L8
            | ColorType::L16
            | ColorType::Rgb8
            | ColorType::Rgb16
            | ColorType::Rgb32F => Ok(ColorModel::Opaque),
            ColorType::La8
            | ColorType::La16
            | ColorType::Rgba8
            | ColorType::Rgba16
            | ColorType::Rgba32F => Ok(ColorModel::AlphaAware),
            other => Err(HashError::UnsupportedColorModel(format!("{other:?}"))),
        }
    }

    fn rgba(&self, x: u32, y: u32) -> Result<Rgba<u8>, HashError> {
        if !self.in_bounds(x, y) {
            return Err(HashError::ImageAccess {
                x,
                y,
                reason: format!("out of bounds for {}x{} image", self.width(), self.height()),
            });
        }
        Ok(self.get_pixel(x, y))
    }
}

/// Converts pixels to a scalar total value in `[0, 765]`
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum PixelSampler {
    /// Sum of the RGB channels
    Opaque,
    /// Sum of the RGB channels, or white if fully transparent
    AlphaAware,
}

impl From<ColorModel> for PixelSampler {
    fn from(model: ColorModel) -> Self {
        match model {
            ColorModel::Opaque => Self::Opaque,
            ColorModel::AlphaAware => Self::AlphaAware,
        }
    }
}

impl PixelSampler {
    /// Select sampler for an image from its color model
    pub(crate) fn for_image<I: RasterImage>(image: &I) -> Result<Self, HashError> {
        image.color_model().map(Self::from)
    }

    /// Read pixel and return its total value
    pub(crate) fn sample<I>(self, image: &I, x: u32, y: u32) -> Result<u32, HashError>
    where
        I: RasterImage,
    {
        image.rgba(x, y).map(|px| self.total_value(px))
    }

    fn total_value(self, Rgba([r, g, b, a]): Rgba<u8>) -> u32 {
        if self == Self::AlphaAware && a == 0 {
            return MAX_TOTAL_VALUE;
        }
        u32::from(r) + u32::from(g) + u32::from(b)
    }
}
