//! Conversions to and from `image::RgbImage`.
//!
//! The crate never reads or writes files; these let a caller that loaded a
//! picture with the `image` crate hand it over, and take the result back.

use image::{Rgb, RgbImage};

use crate::{Image, ImageError, Pixel, Result};

impl TryFrom<&RgbImage> for Image {
    type Error = ImageError;

    fn try_from(src: &RgbImage) -> Result<Self> {
        let pixels: Vec<Pixel> = src
            .pixels()
            .map(|Rgb([r, g, b])| Pixel::new(*r, *g, *b))
            .collect();
        let width = if pixels.is_empty() {
            0
        } else {
            src.width() as usize
        };
        Image::new(pixels, width)
    }
}

impl TryFrom<&Image> for RgbImage {
    type Error = ImageError;

    fn try_from(src: &Image) -> Result<Self> {
        let invalid = || ImageError::InvalidWidth {
            width: src.width(),
            len: src.len(),
        };
        let width = u32::try_from(src.width()).map_err(|_| invalid())?;
        let height = u32::try_from(src.height()).map_err(|_| invalid())?;
        let raw: Vec<u8> = src.pixels().iter().flat_map(|p| p.channels()).collect();
        RgbImage::from_raw(width, height, raw).ok_or_else(invalid)
    }
}
