//! RGB pixel value type.

use std::fmt;

use crate::{ImageError, Result};

/// One RGB sample. Every channel is in 0..=255 by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);
    pub const RED: Pixel = Pixel::new(255, 0, 0);

    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Builds a pixel from wide integer channels, rejecting anything outside 0..=255.
    pub fn checked(red: i64, green: i64, blue: i64) -> Result<Self> {
        match (u8::try_from(red), u8::try_from(green), u8::try_from(blue)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
            _ => Err(ImageError::InvalidPixel { red, green, blue }),
        }
    }

    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    #[inline]
    pub const fn from_channels(channels: [u8; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }

    /// Channel-wise complement to 255.
    #[inline]
    pub const fn inverted(self) -> Self {
        Self::new(255 - self.red, 255 - self.green, 255 - self.blue)
    }

    /// Weighted brightness `0.3 R + 0.6 G + 0.1 B`, not truncated.
    #[inline]
    pub fn brightness(self) -> f64 {
        0.3 * f64::from(self.red) + 0.6 * f64::from(self.green) + 0.1 * f64::from(self.blue)
    }
}

impl TryFrom<(i32, i32, i32)> for Pixel {
    type Error = ImageError;

    fn try_from((red, green, blue): (i32, i32, i32)) -> Result<Self> {
        Self::checked(red.into(), green.into(), blue.into())
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Pixel> for (u8, u8, u8) {
    fn from(p: Pixel) -> Self {
        (p.red, p.green, p.blue)
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}
