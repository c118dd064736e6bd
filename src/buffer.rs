//! Flat pixel buffer with 1D and 2D addressing.
//!
//! An [`Image`] owns a single `Vec<Pixel>` and interprets it as a grid of
//! `height` rows by `width` columns in row-major order. The length of the
//! pixel list never changes after construction; only the way it is split
//! into rows does (see [`Image::set_width`] and [`Image::set_height`]).
//!
//! Filters use the 2D accessors, the steganography codec uses the 1D ones.

use std::fmt;

use log::trace;

use crate::{ImageError, Pixel, Result};

/// A width/height-addressable list of RGB pixels.
///
/// Invariant: `width * height == len()`, and both are zero iff the image is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    data: Vec<Pixel>,
    width: usize,
    height: usize,
}

impl Image {
    /// Creates an image from a pixel list and a width; the height is derived.
    ///
    /// The vector is moved into the image, not copied. Use [`Image::copy`]
    /// (or `clone`) to get an independent buffer later on.
    ///
    /// # Errors
    /// [`ImageError::InvalidWidth`] if `width` does not evenly divide the pixel
    /// count, is zero for nonempty data, or is nonzero for empty data.
    pub fn new(data: Vec<Pixel>, width: usize) -> Result<Self> {
        let mut image = Self {
            data,
            width: 0,
            height: 0,
        };
        image.set_width(width)?;
        Ok(image)
    }

    /// Creates an image from integer triples, validating every channel.
    pub fn from_channels(data: Vec<(i32, i32, i32)>, width: usize) -> Result<Self> {
        let pixels = data
            .into_iter()
            .map(Pixel::try_from)
            .collect::<Result<Vec<_>>>()?;
        Self::new(pixels, width)
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Reinterprets the pixel list with `width` columns, recomputing the height.
    pub fn set_width(&mut self, width: usize) -> Result<()> {
        let len = self.len();
        let valid = if len == 0 {
            width == 0
        } else {
            width != 0 && len % width == 0
        };
        if !valid {
            return Err(ImageError::InvalidWidth { width, len });
        }
        self.width = width;
        self.height = if len == 0 { 0 } else { len / width };
        trace!("reshaped {} pixels to {}x{}", len, self.width, self.height);
        Ok(())
    }

    /// Reinterprets the pixel list with `height` rows, recomputing the width.
    pub fn set_height(&mut self, height: usize) -> Result<()> {
        let len = self.len();
        let valid = if len == 0 {
            height == 0
        } else {
            height != 0 && len % height == 0
        };
        if !valid {
            return Err(ImageError::InvalidHeight { height, len });
        }
        self.height = height;
        self.width = if len == 0 { 0 } else { len / height };
        trace!("reshaped {} pixels to {}x{}", len, self.width, self.height);
        Ok(())
    }

    /// Returns the pixel at flat position `pos`.
    pub fn get(&self, pos: usize) -> Result<Pixel> {
        self.data
            .get(pos)
            .copied()
            .ok_or(ImageError::IndexOutOfBounds {
                pos,
                len: self.len(),
            })
    }

    /// Overwrites the pixel at flat position `pos`.
    pub fn set(&mut self, pos: usize, pixel: Pixel) -> Result<()> {
        let len = self.len();
        let slot = self
            .data
            .get_mut(pos)
            .ok_or(ImageError::IndexOutOfBounds { pos, len })?;
        *slot = pixel;
        Ok(())
    }

    /// Returns the pixel at (`row`, `col`).
    pub fn pixel(&self, row: usize, col: usize) -> Result<Pixel> {
        let pos = self.offset(row, col)?;
        Ok(self.data[pos])
    }

    /// Overwrites the pixel at (`row`, `col`).
    pub fn set_pixel(&mut self, row: usize, col: usize, pixel: Pixel) -> Result<()> {
        let pos = self.offset(row, col)?;
        self.data[pos] = pixel;
        Ok(())
    }

    /// Exchanges the pixels at (`row1`, `col1`) and (`row2`, `col2`).
    ///
    /// Both positions are validated before anything is written.
    pub fn swap_pixels(
        &mut self,
        row1: usize,
        col1: usize,
        row2: usize,
        col2: usize,
    ) -> Result<()> {
        let first = self.pixel(row1, col1)?;
        let second = self.pixel(row2, col2)?;
        self.set_pixel(row1, col1, second)?;
        self.set_pixel(row2, col2, first)
    }

    /// Returns a deep copy; the result shares no storage with `self`.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns a copy of the pixel list.
    pub fn data(&self) -> Vec<Pixel> {
        self.data.clone()
    }

    /// Read-only view of the pixel list in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    /// Gives the pixel list back, dropping the shape.
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.data
    }

    /// Renders the image as nested rows, one row per line.
    ///
    /// A 2-wide image of six pixels becomes
    /// ```text
    /// [[(255, 0, 0), (0, 255, 0)],
    /// [(0, 0, 255), (0, 0, 0)],
    /// [(128, 0, 0), (0, 128, 0)]]
    /// ```
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.height || col >= self.width {
            return Err(ImageError::PositionOutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row * self.width + col)
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        if self.width > 0 {
            for (r, row) in self.data.chunks_exact(self.width).enumerate() {
                if r > 0 {
                    f.write_str(",\n")?;
                }
                f.write_str("[")?;
                for (c, pixel) in row.iter().enumerate() {
                    if c > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{pixel}")?;
                }
                f.write_str("]")?;
            }
        }
        f.write_str("]")
    }
}
