//! # imager
//!
//! A small image-manipulation library built around a flat RGB pixel buffer.
//!
//! ## Features
//!
//! - **Image**: a pixel buffer with both 1D and 2D (row, column) addressing
//! - **Filters**: invert, transpose, rotations, reflections, greyscale/sepia,
//!   vignette and a "jail bars" overlay
//! - **Steganography**: hide a UTF-8 message in the last decimal digit of each
//!   color channel, and recover it again
//!
//! Loading and saving image files is left to the caller. With the `image`
//! feature enabled, [`Image`] converts to and from `image::RgbImage`.
//!
//! ## Quick Start
//!
//! ### Applying filters
//!
//! ```ignore
//! use imager::{filter, Image, Pixel};
//!
//! let pixels = vec![Pixel::new(255, 0, 0); 6];
//! let mut image = Image::new(pixels, 2)?;
//! filter::invert(&mut image)?;
//! filter::rotate_right(&mut image)?;
//! assert_eq!(image.width(), 3);
//! ```
//!
//! ### Hiding a message
//!
//! ```ignore
//! use imager::{decode, encode, Image, Pixel};
//!
//! let mut image = Image::new(vec![Pixel::new(100, 100, 100); 20], 5)?;
//! assert!(encode(&mut image, "Hi"));
//! assert_eq!(decode(&image).as_deref(), Some("Hi"));
//! ```

use thiserror::Error;

pub mod buffer;
#[cfg(feature = "image")]
pub mod convert;
pub mod filter;
pub mod pixel;
pub mod stego;

pub use buffer::Image;
pub use filter::{BarOptions, Edit, Tone};
pub use pixel::Pixel;
pub use stego::{capacity, decode, encode, try_decode, try_encode};

/// Errors that can occur while accessing or transforming an image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// A channel value outside 0..=255
    #[error("invalid pixel: ({red}, {green}, {blue})")]
    InvalidPixel { red: i64, green: i64, blue: i64 },

    /// Flat position outside the pixel list
    #[error("position {pos} out of bounds for {len} pixels")]
    IndexOutOfBounds { pos: usize, len: usize },

    /// (row, col) outside the image grid
    #[error("position ({row}, {col}) out of bounds for {width}x{height} image")]
    PositionOutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// Width that does not evenly divide the pixel count
    #[error("invalid width {width} for {len} pixels")]
    InvalidWidth { width: usize, len: usize },

    /// Height that does not evenly divide the pixel count
    #[error("invalid height {height} for {len} pixels")]
    InvalidHeight { height: usize, len: usize },

    /// Message does not fit in the image
    #[error("message of {bytes} bytes exceeds capacity of {capacity} bytes")]
    MessageTooLong { bytes: usize, capacity: usize },

    /// Image carries no hidden message
    #[error("no hidden message found")]
    NoMessage,

    /// Hidden payload is not valid UTF-8
    #[error("hidden message is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Result type for image operations.
pub type Result<T> = core::result::Result<T, ImageError>;
