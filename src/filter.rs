//! Geometric and tonal filters.
//!
//! Every filter edits an [`Image`] in place and goes through its public
//! accessors only, so out-of-range positions or channel values surface as
//! [`ImageError`](crate::ImageError)s rather than corrupting the buffer.

use log::debug;

use crate::{Image, ImageError, Pixel, Result};

/// Monochrome flavour for [`to_monochrome`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    /// All channels set to the pixel brightness
    #[default]
    Greyscale,
    /// Brightness in red, 0.6 of it in green, 0.4 of it in blue
    Sepia,
}

impl From<bool> for Tone {
    /// `true` selects sepia.
    fn from(sepia: bool) -> Self {
        if sepia {
            Tone::Sepia
        } else {
            Tone::Greyscale
        }
    }
}

/// Options for the jail-bar overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarOptions {
    /// Bar color.
    pub color: Pixel,
    /// Rows covered by the top and bottom bars.
    pub thickness: usize,
    /// Columns covered by each vertical bar.
    pub bar_width: usize,
    /// One interior bar is added for every `spacing` columns of inner width.
    pub spacing: usize,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            color: Pixel::RED,
            thickness: 3,
            bar_width: 4,
            spacing: 50,
        }
    }
}

/// A single recorded edit, so an editor can keep and replay operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    Invert,
    Transpose,
    RotateLeft,
    RotateRight,
    ReflectHorizontal,
    ReflectVertical,
    Monochrome(Tone),
    Bars(BarOptions),
    Vignette,
}

impl Edit {
    /// Applies this edit to `image`.
    pub fn apply(&self, image: &mut Image) -> Result<()> {
        debug!(
            "applying {:?} to {}x{} image",
            self,
            image.width(),
            image.height()
        );
        match self {
            Edit::Invert => invert(image),
            Edit::Transpose => transpose(image),
            Edit::RotateLeft => rotate_left(image),
            Edit::RotateRight => rotate_right(image),
            Edit::ReflectHorizontal => reflect_horizontal(image),
            Edit::ReflectVertical => reflect_vertical(image),
            Edit::Monochrome(tone) => to_monochrome(image, *tone),
            Edit::Bars(opts) => draw_bars_with(image, opts),
            Edit::Vignette => apply_vignette(image),
        }
    }
}

/// Replaces every pixel with its color complement.
pub fn invert(image: &mut Image) -> Result<()> {
    for pos in 0..image.len() {
        let pixel = image.get(pos)?;
        image.set(pos, pixel.inverted())?;
    }
    Ok(())
}

/// Swaps rows and columns.
pub fn transpose(image: &mut Image) -> Result<()> {
    let original = image.copy();
    image.set_width(original.height())?;

    for row in 0..image.height() {
        for col in 0..image.width() {
            image.set_pixel(row, col, original.pixel(col, row)?)?;
        }
    }
    Ok(())
}

/// Rotates the image 90 degrees clockwise.
pub fn rotate_right(image: &mut Image) -> Result<()> {
    let original = image.copy();
    image.set_width(original.height())?;

    for row in 0..image.height() {
        for col in 0..image.width() {
            let src = original.pixel(original.height() - 1 - col, row)?;
            image.set_pixel(row, col, src)?;
        }
    }
    Ok(())
}

/// Rotates the image 90 degrees counter-clockwise.
pub fn rotate_left(image: &mut Image) -> Result<()> {
    let original = image.copy();
    image.set_width(original.height())?;

    for row in 0..image.height() {
        for col in 0..image.width() {
            let src = original.pixel(col, original.width() - 1 - row)?;
            image.set_pixel(row, col, src)?;
        }
    }
    Ok(())
}

/// Mirrors the image left to right.
pub fn reflect_horizontal(image: &mut Image) -> Result<()> {
    let width = image.width();
    for h in 0..width / 2 {
        for row in 0..image.height() {
            image.swap_pixels(row, h, row, width - 1 - h)?;
        }
    }
    Ok(())
}

/// Mirrors the image top to bottom.
pub fn reflect_vertical(image: &mut Image) -> Result<()> {
    let height = image.height();
    for col in 0..image.width() {
        for row in 0..height / 2 {
            image.swap_pixels(row, col, height - 1 - row, col)?;
        }
    }
    Ok(())
}

/// Converts the image to greyscale or sepia.
///
/// Brightness is `0.3 R + 0.6 G + 0.1 B`; every derived channel is
/// truncated toward zero.
pub fn to_monochrome(image: &mut Image, tone: Tone) -> Result<()> {
    for pos in 0..image.len() {
        let brightness = image.get(pos)?.brightness();
        let level = brightness as i64;
        let pixel = match tone {
            Tone::Greyscale => Pixel::checked(level, level, level)?,
            Tone::Sepia => Pixel::checked(
                level,
                (0.6 * brightness) as i64,
                (0.4 * brightness) as i64,
            )?,
        };
        image.set(pos, pixel)?;
    }
    Ok(())
}

/// Draws jail bars with the default [`BarOptions`].
pub fn draw_bars(image: &mut Image) -> Result<()> {
    draw_bars_with(image, &BarOptions::default())
}

/// Draws horizontal bars along the top and bottom edges, vertical bars along
/// the left and right edges, and `(width - 2 * bar_width) / spacing` evenly
/// spaced interior vertical bars.
///
/// Every bar is checked against the image before the first pixel is written,
/// so an image too small for the bars is left untouched.
pub fn draw_bars_with(image: &mut Image, opts: &BarOptions) -> Result<()> {
    let (width, height) = (image.width(), image.height());
    let bar = opts.bar_width;

    let rows = [0, height.saturating_sub(opts.thickness)];
    let mut cols = vec![0, width.saturating_sub(bar)];

    let inner = width.saturating_sub(bar.saturating_mul(2));
    let n = if opts.spacing == 0 { 0 } else { inner / opts.spacing };
    let space_left = inner.saturating_sub(bar.saturating_mul(n)) as f64;
    let distance = space_left / (n as f64 + 1.0);
    for k in 1..=n {
        cols.push((k as f64 * (distance + bar as f64)).round_ties_even() as usize);
    }

    for &row in &rows {
        check_rows(image, row, opts.thickness)?;
    }
    for &col in &cols {
        check_cols(image, col, bar)?;
    }

    for row in rows {
        draw_horizontal_bar(image, row, opts.thickness, opts.color)?;
    }
    for col in cols {
        draw_vertical_bar(image, col, bar, opts.color)?;
    }
    Ok(())
}

/// Fills rows `row..row + thickness` with `pixel`.
pub fn draw_horizontal_bar(
    image: &mut Image,
    row: usize,
    thickness: usize,
    pixel: Pixel,
) -> Result<()> {
    check_rows(image, row, thickness)?;
    for col in 0..image.width() {
        for r in row..row + thickness {
            image.set_pixel(r, col, pixel)?;
        }
    }
    Ok(())
}

/// Fills columns `col..col + bar_width` with `pixel`.
pub fn draw_vertical_bar(
    image: &mut Image,
    col: usize,
    bar_width: usize,
    pixel: Pixel,
) -> Result<()> {
    check_cols(image, col, bar_width)?;
    for row in 0..image.height() {
        for c in col..col + bar_width {
            image.set_pixel(row, c, pixel)?;
        }
    }
    Ok(())
}

/// Rows `row..row + thickness` must lie inside the image.
fn check_rows(image: &Image, row: usize, thickness: usize) -> Result<()> {
    match row.checked_add(thickness) {
        Some(end) if end <= image.height() => Ok(()),
        _ => Err(ImageError::PositionOutOfBounds {
            row: row.saturating_add(thickness).saturating_sub(1),
            col: 0,
            width: image.width(),
            height: image.height(),
        }),
    }
}

/// Columns `col..col + bar_width` must lie inside the image.
fn check_cols(image: &Image, col: usize, bar_width: usize) -> Result<()> {
    match col.checked_add(bar_width) {
        Some(end) if end <= image.width() => Ok(()),
        _ => Err(ImageError::PositionOutOfBounds {
            row: 0,
            col: col.saturating_add(bar_width).saturating_sub(1),
            width: image.width(),
            height: image.height(),
        }),
    }
}

/// Darkens the image toward the corners.
///
/// Each channel is scaled by `1 - d² / r²`, where `d` is the distance of the
/// pixel center from the image center and `r` is half the image diagonal.
/// Scaled values are truncated toward zero and not clamped.
pub fn apply_vignette(image: &mut Image) -> Result<()> {
    let (width, height) = (image.width() as f64, image.height() as f64);
    let center_row = (height - 1.0) / 2.0;
    let center_col = (width - 1.0) / 2.0;
    let half_diagonal_sq = (height / 2.0).powi(2) + (width / 2.0).powi(2);

    for row in 0..image.height() {
        for col in 0..image.width() {
            let dy = row as f64 - center_row;
            let dx = col as f64 - center_col;
            let factor = 1.0 - (dx * dx + dy * dy) / half_diagonal_sq;

            let p = image.pixel(row, col)?;
            let scaled = Pixel::checked(
                (f64::from(p.red) * factor) as i64,
                (f64::from(p.green) * factor) as i64,
                (f64::from(p.blue) * factor) as i64,
            )?;
            image.set_pixel(row, col, scaled)?;
        }
    }
    Ok(())
}
