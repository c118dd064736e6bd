//! Last-digit steganography.
//!
//! A message is stored as its UTF-8 bytes, one byte per pixel, by overwriting
//! the ones digit of each color channel with one decimal digit of the byte
//! (hundreds in red, tens in green, ones in blue). Visible change per channel
//! is at most 9.
//!
//! Layout on the flat pixel list:
//!
//! | pixel | content                                        |
//! |-------|------------------------------------------------|
//! | 0     | sentinel `(122, 92, 0)`                        |
//! | 1     | sentinel `(72, 42, 1)`                         |
//! | 2     | message length, thousands group (3 digits)     |
//! | 3     | message length, ones group (3 digits)          |
//! | 4..   | one payload byte per pixel                     |
//!
//! A byte never exceeds 255, so its hundreds digit is at most 2 and always
//! fits the red channel's ones digit.

use log::debug;

use crate::{Image, ImageError, Pixel, Result};

/// First header marker.
pub const SENTINEL_FIRST: Pixel = Pixel::new(122, 92, 0);
/// Second header marker.
pub const SENTINEL_SECOND: Pixel = Pixel::new(72, 42, 1);
/// Pixels reserved in front of the payload.
pub const HEADER_LEN: usize = 4;
/// Largest payload expressible with the six-digit length field.
pub const MAX_MESSAGE_LEN: usize = 999_999;

/// Number of payload bytes `image` can hold.
pub fn capacity(image: &Image) -> usize {
    image.len().saturating_sub(HEADER_LEN).min(MAX_MESSAGE_LEN)
}

/// Hides `text` in `image`. Returns `false`, leaving the image untouched, if
/// the message does not fit.
pub fn encode(image: &mut Image, text: &str) -> bool {
    match try_encode(image, text) {
        Ok(()) => true,
        Err(e) => {
            debug!("encode rejected: {e}");
            false
        }
    }
}

/// Recovers the message hidden in `image`, or `None` if there is none or it
/// is not valid UTF-8.
pub fn decode(image: &Image) -> Option<String> {
    match try_decode(image) {
        Ok(text) => Some(text),
        Err(e) => {
            debug!("decode found no message: {e}");
            None
        }
    }
}

/// Hides `text` in `image`.
///
/// # Errors
/// [`ImageError::MessageTooLong`] if the UTF-8 bytes plus the header do not
/// fit in the image, or exceed [`MAX_MESSAGE_LEN`]. Nothing is written then.
pub fn try_encode(image: &mut Image, text: &str) -> Result<()> {
    let bytes = text.as_bytes();

    if bytes.is_empty() {
        if image.len() < 2 {
            return Err(ImageError::MessageTooLong {
                bytes: 0,
                capacity: 0,
            });
        }
        write_sentinels(image)?;
        if image.len() >= HEADER_LEN {
            write_length(image, 0)?;
        }
        debug!("encoded empty message");
        return Ok(());
    }

    let capacity = capacity(image);
    if bytes.len() > capacity {
        return Err(ImageError::MessageTooLong {
            bytes: bytes.len(),
            capacity,
        });
    }

    write_sentinels(image)?;
    write_length(image, bytes.len())?;
    for (i, &byte) in bytes.iter().enumerate() {
        write_digits(image, HEADER_LEN + i, u32::from(byte))?;
    }
    debug!(
        "encoded {} bytes into {} pixels",
        bytes.len(),
        HEADER_LEN + bytes.len()
    );
    Ok(())
}

/// Recovers the message hidden in `image`.
///
/// # Errors
/// - [`ImageError::NoMessage`] if the sentinels are missing, the declared
///   length runs past the end of the image, or a payload pixel does not hold
///   a byte value.
/// - [`ImageError::InvalidUtf8`] if the payload is not valid UTF-8.
pub fn try_decode(image: &Image) -> Result<String> {
    let pixels = image.pixels();
    match pixels {
        [first, second, ..] if *first == SENTINEL_FIRST && *second == SENTINEL_SECOND => {}
        _ => return Err(ImageError::NoMessage),
    }
    if pixels.len() < HEADER_LEN {
        return Ok(String::new());
    }

    let length = 1000 * read_digits(pixels[2]) as usize + read_digits(pixels[3]) as usize;
    if length == 0 {
        return Ok(String::new());
    }

    let payload = pixels
        .get(HEADER_LEN..HEADER_LEN + length)
        .ok_or(ImageError::NoMessage)?;
    let bytes = payload
        .iter()
        .map(|&p| u8::try_from(read_digits(p)).map_err(|_| ImageError::NoMessage))
        .collect::<Result<Vec<u8>>>()?;

    let text = String::from_utf8(bytes)?;
    debug!("decoded {length} bytes");
    Ok(text)
}

fn write_sentinels(image: &mut Image) -> Result<()> {
    image.set(0, SENTINEL_FIRST)?;
    image.set(1, SENTINEL_SECOND)
}

/// Writes `length` as six digits: thousands group in pixel 2, ones group in pixel 3.
fn write_length(image: &mut Image, length: usize) -> Result<()> {
    debug_assert!(length <= MAX_MESSAGE_LEN);
    write_digits(image, 2, (length / 1000) as u32)?;
    write_digits(image, 3, (length % 1000) as u32)
}

/// Stores a value below 1000 in the ones digits of the pixel at `pos`.
fn write_digits(image: &mut Image, pos: usize, value: u32) -> Result<()> {
    let p = image.get(pos)?;
    let digits = [value / 100, value / 10 % 10, value % 10];
    let [r, g, b] = p.channels();
    let pixel = Pixel::new(
        embed_digit(r, digits[0]),
        embed_digit(g, digits[1]),
        embed_digit(b, digits[2]),
    );
    image.set(pos, pixel)
}

/// Replaces the ones digit of `channel` with `digit`, stepping down by 10
/// while the result exceeds 255.
fn embed_digit(channel: u8, digit: u32) -> u8 {
    let mut value = u32::from(channel) / 10 * 10 + digit;
    while value > 255 {
        value -= 10;
    }
    value as u8
}

/// Reads the three ones digits of `p` as a number in 0..1000.
fn read_digits(p: Pixel) -> u32 {
    let [r, g, b] = p.channels().map(u32::from);
    100 * (r % 10) + 10 * (g % 10) + b % 10
}
