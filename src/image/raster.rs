//! Conversion between [`Image`] and the raster types of the `image` crate.

use ::image::{Rgb, RgbImage};

use super::{Image, Pixel, Validation};
use crate::error::Error;
use crate::Result;

pub fn from_raster(raster: &RgbImage) -> Image {
    let pixels = raster
        .pixels()
        .map(|&Rgb([red, green, blue])| (i32::from(red), i32::from(green), i32::from(blue)))
        .collect();
    Image::from_pixels(raster.height() as usize, raster.width() as usize, pixels)
}

/// Converts the model into an 8 bit RGB raster, pixel `(row, col)` landing at
/// `(x = col, y = row)`.
pub fn to_raster(image: &Image, validation: Validation) -> Result<RgbImage> {
    let (width, height) = raster_dimensions(image.width(), image.height())?;
    let mut buffer = Vec::with_capacity(image.pixels().len() * 3);
    for (row_index, row) in image.rows().enumerate() {
        for (column_index, pixel) in row.iter().enumerate() {
            let channels = coerce_pixel(*pixel, validation).ok_or(Error::PixelOutOfRange {
                row: row_index,
                column: column_index,
                pixel: *pixel,
            })?;
            buffer.extend_from_slice(&channels);
        }
    }
    RgbImage::from_raw(width, height, buffer)
        .ok_or(Error::DimensionsTooLarge(image.width(), image.height()))
}

/// Blows every pixel up into a `scale` by `scale` block of the same color.
pub fn magnify(raster: &RgbImage, scale: u32) -> Result<RgbImage> {
    if scale == 0 {
        return Err(Error::InvalidScale(scale));
    }
    if scale == 1 {
        return Ok(raster.clone());
    }
    let width = raster.width().checked_mul(scale);
    let height = raster.height().checked_mul(scale);
    match (width, height) {
        (Some(width), Some(height)) => Ok(RgbImage::from_fn(width, height, |x, y| {
            *raster.get_pixel(x / scale, y / scale)
        })),
        _ => Err(Error::DimensionsTooLarge(
            raster.width() as usize * scale as usize,
            raster.height() as usize * scale as usize,
        )),
    }
}

fn raster_dimensions(width: usize, height: usize) -> Result<(u32, u32)> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(Error::DimensionsTooLarge(width, height)),
    }
}

/// `None` when strict validation finds a component outside of 0 to 255.
fn coerce_pixel((red, green, blue): Pixel, validation: Validation) -> Option<[u8; 3]> {
    Some([
        coerce_component(red, validation)?,
        coerce_component(green, validation)?,
        coerce_component(blue, validation)?,
    ])
}

fn coerce_component(component: i32, validation: Validation) -> Option<u8> {
    match validation {
        Validation::Permissive => Some(component.clamp(0, 255) as u8),
        Validation::Strict => u8::try_from(component).ok(),
    }
}
