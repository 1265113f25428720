use std::io::Write;

use ::gif::{Encoder, Frame, Repeat};
use ::image::RgbImage;

use super::ImageWriter;
use crate::error::Error;

/// NeuQuant sampling factor, 1 is the slowest and most accurate, 30 the fastest.
const QUANTIZATION_SPEED: i32 = 10;

/// Writes frames as a forever looping GIF. Each frame gets its own palette of
/// at most 256 colors; frames that already use 256 colors or fewer keep them
/// exactly.
pub struct GifAnimationWriter<'a, T: Write> {
    writer: T,
    frames: &'a [RgbImage],
    duration: u32,
    destination: &'a str,
}

impl<'a, T: Write> GifAnimationWriter<'a, T> {
    pub fn new(writer: T, frames: &'a [RgbImage], duration: u32, destination: &'a str) -> Self {
        Self {
            writer,
            frames,
            duration,
            destination,
        }
    }
}

impl<T: Write> ImageWriter for GifAnimationWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        let destination = self.destination;
        let encoding_failed =
            |e: ::gif::EncodingError| Error::AnimationEncodingFailed(destination.to_owned(), e);
        let first_frame = self.frames.first().ok_or(Error::EmptyAnimation)?;
        let (width, height) = gif_dimensions(first_frame)?;
        let mut encoder =
            Encoder::new(&mut self.writer, width, height, &[]).map_err(encoding_failed)?;
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(encoding_failed)?;
        let delay = frame_delay(self.duration);
        for raster in self.frames {
            let frame = quantize_frame(raster, delay)?;
            encoder.write_frame(&frame).map_err(encoding_failed)?;
        }
        encoder
            .into_inner()
            .and_then(|writer| writer.flush())
            .map_err(|e| Error::FailedToWriteImageData(destination.to_owned(), e))
    }
}

/// GIF stores delays in hundredths of a second.
fn frame_delay(duration: u32) -> u16 {
    u16::try_from(duration / 10).unwrap_or(u16::MAX)
}

fn gif_dimensions(raster: &RgbImage) -> crate::Result<(u16, u16)> {
    let (width, height) = raster.dimensions();
    match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(Error::DimensionsTooLarge(width as usize, height as usize)),
    }
}

/// Reduces a raster to an adaptive palette of at most 256 colors.
fn quantize_frame(raster: &RgbImage, delay: u16) -> crate::Result<Frame<'static>> {
    let (width, height) = gif_dimensions(raster)?;
    let mut frame = Frame::from_rgb_speed(width, height, raster.as_raw(), QUANTIZATION_SPEED);
    frame.delay = delay;
    Ok(frame)
}
