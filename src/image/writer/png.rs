use std::io::Write;

use ::image::codecs::png::PngEncoder;
use ::image::{ExtendedColorType, ImageEncoder, RgbImage};

use super::ImageWriter;
use crate::error::Error;

pub struct PngImageWriter<'a, T: Write> {
    writer: T,
    raster: &'a RgbImage,
    destination: &'a str,
}

impl<'a, T: Write> PngImageWriter<'a, T> {
    pub fn new(writer: T, raster: &'a RgbImage, destination: &'a str) -> Self {
        Self {
            writer,
            raster,
            destination,
        }
    }
}

impl<T: Write> ImageWriter for PngImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        let (width, height) = self.raster.dimensions();
        PngEncoder::new(&mut self.writer)
            .write_image(self.raster.as_raw(), width, height, ExtendedColorType::Rgb8)
            .map_err(|e| Error::EncodingFailed(self.destination.to_owned(), e))?;
        self.writer
            .flush()
            .map_err(|e| Error::FailedToWriteImageData(self.destination.to_owned(), e))
    }
}
