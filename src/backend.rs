use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use ::image::{DynamicImage, RgbImage};

use crate::error::Error;
use crate::image::raster;
use crate::image::reader::{self, path_name, ResampleFilter, Size};
use crate::image::writer::{GifAnimationWriter, ImageWriter, PngImageWriter};
use crate::Result;

/// Everything the library needs from an imaging library: decoding, resampling
/// and encoding. The pixel art model never touches a codec directly.
pub trait ImagingBackend {
    fn decode(&self, path: &Path) -> Result<DynamicImage>;

    fn decode_frames(&self, path: &Path) -> Result<Vec<DynamicImage>>;

    fn resize(&self, raster: &DynamicImage, size: Size, filter: ResampleFilter)
        -> Result<DynamicImage>;

    /// Integer block magnification, `scale` must be at least 1.
    fn magnify(&self, raster: &RgbImage, scale: u32) -> Result<RgbImage>;

    fn encode_still(&self, raster: &RgbImage, path: &Path) -> Result<()>;

    /// Writes a forever looping animation to `path`, showing each frame for
    /// `duration` milliseconds.
    fn encode_animation(&self, frames: &[RgbImage], duration: u32, path: &Path) -> Result<()>;
}

/// Binds [`ImagingBackend`] to the `image` and `gif` crates. Stills are
/// written as PNG and animations as GIF, whatever the file name says.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageRsBackend;

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(path_name(file_path), e))
}

/// The file is only created once encoding has succeeded, so a failed save
/// leaves an existing file untouched.
fn write_output_file(file_path: &Path, encoded: &[u8]) -> Result<()> {
    let output_file = open_output_file(file_path)?;
    let mut writer = BufWriter::new(&output_file);
    writer
        .write_all(encoded)
        .and_then(|_| writer.flush())
        .map_err(|e| Error::FailedToWriteImageData(path_name(file_path), e))
}

impl ImagingBackend for ImageRsBackend {
    fn decode(&self, path: &Path) -> Result<DynamicImage> {
        reader::decode_first_frame(path)
    }

    fn decode_frames(&self, path: &Path) -> Result<Vec<DynamicImage>> {
        reader::decode_all_frames(path)
    }

    fn resize(
        &self,
        raster: &DynamicImage,
        size: Size,
        filter: ResampleFilter,
    ) -> Result<DynamicImage> {
        reader::resize(raster, size, filter)
    }

    fn magnify(&self, raster: &RgbImage, scale: u32) -> Result<RgbImage> {
        raster::magnify(raster, scale)
    }

    fn encode_still(&self, raster: &RgbImage, path: &Path) -> Result<()> {
        let destination = path_name(path);
        let mut encoded = Vec::new();
        PngImageWriter::new(&mut encoded, raster, &destination).write_image()?;
        write_output_file(path, &encoded)
    }

    fn encode_animation(&self, frames: &[RgbImage], duration: u32, path: &Path) -> Result<()> {
        let destination = path_name(path);
        let mut encoded = Vec::new();
        GifAnimationWriter::new(&mut encoded, frames, duration, &destination).write_image()?;
        write_output_file(path, &encoded)
    }
}
