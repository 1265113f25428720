//! A simple library to create pixel art programmatically. The focus is not on
//! efficiency but on ease of use: an image is a grid of rows, a row is a list
//! of pixels and a pixel is a tuple of three integers holding the red, green
//! and blue components between 0 and 255.
//!
//! The following is a 4x4 red and blue checkered pattern:
//!
//! ```
//! use pixel_canvas::{height, width, Image, Pixel};
//!
//! let red: Pixel = (255, 0, 0);
//! let blue: Pixel = (0, 0, 255);
//!
//! let checkered_img = Image::from_rows(vec![
//!     vec![red, blue, red, blue],
//!     vec![blue, red, blue, red],
//!     vec![red, blue, red, blue],
//!     vec![blue, red, blue, red],
//! ])?;
//!
//! // the pixel at row 1, column 2
//! assert_eq!(checkered_img[1][2], blue);
//! assert_eq!((height(&checkered_img), width(&checkered_img)), (4, 4));
//! # Ok::<(), pixel_canvas::Error>(())
//! ```
//!
//! Images are created with [`create_img`] and [`copy_img`], loaded with
//! [`load_img`] and [`load_anim`], and saved as PNG with [`save_img`] or as an
//! animated GIF with [`save_anim`].

use std::path::PathBuf;

pub use crate::image::reader::{ResampleFilter, Size};
pub use crate::image::{copy_img, create_img, height, width, Image, Pixel, Validation};
pub use backend::{ImageRsBackend, ImagingBackend};
pub use cli::CLIParser;
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink};
pub use error::Error;
pub use pixel_art::{
    load_anim, load_img, save_anim, save_img, PixelArt, DEFAULT_DURATION, DEFAULT_SCALE,
};

mod backend;
mod cli;
pub mod diagnostics;
mod error;
/// Crate internal, the types beginners need are re-exported above.
///
/// ```compile_fail
/// use pixel_canvas::image::raster::to_raster;
/// ```
mod image;
mod logger;
mod pixel_art;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    size: Option<Size>,
    resample_filter: ResampleFilter,
    scale: u32,
    animation: bool,
    duration: u32,
    validation: Validation,
}

/// Loads `input_file` and saves it again as PNG, or as a looping GIF when
/// converting an animation, applying the resize and scale requested on the
/// command line.
pub fn convert(arguments: &Arguments) -> Result<()> {
    let mut pixel_art =
        PixelArt::new(ImageRsBackend, LogSink).with_validation(arguments.validation);
    if arguments.animation {
        let frames = pixel_art.load_anim(
            &arguments.input_file,
            arguments.size,
            arguments.resample_filter,
        )?;
        pixel_art.save_anim(
            &frames,
            &arguments.output_file,
            arguments.scale,
            arguments.duration,
        )
    } else {
        let image = pixel_art.load_img(
            &arguments.input_file,
            arguments.size,
            arguments.resample_filter,
        )?;
        pixel_art.save_img(&image, &arguments.output_file, arguments.scale)
    }
}
