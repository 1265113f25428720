//! Loading and saving pictures in the row based [`Image`] format.
//!
//! The free functions [`load_img`], [`load_anim`], [`save_img`] and
//! [`save_anim`] are all a beginner needs. They use a default [`PixelArt`]
//! session, which decodes and encodes through the `image` and `gif` crates and
//! logs advisory warnings. Build a session yourself to pick another backend,
//! collect the warnings, or reject out of range pixels.

use std::path::Path;

use ::image::{DynamicImage, RgbImage};

use crate::backend::{ImageRsBackend, ImagingBackend};
use crate::diagnostics::{self, DiagnosticSink, LogSink};
use crate::error::Error;
use crate::image::raster;
use crate::image::reader::{ResampleFilter, Size};
use crate::image::{Image, Validation};
use crate::Result;

/// Scale used when none is given: one saved pixel per image pixel.
pub const DEFAULT_SCALE: u32 = 1;

/// Milliseconds each animation frame is shown when none is given.
pub const DEFAULT_DURATION: u32 = 100;

pub struct PixelArt<B = ImageRsBackend, S = LogSink> {
    backend: B,
    sink: S,
    validation: Validation,
}

impl<B: ImagingBackend, S: DiagnosticSink> PixelArt<B, S> {
    pub fn new(backend: B, sink: S) -> Self {
        Self {
            backend,
            sink,
            validation: Validation::default(),
        }
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    pub fn validation(&self) -> Validation {
        self.validation
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Loads the first frame of `filename`, optionally resized to `size`.
    pub fn load_img<P: AsRef<Path>>(
        &self,
        filename: P,
        size: Option<Size>,
        resample_filter: ResampleFilter,
    ) -> Result<Image> {
        let path = filename.as_ref();
        let decoded = self.backend.decode(path)?;
        let image = self.convert_decoded(&decoded, size, resample_filter)?;
        log::info!(
            "Loaded {} as {}x{} pixels",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(image)
    }

    /// Loads every frame of `filename`. Still images give a single frame.
    pub fn load_anim<P: AsRef<Path>>(
        &self,
        filename: P,
        size: Option<Size>,
        resample_filter: ResampleFilter,
    ) -> Result<Vec<Image>> {
        let path = filename.as_ref();
        let frames = self
            .backend
            .decode_frames(path)?
            .iter()
            .map(|decoded| self.convert_decoded(decoded, size, resample_filter))
            .collect::<Result<Vec<_>>>()?;
        log::info!("Loaded {} frames from {}", frames.len(), path.display());
        Ok(frames)
    }

    /// Saves `image` as PNG, turning every pixel into a `scale` by `scale`
    /// square. The file is PNG whatever its name ends in.
    pub fn save_img<P: AsRef<Path>>(
        &mut self,
        image: &Image,
        filename: P,
        scale: u32,
    ) -> Result<()> {
        let path = filename.as_ref();
        diagnostics::check_dimensions(image.height(), image.width(), scale, &mut self.sink);
        self.check_clamping(image);
        let raster = self.scaled_raster(image, scale)?;
        self.backend.encode_still(&raster, path)?;
        log::info!(
            "Saved {}x{} pixels to {}",
            raster.width(),
            raster.height(),
            path.display()
        );
        Ok(())
    }

    /// Saves `images` as a forever looping GIF animation, every frame shown
    /// for `duration` milliseconds. Frames with more than 256 colors are
    /// reduced to 256, each with its own palette.
    pub fn save_anim<P: AsRef<Path>>(
        &mut self,
        images: &[Image],
        filename: P,
        scale: u32,
        duration: u32,
    ) -> Result<()> {
        let path = filename.as_ref();
        diagnostics::check_frame_count(images.len(), &mut self.sink);
        let first_frame = images.first().ok_or(Error::EmptyAnimation)?;
        diagnostics::check_dimensions(
            first_frame.height(),
            first_frame.width(),
            scale,
            &mut self.sink,
        );
        images.iter().any(|image| self.check_clamping(image));
        let rasters = images
            .iter()
            .map(|image| self.scaled_raster(image, scale))
            .collect::<Result<Vec<_>>>()?;
        self.backend.encode_animation(&rasters, duration, path)?;
        log::info!(
            "Saved {} frames of {} ms to {}",
            rasters.len(),
            duration,
            path.display()
        );
        Ok(())
    }

    /// Clamping only happens in permissive mode, strict mode fails instead.
    fn check_clamping(&mut self, image: &Image) -> bool {
        self.validation == Validation::Permissive
            && diagnostics::check_clamping(image.indexed_pixels(), &mut self.sink)
    }

    fn convert_decoded(
        &self,
        decoded: &DynamicImage,
        size: Option<Size>,
        resample_filter: ResampleFilter,
    ) -> Result<Image> {
        let rgb = match size {
            Some(size) => self.backend.resize(decoded, size, resample_filter)?.to_rgb8(),
            None => decoded.to_rgb8(),
        };
        Ok(raster::from_raster(&rgb))
    }

    fn scaled_raster(&self, image: &Image, scale: u32) -> Result<RgbImage> {
        let raster = raster::to_raster(image, self.validation)?;
        self.backend.magnify(&raster, scale)
    }
}

impl Default for PixelArt {
    fn default() -> Self {
        Self::new(ImageRsBackend, LogSink)
    }
}

fn default_session() -> PixelArt {
    PixelArt::default()
}

/// Loads an image from a file, optionally resizing it to `size`.
///
/// Many formats are supported, among them JPEG, PNG and GIF. For animated
/// files only the first frame is returned.
///
/// ```no_run
/// use pixel_canvas::{height, load_img, width, ResampleFilter, Size};
///
/// // load without resizing
/// let img = load_img("foo.jpg", None, ResampleFilter::default())?;
///
/// // load at 16x16 using the bilinear filter
/// let small = load_img("foo.jpg", Some(Size::new(16, 16)), ResampleFilter::Bilinear)?;
///
/// // 32 pixels wide, keeping the proportions
/// let new_width = 32;
/// let new_height = height(&img) * new_width / width(&img);
/// let scaled = load_img(
///     "foo.jpg",
///     Some(Size::new(new_width as u32, new_height as u32)),
///     ResampleFilter::default(),
/// )?;
/// # Ok::<(), pixel_canvas::Error>(())
/// ```
pub fn load_img<P: AsRef<Path>>(
    filename: P,
    size: Option<Size>,
    resample_filter: ResampleFilter,
) -> Result<Image> {
    default_session().load_img(filename, size, resample_filter)
}

/// Loads every frame of an animation, such as an animated GIF. A file holding
/// a single picture gives a single frame.
pub fn load_anim<P: AsRef<Path>>(
    filename: P,
    size: Option<Size>,
    resample_filter: ResampleFilter,
) -> Result<Vec<Image>> {
    default_session().load_anim(filename, size, resample_filter)
}

/// Saves an image as PNG. See [`PixelArt::save_img`].
pub fn save_img<P: AsRef<Path>>(img: &Image, filename: P, scale: u32) -> Result<()> {
    default_session().save_img(img, filename, scale)
}

/// Saves frames as an animated GIF. See [`PixelArt::save_anim`].
pub fn save_anim<P: AsRef<Path>>(
    imgs: &[Image],
    filename: P,
    scale: u32,
    duration: u32,
) -> Result<()> {
    default_session().save_anim(imgs, filename, scale, duration)
}
