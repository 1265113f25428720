//! Advisory warnings about pictures that are probably not what the author
//! intended. None of them ever stops a save.

use std::fmt::Display;

use crate::image::Pixel;

/// Heights or widths above this many pixels are unusual for pixel art.
pub const MAX_RECOMMENDED_DIMENSION: usize = 1000;

/// Frame limit of the LED displays the animations are shown on.
pub const MAX_RECOMMENDED_FRAMES: usize = 60;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    OversizeHeight(usize),
    OversizeWidth(usize),
    TooManyFrames(usize),
    /// First pixel of a save with a component outside of 0 to 255.
    ClampedPixel {
        row: usize,
        column: usize,
        pixel: Pixel,
    },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OversizeHeight(height) => write!(
                f,
                "the height will be {} pixels, larger than {}. This is unusual for pixel art so it may be a bug",
                height, MAX_RECOMMENDED_DIMENSION
            ),
            Self::OversizeWidth(width) => write!(
                f,
                "the width will be {} pixels, larger than {}. This is unusual for pixel art so it may be a bug",
                width, MAX_RECOMMENDED_DIMENSION
            ),
            Self::TooManyFrames(frames) => write!(
                f,
                "animations are limited to {} frames, yours has {}",
                MAX_RECOMMENDED_FRAMES, frames
            ),
            Self::ClampedPixel { row, column, pixel } => write!(
                f,
                "pixel {:?} at row {}, column {} has a component outside of 0 to 255 and was clamped",
                pixel, row, column
            ),
        }
    }
}

/// Receives advisory diagnostics as they are found.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards every diagnostic to the `log` facade as a warning.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic);
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Checks the size an image will have once scaled up by `scale`.
pub fn check_dimensions(height: usize, width: usize, scale: u32, sink: &mut impl DiagnosticSink) {
    let scaled_height = height.saturating_mul(scale as usize);
    let scaled_width = width.saturating_mul(scale as usize);
    if scaled_height > MAX_RECOMMENDED_DIMENSION {
        sink.report(Diagnostic::OversizeHeight(scaled_height));
    }
    if scaled_width > MAX_RECOMMENDED_DIMENSION {
        sink.report(Diagnostic::OversizeWidth(scaled_width));
    }
}

pub fn check_frame_count(frames: usize, sink: &mut impl DiagnosticSink) {
    if frames > MAX_RECOMMENDED_FRAMES {
        sink.report(Diagnostic::TooManyFrames(frames));
    }
}

/// Reports the first out of range pixel among `pixels`, which are visited in
/// scan order as `(row, column, pixel)`. Returns whether one was found.
pub fn check_clamping<I>(pixels: I, sink: &mut impl DiagnosticSink) -> bool
where
    I: IntoIterator<Item = (usize, usize, Pixel)>,
{
    let out_of_range = |component: i32| !(0..=255).contains(&component);
    let clamped = pixels.into_iter().find(|&(_, _, (red, green, blue))| {
        out_of_range(red) || out_of_range(green) || out_of_range(blue)
    });
    if let Some((row, column, pixel)) = clamped {
        sink.report(Diagnostic::ClampedPixel { row, column, pixel });
    }
    clamped.is_some()
}
