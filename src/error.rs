use std::fmt::Display;

use crate::image::Pixel;

#[derive(Debug)]
pub enum Error {
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    DecodingFailed(String, ::image::ImageError),
    EncodingFailed(String, ::image::ImageError),
    AnimationEncodingFailed(String, ::gif::EncodingError),
    FailedToWriteImageData(String, std::io::Error),
    EmptyAnimation,
    InvalidScale(u32),
    InvalidSize(u32, u32),
    DimensionsTooLarge(usize, usize),
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    PixelOutOfRange {
        row: usize,
        column: usize,
        pixel: Pixel,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::DecodingFailed(path, error) => {
                write!(f, "Unable to decode image '{}': {}", path, error)
            }
            Self::EncodingFailed(path, error) => {
                write!(f, "Unable to encode image '{}': {}", path, error)
            }
            Self::AnimationEncodingFailed(path, error) => {
                write!(f, "Unable to encode animation '{}': {}", path, error)
            }
            Self::FailedToWriteImageData(path, error) => {
                write!(f, "Failed to write image data to '{}': {}", path, error)
            }
            Self::EmptyAnimation => write!(f, "An animation needs at least one frame"),
            Self::InvalidScale(scale) => {
                write!(f, "Scale must be a whole number of at least 1, got {}", scale)
            }
            Self::InvalidSize(width, height) => {
                write!(
                    f,
                    "Requested size {}x{} is invalid. Width and height must be at least 1.",
                    width, height
                )
            }
            Self::DimensionsTooLarge(width, height) => {
                write!(
                    f,
                    "Image of {}x{} pixels is too large for the output format",
                    width, height
                )
            }
            Self::RaggedRows {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {} has {} pixels, but the first row has {}. All rows need the same number of pixels.",
                    row, found, expected
                )
            }
            Self::PixelOutOfRange { row, column, pixel } => {
                write!(
                    f,
                    "Pixel {:?} at row {}, column {} has a component outside of 0 to 255",
                    pixel, row, column
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::FailedToWriteImageData(_, error) => Some(error),
            Self::DecodingFailed(_, error) | Self::EncodingFailed(_, error) => Some(error),
            Self::AnimationEncodingFailed(_, error) => Some(error),
            _ => None,
        }
    }
}
