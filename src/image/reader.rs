use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use ::image::codecs::gif::GifDecoder;
use ::image::codecs::png::PngDecoder;
use ::image::codecs::webp::WebPDecoder;
use ::image::imageops::FilterType;
use ::image::{AnimationDecoder, DynamicImage, ImageError, ImageFormat, ImageReader};
use clap::builder::PossibleValue;
use clap::ValueEnum;

use crate::error::Error;
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (width, height) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("Expected a size like 16x16, got '{}'", s))?;
        let parse = |value: &str| {
            value
                .trim()
                .parse::<u32>()
                .map_err(|e| format!("Invalid size component '{}': {}", value, e))
        };
        Ok(Self::new(parse(width)?, parse(height)?))
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResampleFilter {
    Nearest,
    Bilinear,
    Bicubic,
    Gaussian,
    #[default]
    Lanczos,
}

impl ValueEnum for ResampleFilter {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Nearest,
            Self::Bilinear,
            Self::Bicubic,
            Self::Gaussian,
            Self::Lanczos,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Nearest => Some(PossibleValue::new("Nearest")),
            Self::Bilinear => Some(PossibleValue::new("Bilinear")),
            Self::Bicubic => Some(PossibleValue::new("Bicubic")),
            Self::Gaussian => Some(PossibleValue::new("Gaussian")),
            Self::Lanczos => Some(PossibleValue::new("Lanczos")),
        }
    }
}

impl From<ResampleFilter> for FilterType {
    fn from(value: ResampleFilter) -> Self {
        match value {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Bilinear => FilterType::Triangle,
            ResampleFilter::Bicubic => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos => FilterType::Lanczos3,
        }
    }
}

pub(crate) fn path_name(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn open(path: &Path) -> Result<ImageReader<BufReader<File>>> {
    ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| Error::UnableToOpenInputFileForReading(path_name(path), e))
}

/// Decodes the first frame of whatever image `path` holds.
pub fn decode_first_frame(path: &Path) -> Result<DynamicImage> {
    open(path)?
        .decode()
        .map_err(|e| Error::DecodingFailed(path_name(path), e))
}

/// Decodes every frame of an animated GIF, APNG or WebP file. Any other file
/// decodes to a single frame.
pub fn decode_all_frames(path: &Path) -> Result<Vec<DynamicImage>> {
    let reader = open(path)?;
    let decoding_failed = |e: ImageError| Error::DecodingFailed(path_name(path), e);
    match reader.format() {
        Some(ImageFormat::Gif) => {
            let decoder = GifDecoder::new(reader.into_inner()).map_err(decoding_failed)?;
            collect_frames(decoder).map_err(decoding_failed)
        }
        Some(ImageFormat::Png) => {
            let decoder = PngDecoder::new(reader.into_inner()).map_err(decoding_failed)?;
            if decoder.is_apng().map_err(decoding_failed)? {
                let decoder = decoder.apng().map_err(decoding_failed)?;
                collect_frames(decoder).map_err(decoding_failed)
            } else {
                let still = DynamicImage::from_decoder(decoder).map_err(decoding_failed)?;
                Ok(vec![still])
            }
        }
        Some(ImageFormat::WebP) => {
            let decoder = WebPDecoder::new(reader.into_inner()).map_err(decoding_failed)?;
            if decoder.has_animation() {
                collect_frames(decoder).map_err(decoding_failed)
            } else {
                let still = DynamicImage::from_decoder(decoder).map_err(decoding_failed)?;
                Ok(vec![still])
            }
        }
        _ => Ok(vec![reader.decode().map_err(decoding_failed)?]),
    }
}

fn collect_frames<'a, D: AnimationDecoder<'a>>(
    decoder: D,
) -> std::result::Result<Vec<DynamicImage>, ImageError> {
    let frames = decoder.into_frames().collect_frames()?;
    log::debug!("Decoded {} animation frames", frames.len());
    Ok(frames
        .into_iter()
        .map(|frame| DynamicImage::ImageRgba8(frame.into_buffer()))
        .collect())
}

/// Resizes to exactly `size`, ignoring the aspect ratio like the original
/// picture tools do.
pub fn resize(raster: &DynamicImage, size: Size, filter: ResampleFilter) -> Result<DynamicImage> {
    if size.width == 0 || size.height == 0 {
        return Err(Error::InvalidSize(size.width, size.height));
    }
    Ok(raster.resize_exact(size.width, size.height, filter.into()))
}

#[cfg(test)]
mod tests {
    use ::image::imageops::FilterType;
    use ::image::{DynamicImage, Rgb, RgbImage};

    use super::{resize, ResampleFilter, Size};
    use crate::error::Error;

    #[test]
    fn parse_size_with_lowercase_separator() {
        let size: Size = "32x16".parse().expect("valid size");
        assert_eq!(size, Size::new(32, 16));
    }

    #[test]
    fn parse_size_with_uppercase_separator_and_spaces() {
        let size: Size = " 8 X 4".parse().expect("valid size");
        assert_eq!(size, Size::new(8, 4));
    }

    #[test]
    fn parse_size_without_separator_fails() {
        assert!("1616".parse::<Size>().is_err());
        assert!("16xabc".parse::<Size>().is_err());
    }

    #[test]
    fn size_from_tuple_is_width_then_height() {
        assert_eq!(Size::from((20, 10)), Size::new(20, 10));
        assert_eq!(Size::new(20, 10).to_string(), "20x10");
    }

    #[test]
    fn default_filter_is_lanczos() {
        assert_eq!(ResampleFilter::default(), ResampleFilter::Lanczos);
        assert_eq!(FilterType::from(ResampleFilter::default()), FilterType::Lanczos3);
    }

    #[test]
    fn resize_produces_requested_size() {
        let raster = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 6, Rgb([1, 2, 3])));
        let resized = resize(&raster, Size::new(4, 3), ResampleFilter::Nearest)
            .expect("size is valid")
            .to_rgb8();
        assert_eq!(resized.dimensions(), (4, 3));
        assert!(resized.pixels().all(|pixel| *pixel == Rgb([1, 2, 3])));
    }

    #[test]
    fn resize_to_zero_fails() {
        let raster = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        let result = resize(&raster, Size::new(0, 4), ResampleFilter::Lanczos);
        assert!(matches!(result, Err(Error::InvalidSize(0, 4))));
    }
}
