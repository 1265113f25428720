pub mod gif;
pub mod png;

pub use self::gif::GifAnimationWriter;
pub use self::png::PngImageWriter;

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}
