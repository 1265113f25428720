use std::ops::{Index, IndexMut};

use crate::error::Error;

pub mod raster;
pub mod reader;
pub mod writer;

/// Red, green and blue components, each normally between 0 and 255.
///
/// Components are plain `i32` so that arithmetic like `pixel.0 + 40` never
/// overflows while a picture is being edited. Values outside of 0 to 255 are
/// only dealt with when the image is saved, see [`Validation`].
pub type Pixel = (i32, i32, i32);

/// How pixel components outside of 0 to 255 are treated when saving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validation {
    /// Clamp each component to the nearest of 0 and 255.
    #[default]
    Permissive,
    /// Refuse to save and report the first offending pixel.
    Strict,
}

/// A rectangular grid of pixels: `height` rows of `width` pixels each.
///
/// `image[row]` is a row, so `image[row][col] = (255, 0, 0)` paints a single
/// pixel. Rows are slices and can't change their length, which keeps every
/// image rectangular.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    height: usize,
    width: usize,
    pixels: Vec<Pixel>,
}

impl Image {
    pub fn new(height: usize, width: usize, color: Pixel) -> Self {
        Self {
            height,
            width,
            pixels: vec![color; height * width],
        }
    }

    /// Builds an image from nested rows, rejecting rows of differing length.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> crate::Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut pixels = Vec::with_capacity(height * width);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedRows {
                    row: row_index,
                    expected: width,
                    found: row.len(),
                });
            }
            pixels.extend(row);
        }
        Ok(Self {
            height,
            width,
            pixels,
        })
    }

    pub(crate) fn from_pixels(height: usize, width: usize, pixels: Vec<Pixel>) -> Self {
        debug_assert_eq!(pixels.len(), height * width);
        Self {
            height,
            width,
            pixels,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        (0..self.height).map(move |row_index| &self[row_index])
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub(crate) fn indexed_pixels(&self) -> impl Iterator<Item = (usize, usize, Pixel)> + '_ {
        self.rows().enumerate().flat_map(|(row_index, row)| {
            row.iter()
                .enumerate()
                .map(move |(column_index, pixel)| (row_index, column_index, *pixel))
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<Pixel>> {
        self.rows().map(<[Pixel]>::to_vec).collect()
    }

    fn row_range(&self, row_index: usize) -> std::ops::Range<usize> {
        assert!(
            row_index < self.height,
            "row index {} is out of range for an image with {} rows",
            row_index,
            self.height
        );
        let start = row_index * self.width;
        start..start + self.width
    }
}

impl Index<usize> for Image {
    type Output = [Pixel];

    fn index(&self, row_index: usize) -> &Self::Output {
        let range = self.row_range(row_index);
        &self.pixels[range]
    }
}

impl IndexMut<usize> for Image {
    fn index_mut(&mut self, row_index: usize) -> &mut Self::Output {
        let range = self.row_range(row_index);
        &mut self.pixels[range]
    }
}

/// Creates an image of the given height and width filled with `color`.
///
/// ```
/// use pixel_canvas::create_img;
///
/// // a 16x16 image filled with white pixels
/// let img = create_img(16, 16, (255, 255, 255));
/// assert_eq!(img[15][15], (255, 255, 255));
/// ```
pub fn create_img(height: usize, width: usize, color: Pixel) -> Image {
    Image::new(height, width, color)
}

/// Returns a copy of `img`. Changing the copy never changes the original.
///
/// ```
/// use pixel_canvas::{copy_img, create_img, height, width};
///
/// // paint every even row of a copy red, keeping only the red component
/// fn red_filter_stripes(img: &pixel_canvas::Image) -> pixel_canvas::Image {
///     let mut red_img = copy_img(img);
///     for r in (0..height(img)).step_by(2) {
///         for c in 0..width(img) {
///             let pix = red_img[r][c];
///             red_img[r][c] = (pix.0, 0, 0);
///         }
///     }
///     red_img
/// }
///
/// let img = create_img(4, 4, (10, 20, 30));
/// let striped = red_filter_stripes(&img);
/// assert_eq!(striped[0][0], (10, 0, 0));
/// assert_eq!(striped[1][0], (10, 20, 30));
/// assert_eq!(img[0][0], (10, 20, 30));
/// ```
pub fn copy_img(img: &Image) -> Image {
    img.clone()
}

/// Number of rows in the image.
pub fn height(img: &Image) -> usize {
    img.height()
}

/// Number of columns in the image, which is the number of pixels in a row.
pub fn width(img: &Image) -> usize {
    img.width()
}

#[cfg(test)]
mod tests {
    use super::{copy_img, create_img, height, width, Error, Image, Pixel};

    const RED: Pixel = (255, 0, 0);
    const BLUE: Pixel = (0, 0, 255);
    const BLACK: Pixel = (0, 0, 0);

    #[test]
    fn create_img_has_requested_geometry() {
        for (h, w) in [(0, 0), (1, 1), (3, 7), (16, 16), (10, 1)] {
            let img = create_img(h, w, BLUE);
            assert_eq!(height(&img), h);
            assert_eq!(width(&img), w);
            assert!(img.pixels().iter().all(|pixel| *pixel == BLUE));
        }
    }

    #[test]
    fn create_img_matches_nested_rows() {
        let img = create_img(2, 2, RED);
        assert_eq!(img.to_rows(), vec![vec![RED, RED], vec![RED, RED]]);
    }

    #[test]
    fn copy_is_independent_of_original() {
        let original = create_img(2, 2, RED);
        let mut copy = copy_img(&original);
        assert_eq!(copy, original);

        copy[0][0] = BLACK;
        assert_eq!(original[0][0], RED);
        assert_eq!(copy[0][0], BLACK);
    }

    #[test]
    fn original_changes_do_not_reach_copy() {
        let mut original = create_img(3, 2, RED);
        let copy = copy_img(&original);
        original[2][1] = BLUE;
        assert_eq!(copy[2][1], RED);
    }

    #[test]
    fn indexing_addresses_row_then_column() {
        let mut img = create_img(3, 4, BLACK);
        img[1][3] = RED;
        assert_eq!(img.pixels()[4 + 3], RED);
        assert_eq!(img[1].len(), 4);
    }

    #[test]
    #[should_panic]
    fn indexing_past_last_row_panics() {
        let img = create_img(2, 0, BLACK);
        let _ = &img[2];
    }

    #[rustfmt::skip]
    #[test]
    fn from_rows_keeps_checkered_layout() {
        let img = Image::from_rows(vec![
            vec![RED,  BLUE, RED,  BLUE],
            vec![BLUE, RED,  BLUE, RED],
            vec![RED,  BLUE, RED,  BLUE],
        ])
        .expect("rows are rectangular");
        assert_eq!(height(&img), 3);
        assert_eq!(width(&img), 4);
        assert_eq!(img[1][0], BLUE);
        assert_eq!(img[2][2], RED);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let result = Image::from_rows(vec![vec![RED, RED], vec![RED]]);
        match result {
            Err(Error::RaggedRows {
                row,
                expected,
                found,
            }) => {
                assert_eq!((row, expected, found), (1, 2, 1));
            }
            _ => panic!("ragged rows not detected"),
        }
    }

    #[test]
    fn from_rows_accepts_no_rows() {
        let img = Image::from_rows(Vec::new()).expect("empty image is rectangular");
        assert_eq!(height(&img), 0);
        assert_eq!(width(&img), 0);
    }

    #[test]
    fn out_of_range_components_are_stored_unchanged() {
        let mut img = create_img(1, 1, BLACK);
        img[0][0] = (300, -20, 128);
        assert_eq!(img[0][0], (300, -20, 128));
    }
}
