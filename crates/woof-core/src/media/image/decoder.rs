use crate::media::image::iterators::ColorIter;
use image::{Rgba, RgbaImage};

/// Read-only carrier over the R, G and B channels of an `RgbaImage`,
/// visited row by row, left to right. Alpha is never yielded.
///
/// ## Example of usage
/// ```rust
/// use std::io::Read;
/// use woof_core::media::image::decoder::ImageRgbaColor;
/// use woof_core::universal_decoder::Decoder;
///
/// let image = image::RgbaImage::from_pixel(8, 1, image::Rgba([1, 0, 1, 255]));
/// let mut secret = vec![0; 3];
///
/// Decoder::new(ImageRgbaColor::new(&image))
///     .read_exact(&mut secret)
///     .expect("Cannot read 3 bytes from decoder");
///
/// // the channel bits repeat as 1, 0, 1
/// assert_eq!(secret, vec![0b1011_0110, 0b1101_1011, 0b0110_1101]);
/// ```
pub struct ImageRgbaColor<'i> {
    colors: ColorIter<'i, Rgba<u8>>,
}

impl<'i> ImageRgbaColor<'i> {
    /// constructor for a given `RgbaImage` that lives somewhere
    pub fn new(input: &'i RgbaImage) -> Self {
        Self {
            colors: ColorIter::from_pixels(input.pixels(), true),
        }
    }
}

impl Iterator for ImageRgbaColor<'_> {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.colors.next().copied()
    }
}

#[cfg(test)]
mod decoder_tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;

    #[test]
    fn it_should_iterate_over_all_colors_of_an_image() {
        let img = prepare_5x5_image();
        let (width, height) = img.dimensions();
        let mut carrier = ImageRgbaColor::new(&img);

        for y in 0..height {
            for x in 0..width {
                let expected_pixel = img.get_pixel(x, y);
                for color_idx in 0..3 {
                    let given_color = carrier.next().unwrap_or_else(|| {
                        panic!("Color at ({x}, {y}) was not even existing!")
                    });

                    assert_eq!(
                        given_color, expected_pixel.0[color_idx],
                        "Color at ({x}, {y}) does not match"
                    );
                }
            }
        }
        // ensure iterator is exhausted
        assert!(carrier.next().is_none());
    }
}
