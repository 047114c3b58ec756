use image::{Rgba, RgbaImage};

use crate::media::image::iterators::ColorIterMut;

/// Mutable carrier over the R, G and B channels of an `RgbaImage`,
/// visited row by row, left to right. Alpha is never yielded.
pub struct ImageRgbaColorMut<'a> {
    colors: ColorIterMut<'a, Rgba<u8>>,
}

impl<'a> ImageRgbaColorMut<'a> {
    /// constructor for a given `RgbaImage` that lives somewhere
    pub fn new(input: &'a mut RgbaImage) -> Self {
        Self {
            colors: ColorIterMut::from_pixels_mut(input.pixels_mut(), true),
        }
    }
}

impl<'a> Iterator for ImageRgbaColorMut<'a> {
    type Item = &'a mut u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.colors.next()
    }
}
