use image::buffer::{Pixels, PixelsMut};
use image::Pixel;
use std::iter::Take;
use std::slice::{Iter, IterMut};

/// Row-major, read-only access to the color channels of every pixel.
pub(crate) struct ColorIter<'a, P: Pixel + 'a> {
    pixels: Pixels<'a, P>,
    colors: Option<Take<Iter<'a, P::Subpixel>>>,
    take: usize,
}

impl<'a, P: Pixel + 'a> ColorIter<'a, P> {
    pub fn from_pixels(pixels: Pixels<'a, P>, skip_alpha: bool) -> Self {
        Self {
            pixels,
            colors: None,
            take: if skip_alpha { 3 } else { 4 },
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for ColorIter<'a, P> {
    type Item = &'a P::Subpixel;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(c) = self.colors.as_mut().and_then(Iterator::next) {
                return Some(c);
            }
            let pixel = self.pixels.next()?;
            self.colors = Some(pixel.channels().iter().take(self.take));
        }
    }
}

/// Row-major, mutable access to the color channels of every pixel.
pub(crate) struct ColorIterMut<'a, P: Pixel + 'a> {
    pixels: PixelsMut<'a, P>,
    colors: Option<Take<IterMut<'a, P::Subpixel>>>,
    take: usize,
}

impl<'a, P: Pixel + 'a> ColorIterMut<'a, P> {
    pub fn from_pixels_mut(pixels: PixelsMut<'a, P>, skip_alpha: bool) -> Self {
        Self {
            pixels,
            colors: None,
            take: if skip_alpha { 3 } else { 4 },
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for ColorIterMut<'a, P> {
    type Item = &'a mut P::Subpixel;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(c) = self.colors.as_mut().and_then(Iterator::next) {
                return Some(c);
            }
            let pixel = self.pixels.next()?;
            self.colors = Some(pixel.channels_mut().iter_mut().take(self.take));
        }
    }
}
