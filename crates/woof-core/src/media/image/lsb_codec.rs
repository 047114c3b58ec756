use super::decoder::ImageRgbaColor;
use super::encoder::ImageRgbaColorMut;
use crate::universal_decoder::Decoder;
use crate::universal_encoder::Encoder;

use image::RgbaImage;
use std::io::{Read, Write};

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Image Decoder that implements Read
    pub fn decoder(input: &RgbaImage) -> Box<dyn Read + '_> {
        Box::new(Decoder::new(ImageRgbaColor::new(input)))
    }

    /// builds a LSB Image Encoder that implements Write
    pub fn encoder(carrier: &mut RgbaImage) -> Box<dyn Write + '_> {
        Box::new(Encoder::new(ImageRgbaColorMut::new(carrier)))
    }
}
