//! The stateless WOOF codec: embedding and extraction over a single `RgbaImage`.
//!
//! ## Example of usage
//! ```rust
//! use serde_json::json;
//! use woof_core::{codec, CodecOptions, Extraction};
//!
//! let carrier = image::RgbaImage::from_pixel(32, 32, image::Rgba([120, 80, 40, 255]));
//! let document = json!({"scene_description": "a puppy"});
//!
//! let woof = codec::embed(&carrier, &document, &CodecOptions::default())
//!     .expect("Cannot embed the document");
//!
//! assert_eq!(codec::extract(&woof), Extraction::Present(document));
//! assert_eq!(codec::extract(&carrier), Extraction::Absent);
//! ```

use log::{debug, error};
use std::io::{Read, Write};

use crate::capacity;
use crate::document::{Absence, Extraction, MetadataDocument};
use crate::error::WoofError;
use crate::frame::{self, Frame};
use crate::media::image::LsbCodec;
use crate::media::CodecOptions;
use crate::result::Result;
use image::RgbaImage;

/// Returns a copy of `image` carrying `document`; `image` itself is left alone.
pub fn embed(
    image: &RgbaImage,
    document: &MetadataDocument,
    opts: &CodecOptions,
) -> Result<RgbaImage> {
    let frame = Frame::build(document, opts)?;
    let (width, height) = image.dimensions();
    capacity::ensure_capacity(frame.bit_len(), width, height)?;

    let mut carrier = image.clone();
    write_frame(&mut carrier, &frame)?;

    Ok(carrier)
}

/// Embeds `document` into `image` in place. On error the image is untouched.
pub fn embed_in_place(
    image: &mut RgbaImage,
    document: &MetadataDocument,
    opts: &CodecOptions,
) -> Result<()> {
    let frame = Frame::build(document, opts)?;
    embed_frame(image, &frame)
}

/// Writes a prebuilt frame into the R, G, B least significant bits of `image`,
/// row by row. The capacity is checked before the first pixel is touched.
pub fn embed_frame(image: &mut RgbaImage, frame: &Frame) -> Result<()> {
    let (width, height) = image.dimensions();
    capacity::ensure_capacity(frame.bit_len(), width, height)?;

    write_frame(image, frame)
}

/// The capacity has to be checked by the caller.
fn write_frame(image: &mut RgbaImage, frame: &Frame) -> Result<()> {
    let (width, height) = image.dimensions();
    LsbCodec::encoder(image)
        .write_all(frame.as_bytes())
        .map_err(|e| {
            error!("Error embedding frame: {e}, kind {}", e.kind());
            WoofError::ImageEncodingError
        })?;
    debug!("embedded {} frame bytes into {width}x{height} image", frame.len());

    Ok(())
}

/// Scans `image` for a frame and reports why none could be read.
pub fn inspect(image: &RgbaImage) -> std::result::Result<MetadataDocument, Absence> {
    let mut decoder = LsbCodec::decoder(image);
    frame::read_frame(&mut decoder)
}

/// Scans `image` for a frame. Never fails: foreign, corrupted or truncated
/// data all end up as [`Extraction::Absent`].
pub fn extract(image: &RgbaImage) -> Extraction {
    match inspect(image) {
        Ok(document) => Extraction::Present(document),
        Err(reason) => {
            debug!("no WOOF data: {reason}");
            Extraction::Absent
        }
    }
}

/// All packed LSB bytes of the image, without any interpretation.
pub fn extract_raw(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    LsbCodec::decoder(image).read_to_end(&mut buf)?;

    Ok(buf)
}
