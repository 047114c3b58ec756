//! How many frame bits fit into an image.
//!
//! Exactly one bit is written into every R, G and B channel, alpha is never used.
//! The validator and the embedder both rely on [`BITS_PER_CHANNEL`].

use log::debug;

use crate::error::WoofError;
use crate::result::Result;

pub const BITS_PER_CHANNEL: u64 = 1;
pub const CHANNELS_PER_PIXEL: u64 = 3;

/// capacity in bits, `width * height * 3`
pub fn capacity_bits(width: u32, height: u32) -> u64 {
    u64::from(width) * u64::from(height) * CHANNELS_PER_PIXEL * BITS_PER_CHANNEL
}

/// Fails with [`WoofError::CapacityExceeded`] when `required_bits` do not fit.
pub fn ensure_capacity(required_bits: u64, width: u32, height: u32) -> Result<()> {
    let available = capacity_bits(width, height);
    debug!("frame needs {required_bits} bits, {width}x{height} image offers {available} bits");

    if required_bits > available {
        return Err(WoofError::CapacityExceeded {
            required: required_bits,
            available,
        });
    }

    Ok(())
}

/// Smallest dimensions with the same aspect ratio that can carry `required_bits`.
/// Degenerate images get a square suggestion.
pub fn suggest_dimensions(required_bits: u64, width: u32, height: u32) -> (u32, u32) {
    let pixels_needed = required_bits.div_ceil(CHANNELS_PER_PIXEL * BITS_PER_CHANNEL);
    if width == 0 || height == 0 {
        let side = (pixels_needed as f64).sqrt().ceil() as u32;
        return (side.max(1), side.max(1));
    }

    let available = capacity_bits(width, height);
    if required_bits <= available {
        return (width, height);
    }

    let scale = (required_bits as f64 / available as f64).sqrt();
    let mut w = (f64::from(width) * scale).ceil() as u32;
    let mut h = (f64::from(height) * scale).ceil() as u32;
    // float rounding may land a pixel short
    while capacity_bits(w, h) < required_bits {
        if u64::from(w) * u64::from(height) <= u64::from(h) * u64::from(width) {
            w += 1;
        } else {
            h += 1;
        }
    }

    (w, h)
}
