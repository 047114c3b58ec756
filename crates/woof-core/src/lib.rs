//! # WOOF Core API
//!
//! WOOF hides a structured metadata document inside the pixels of an ordinary
//! lossless RGBA image. The result stays a valid PNG that any viewer opens,
//! the document comes back only through [`codec::extract`].
//!
//! A frame is `"WOOF_STEG_V2" || u32 big-endian length || zlib(compact JSON)`,
//! written one bit per R, G and B channel, most significant bit first, pixels
//! in row-major order. Alpha is never touched.
//!
//! # Usage Examples
//!
//! ## Embed a generated document into an image
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("puppy.png");
//! image::RgbaImage::from_pixel(64, 64, image::Rgba([180, 140, 100, 255]))
//!     .save(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! woof_core::api::embed::prepare()
//!     .with_generated_metadata()      // heuristic features and annotations of the image
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("puppy.woof"))
//!     .execute()
//!     .expect("Failed to embed metadata in image");
//! ```
//!
//! ## Extract the document again
//!
//! ```rust
//! use serde_json::json;
//! use woof_core::{codec, CodecOptions, Extraction};
//!
//! let carrier = image::RgbaImage::from_pixel(16, 16, image::Rgba([0, 0, 0, 255]));
//! let woof = codec::embed(&carrier, &json!({"tags": ["cute"]}), &CodecOptions::default())
//!     .expect("Failed to embed");
//!
//! match codec::extract(&woof) {
//!     Extraction::Present(document) => assert_eq!(document["tags"][0], "cute"),
//!     Extraction::Absent => unreachable!("the frame was just embedded"),
//! }
//! ```

#![warn(clippy::redundant_else, clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod annotate;
pub mod api;
pub mod bit_iterator;
pub mod capacity;
pub mod codec;
pub mod document;
pub mod error;
pub mod frame;
pub mod media;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::bit_iterator::BitIterator;
pub use crate::codec::{embed, extract};
pub use crate::document::{Absence, Extraction, MetadataDocument};
pub use crate::error::WoofError;
pub use crate::frame::{Frame, MAGIC};
pub use crate::media::{CodecOptions, Media, Persist};
pub use crate::result::Result;
