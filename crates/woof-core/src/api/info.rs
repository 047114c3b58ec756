use std::path::{Path, PathBuf};

use crate::capacity::capacity_bits;
use crate::codec;
use crate::media::Media;
use crate::{Absence, MetadataDocument, Result, WoofError};

pub fn prepare() -> InfoApi {
    InfoApi::default()
}

/// Basic facts about a carrier image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub capacity_bits: u64,
    pub frame: std::result::Result<MetadataDocument, Absence>,
}

impl ImageInfo {
    pub fn capacity_bytes(&self) -> u64 {
        self.capacity_bits / 8
    }

    pub fn has_woof_data(&self) -> bool {
        self.frame.is_ok()
    }
}

#[derive(Default, Debug)]
pub struct InfoApi {
    media: Option<PathBuf>,
}

impl InfoApi {
    pub fn from_file(mut self, media: impl AsRef<Path>) -> Self {
        self.media = Some(media.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<ImageInfo> {
        let Some(media) = self.media else {
            return Err(WoofError::CarrierNotSet);
        };

        let media = Media::from_file(&media)?;
        let image = media.image();
        let (width, height) = image.dimensions();

        Ok(ImageInfo {
            width,
            height,
            capacity_bits: capacity_bits(width, height),
            frame: codec::inspect(image),
        })
    }
}
