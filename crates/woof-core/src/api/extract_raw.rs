use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::media::Media;
use crate::{Result, WoofError};

pub fn prepare() -> ExtractRawApi {
    ExtractRawApi::default()
}

/// Dumps every packed LSB byte of an image, no frame interpretation is happening.
#[derive(Default, Debug)]
pub struct ExtractRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
}

impl ExtractRawApi {
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Returns the number of bytes written
    pub fn execute(self) -> Result<usize> {
        let Some(secret_media) = self.secret_media else {
            return Err(WoofError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(WoofError::TargetNotSet);
        };

        let media = Media::from_file(&secret_media)?;
        let raw = codec::extract_raw(media.image())?;

        let mut destination_file =
            File::create(destination_file).map_err(|source| WoofError::WriteError { source })?;
        destination_file
            .write_all(raw.as_slice())
            .map_err(|source| WoofError::WriteError { source })?;

        Ok(raw.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::MAGIC;
    use crate::test_utils::prepare_noise_image;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn should_dump_the_frame_with_its_magic() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        let woof = temp_dir.path().join("woof.png");
        let raw_file = temp_dir.path().join("raw.bin");
        prepare_noise_image(16, 16)
            .save(&carrier)
            .expect("Failed to write carrier");
        crate::api::embed::prepare()
            .with_document(json!(true))
            .with_image(&carrier)
            .with_output(&woof)
            .execute()
            .expect("Failed to embed document");

        let written = prepare()
            .from_secret_file(&woof)
            .into_raw_file(&raw_file)
            .execute()
            .expect("Failed to dump raw data");

        // 16 * 16 * 3 bits
        assert_eq!(written, 96);
        let raw = std::fs::read(raw_file).expect("Failed to read raw file");
        assert_eq!(raw.len(), 96);
        assert_eq!(&raw[..MAGIC.len()], MAGIC);
    }
}
