use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::media::Media;
use crate::{Extraction, MetadataDocument, Result, WoofError};

pub fn prepare() -> ExtractApi {
    ExtractApi::default()
}

#[derive(Default, Debug)]
pub struct ExtractApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
}

impl ExtractApi {
    /// This is the WOOF image that contains the document to be extracted
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// The document is additionally written to this file as pretty JSON
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Fails with [`WoofError::NoWoofData`] when the image carries no readable frame
    pub fn execute(self) -> Result<MetadataDocument> {
        let Some(secret_media) = self.secret_media else {
            return Err(WoofError::CarrierNotSet);
        };

        let media = Media::from_file(&secret_media)?;
        let Extraction::Present(document) = media.unveil_document() else {
            info!("no WOOF metadata found in {secret_media:?}");
            return Err(WoofError::NoWoofData);
        };

        if let Some(output_file) = self.output_file {
            let file =
                File::create(&output_file).map_err(|source| WoofError::WriteError { source })?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &document)?;
            writer
                .flush()
                .map_err(|source| WoofError::WriteError { source })?;
        }

        Ok(document)
    }
}
