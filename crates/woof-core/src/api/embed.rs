use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::info;

use crate::annotate;
use crate::capacity::capacity_bits;
use crate::frame::Frame;
use crate::media::{Media, Persist};
use crate::{CodecOptions, MetadataDocument, Result, WoofError};

pub fn prepare() -> EmbedApi {
    EmbedApi::default()
}

#[derive(Debug, Clone, PartialEq)]
enum DocumentSource {
    Document(MetadataDocument),
    File(PathBuf),
    Generated,
}

/// What ended up inside the carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedSummary {
    /// size of the uncompressed document text
    pub document_len: usize,
    /// size of the whole frame, magic and length included
    pub frame_len: usize,
    pub capacity_bits: u64,
}

#[derive(Default, Debug)]
pub struct EmbedApi {
    document: Option<DocumentSource>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl EmbedApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_document(mut self, document: MetadataDocument) -> Self {
        self.document = Some(DocumentSource::Document(document));
        self
    }

    /// The document is read from a JSON file when executing
    pub fn with_document_file<A: AsRef<Path>>(mut self, document_file: A) -> Self {
        self.document = Some(DocumentSource::File(document_file.as_ref().to_path_buf()));
        self
    }

    /// The document is produced from the carrier image by [`annotate::create_metadata`]
    pub fn with_generated_metadata(mut self) -> Self {
        self.document = Some(DocumentSource::Generated);
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The target is always written as PNG, whatever its extension
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<EmbedSummary> {
        let Some(image) = self.image else {
            return Err(WoofError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(WoofError::TargetNotSet);
        };
        let Some(source) = self.document else {
            return Err(WoofError::MissingDocument);
        };

        let mut media = Media::from_file(&image)?;
        let document = match source {
            DocumentSource::Document(document) => document,
            DocumentSource::File(path) => read_document(&path)?,
            DocumentSource::Generated => annotate::create_metadata(media.image()),
        };

        let frame = Frame::build(&document, &self.options)?;
        media.hide_frame(&frame)?.save_as(&output)?;

        let (width, height) = media.image().dimensions();
        let summary = EmbedSummary {
            document_len: frame.document_len(),
            frame_len: frame.len(),
            capacity_bits: capacity_bits(width, height),
        };
        info!("embedded {summary:?} into {output:?}");

        Ok(summary)
    }
}

fn read_document(path: &Path) -> Result<MetadataDocument> {
    let file = File::open(path).map_err(|source| WoofError::ReadError { source })?;

    Ok(serde_json::from_reader(BufReader::new(file))?)
}
