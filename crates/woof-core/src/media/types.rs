use std::fs::File;
use std::io::{BufReader, BufWriter, Seek, Write};
use std::path::Path;

pub use image::RgbaImage;
use image::{ImageFormat, io::Reader as ImageReader};
use log::{debug, error, warn};

use crate::codec;
use crate::document::{Extraction, MetadataDocument};
use crate::error::WoofError;
use crate::frame::Frame;
use crate::media::CodecOptions;
use crate::result::Result;

use super::Persist;

/// a lossless RGBA carrier for a WOOF frame
///
/// Whatever format the carrier was read from, it is always persisted as PNG,
/// so every channel byte survives the round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    image: RgbaImage,
}

impl Media {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Opens any supported raster file and converts it to RGBA with 8 bits per channel.
    ///
    /// The format is guessed from the content, so a `.woof` file is read as the PNG it is.
    pub fn from_file(f: &Path) -> Result<Self> {
        let reader = open_reader(f)?;
        match reader.format() {
            Some(ImageFormat::Jpeg) => {
                warn!("{f:?} is a lossy JPEG, it can carry a frame only after being saved as PNG")
            }
            format => debug!("{f:?} detected as {format:?}"),
        }

        let image = reader
            .decode()
            .map_err(|e| {
                error!("Error decoding image {f:?}: {e}");
                WoofError::InvalidImageMedia
            })?
            .to_rgba8();

        Ok(Self { image })
    }

    /// Width and height of a carrier file, read from its header only.
    pub fn dimensions(f: &Path) -> Result<(u32, u32)> {
        open_reader(f)?.into_dimensions().map_err(|e| {
            error!("Error reading dimensions of {f:?}: {e}");
            WoofError::InvalidImageMedia
        })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Embeds an already built frame; all-or-nothing, see [`codec::embed_frame`].
    pub fn hide_frame(&mut self, frame: &Frame) -> Result<&mut Self> {
        codec::embed_frame(&mut self.image, frame)?;

        Ok(self)
    }

    pub fn hide_document(
        &mut self,
        document: &MetadataDocument,
        opts: &CodecOptions,
    ) -> Result<&mut Self> {
        let frame = Frame::build(document, opts)?;
        self.hide_frame(&frame)
    }

    pub fn unveil_document(&self) -> Extraction {
        codec::extract(&self.image)
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                WoofError::ImageEncodingError
            })
    }
}

/// Opens `f` with the format guessed from its content.
fn open_reader(f: &Path) -> Result<ImageReader<BufReader<File>>> {
    let reader = ImageReader::open(f)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| {
            error!("Error opening file {f:?}: {source}");
            WoofError::ReadError { source }
        })?;
    if reader.format().is_none() {
        return Err(WoofError::UnsupportedMedia);
    }

    Ok(reader)
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            WoofError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer)?;

        writer
            .flush()
            .map_err(|source| WoofError::WriteError { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;
    use std::io::Cursor;

    #[test]
    fn should_fail_for_a_missing_carrier_file() {
        let result = Media::from_file(Path::new("some_random_file.png"));
        match result.err() {
            Some(WoofError::ReadError { .. }) => (),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn should_fail_for_a_non_image_file() {
        let result = Media::from_file(Path::new("Cargo.toml"));
        match result.err() {
            Some(WoofError::UnsupportedMedia) => (),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn should_write_png_bytes() {
        let media = Media::from_image(prepare_5x5_image());
        let mut buf = Cursor::new(Vec::new());
        media.save_to_writer(&mut buf).expect("Cannot write png");

        let png = buf.into_inner();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        let reloaded = image::load_from_memory(&png)
            .expect("Cannot read png")
            .to_rgba8();
        assert_eq!(&reloaded, media.image());
    }

    #[test]
    fn should_detect_the_format_from_the_content() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let no_extension = temp_dir.path().join("carrier");
        Media::from_image(prepare_5x5_image())
            .save_as(&no_extension)
            .expect("Cannot write carrier");

        assert_eq!(Media::dimensions(&no_extension).unwrap(), (5, 5));
        assert_eq!(
            Media::from_file(&no_extension).unwrap().image(),
            &prepare_5x5_image()
        );
        assert!(matches!(
            Media::dimensions(Path::new("Cargo.toml")),
            Err(WoofError::UnsupportedMedia)
        ));
    }
}
