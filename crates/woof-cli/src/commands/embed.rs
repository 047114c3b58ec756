use std::path::PathBuf;

use clap::Args;
use woof_core::CodecOptions;

use crate::CliResult;

/// Hides a JSON document in an image
#[derive(Args, Debug)]
pub struct EmbedArgs {
    /// Carrier image such as PNG, JPEG or BMP, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file, always PNG encoded
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// JSON document to hide in the image
    #[arg(
        short = 'd',
        long = "document",
        value_name = "json file",
        required = true
    )]
    pub document: PathBuf,
}

impl EmbedArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let result = woof_core::api::embed::prepare()
            .with_options(options)
            .with_document_file(&self.document)
            .with_image(&self.media)
            .with_output(&self.write_to_file)
            .execute();
        let summary = super::hint_on_capacity(result, &self.media)?;

        println!(
            "Embedded {} bytes of JSON as a {} byte frame into {}",
            summary.document_len,
            summary.frame_len,
            self.write_to_file.display()
        );

        Ok(())
    }
}
