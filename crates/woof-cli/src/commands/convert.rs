use std::path::PathBuf;

use clap::Args;
use woof_core::CodecOptions;

use crate::CliResult;

/// Analyzes an image and embeds the generated metadata, producing a WOOF file
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Carrier image such as PNG, JPEG or BMP, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// WOOF image will be stored as file, always PNG encoded
    #[arg(short = 'o', long = "out", value_name = "woof file", required = true)]
    pub write_to_file: PathBuf,
}

impl ConvertArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let result = woof_core::api::embed::prepare()
            .with_options(options)
            .with_generated_metadata()
            .with_image(&self.media)
            .with_output(&self.write_to_file)
            .execute();
        let summary = super::hint_on_capacity(result, &self.media)?;

        println!(
            "Converted {} to {} ({} of {} bytes used)",
            self.media.display(),
            self.write_to_file.display(),
            summary.frame_len,
            summary.capacity_bits / 8
        );

        Ok(())
    }
}
