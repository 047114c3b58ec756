use std::path::PathBuf;

use clap::Args;

/// Dumps the raw bit plane of an image, no frame parsing involved
#[derive(Args, Debug)]
pub struct ExtractRawArgs {
    /// Source media that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl ExtractRawArgs {
    pub fn run(self) -> crate::CliResult<()> {
        let written = woof_core::api::extract_raw::prepare()
            .from_secret_file(self.media)
            .into_raw_file(&self.output_file)
            .execute()?;

        println!("{written} bytes written to {}", self.output_file.display());

        Ok(())
    }
}
