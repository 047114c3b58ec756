use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils the JSON document of a WOOF image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Source image that contains a document
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Document will be stored in that file instead of printed
    #[arg(short = 'o', long = "out", value_name = "json file")]
    pub output_file: Option<PathBuf>,
}

impl ExtractArgs {
    pub fn run(self) -> CliResult<()> {
        let api = woof_core::api::extract::prepare().from_secret_file(&self.media);

        match self.output_file {
            Some(output_file) => {
                api.into_output_file(&output_file).execute()?;
                println!("Document written to {}", output_file.display());
            }
            None => {
                let document = api.execute()?;
                println!("{}", serde_json::to_string_pretty(&document)?);
            }
        }

        Ok(())
    }
}
