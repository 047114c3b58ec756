use std::path::PathBuf;

use clap::Args;

/// Shows the capacity of an image and whether it carries a WOOF document
#[derive(Args, Debug)]
pub struct InfoArgs {
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,
}

impl InfoArgs {
    pub fn run(self) -> crate::CliResult<()> {
        let info = woof_core::api::info::prepare()
            .from_file(&self.media)
            .execute()?;

        println!("File:       {}", self.media.display());
        println!("Dimensions: {}x{}", info.width, info.height);
        println!(
            "Capacity:   {} bits ({} bytes)",
            info.capacity_bits,
            info.capacity_bytes()
        );
        match &info.frame {
            Ok(document) => {
                let keys = document
                    .as_object()
                    .map(|o| o.keys().cloned().collect::<Vec<_>>().join(", "))
                    .unwrap_or_default();
                println!("WOOF data:  present [{keys}]");
            }
            Err(reason) => println!("WOOF data:  none ({reason})"),
        }

        Ok(())
    }
}
