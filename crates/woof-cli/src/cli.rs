use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: zlib compression level of the embedded document (0-9)
    #[arg(long = "x-compression-level", default_value = "9")]
    pub compression_level: u32,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Convert(convert::ConvertArgs),
    Embed(embed::EmbedArgs),
    Extract(extract::ExtractArgs),
    ExtractRaw(extract_raw::ExtractRawArgs),
    Info(info::InfoArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_parse_embed_with_default_compression() {
        let args = CliArgs::try_parse_from([
            "woof", "embed", "-i", "dog.png", "-o", "dog.woof", "-d", "doc.json",
        ])
        .unwrap();

        assert_eq!(args.compression_level, 9);
        assert!(matches!(args.command, Commands::Embed(_)));
    }

    #[test]
    fn should_parse_the_experimental_compression_level() {
        let args = CliArgs::try_parse_from([
            "woof",
            "--x-compression-level",
            "1",
            "extract-raw",
            "--in",
            "dog.woof",
            "--out",
            "dog.bin",
        ])
        .unwrap();

        assert_eq!(args.compression_level, 1);
        assert!(matches!(args.command, Commands::ExtractRaw(_)));
    }

    #[test]
    fn should_require_a_document_for_embed() {
        assert!(
            CliArgs::try_parse_from(["woof", "embed", "-i", "dog.png", "-o", "dog.woof"]).is_err()
        );
    }
}
