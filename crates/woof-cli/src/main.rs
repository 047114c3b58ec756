use clap::Parser;

use woof_core::CodecOptions;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = woof_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = CodecOptions::default().with_compression_level(args.compression_level);

    match args.command {
        Commands::Convert(args) => args.run(options),
        Commands::Embed(args) => args.run(options),
        Commands::Extract(args) => args.run(),
        Commands::ExtractRaw(args) => args.run(),
        Commands::Info(args) => args.run(),
    }
}
