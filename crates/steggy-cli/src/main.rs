use clap::Parser;
use log::info;
use steggy_core::SteggyError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = std::result::Result<T, SteggyError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec_options();

    match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => match unveil.run() {
            Err(SteggyError::NoPayloadFound) => {
                info!("Nothing unveiled");
                println!("No valid URL-encoded data found in any frame.");
                Ok(())
            }
            result => result,
        },
    }
}
