use clap::{Parser, Subcommand};
use steggy_core::CodecOptions;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: seed for picking the carrying frame, makes the output reproducible
    #[arg(long = "x-frame-seed", value_name = "seed", global = true)]
    pub frame_seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions::default().with_frame_seed(self.frame_seed)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
}
