use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils JSON data hidden in an animated GIF
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Unveiled JSON will be stored in that file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output file",
        default_value = "extracted_data.json"
    )]
    pub output_file: PathBuf,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        steggy_core::commands::unveil(&self.media, &self.output_file)?;
        println!(
            "Extracted data successfully saved to {}",
            self.output_file.display()
        );

        Ok(())
    }
}
