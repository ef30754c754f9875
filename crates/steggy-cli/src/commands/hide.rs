use std::path::PathBuf;

use clap::Args;
use steggy_core::CodecOptions;

use crate::CliResult;

/// Hides JSON data in one frame of an animated GIF
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Animated GIF used as carrier, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// File with the JSON data to hide
    #[arg(short = 'd', long = "data", value_name = "data file", required = true)]
    pub data_file: PathBuf,

    /// Final image will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        default_value = "cat-crypt.gif"
    )]
    pub write_to_file: PathBuf,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let frame_index = steggy_core::commands::hide(
            &self.media,
            &self.write_to_file,
            &self.data_file,
            options,
        )?;
        println!(
            "Data successfully embedded in frame {frame_index} of {}",
            self.write_to_file.display()
        );

        Ok(())
    }
}
