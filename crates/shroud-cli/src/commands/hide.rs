use std::path::PathBuf;

use clap::Args;
use shroud_core::CodecOptions;

use crate::CliResult;

/// Hides an encrypted message in a PNG/BMP image, WAV audio or Y4M video
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password used to encrypt the message, prompted for if omitted
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Carrier media file such as PNG image, WAV audio or Y4M video, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final media will be stored as file, must be of the same kind as the carrier
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output media file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let password = if self.password.is_none() {
            crate::cli::ask_for_password(true)
        } else {
            self.password
        };

        shroud_core::commands::hide(
            &self.media,
            &self.write_to_file,
            Some(self.message),
            password,
            options,
        )
    }
}
