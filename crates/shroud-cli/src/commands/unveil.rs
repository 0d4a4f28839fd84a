use std::path::PathBuf;

use clap::Args;
use shroud_core::{CodecOptions, ShroudError};

use crate::CliResult;

/// Unveils and decrypts a message hidden in an image, audio or video file
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password used to encrypt the message, prompted for if omitted
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Source media that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// The message will be stored in that file instead of being printed
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let password = if self.password.is_none() {
            crate::cli::ask_for_password(false)
        } else {
            self.password
        };

        let message = shroud_core::commands::unveil(&self.media, password, options)?;
        match self.output_file {
            Some(file) => {
                std::fs::write(file, message).map_err(|source| ShroudError::WriteError { source })
            }
            None => {
                println!("{message}");
                Ok(())
            }
        }
    }
}
