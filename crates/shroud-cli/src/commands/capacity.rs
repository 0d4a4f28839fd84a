use std::path::PathBuf;

use clap::Args;
use shroud_core::CodecOptions;

use crate::CliResult;

/// Shows how many bits and how long a message a carrier can hold
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier media file such as PNG image, WAV audio or Y4M video
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let capacity = shroud_core::commands::capacity(&self.media, &options)?;

        println!("{:?} carrier: {} bits", capacity.kind, capacity.bits);
        match capacity.max_message_len {
            Some(len) => println!("Longest message: {len} bytes"),
            None => println!("Too small for any message"),
        }

        Ok(())
    }
}
