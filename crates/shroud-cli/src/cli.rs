use clap::{Parser, Subcommand};
use log::warn;
use shroud_core::media::payload::{DEFAULT_END_MARKER, DEFAULT_START_MARKER};
use shroud_core::{CodecOptions, KdfParams, Markers};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: marker that opens the hidden message
    #[arg(long = "x-start-marker", global = true)]
    pub start_marker: Option<String>,

    /// Experimental: marker that closes the hidden message
    #[arg(long = "x-end-marker", global = true)]
    pub end_marker: Option<String>,

    /// Experimental: scrypt cost as log2(N)
    #[arg(long = "x-kdf-log-n", global = true)]
    pub kdf_log_n: Option<u8>,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    /// the options both sides have to agree on, defaults unless overridden
    pub fn codec_options(&self) -> CliResult<CodecOptions> {
        let start = self
            .start_marker
            .as_ref()
            .map(|m| m.as_bytes().to_vec())
            .unwrap_or_else(|| DEFAULT_START_MARKER.to_vec());
        let end = self
            .end_marker
            .as_ref()
            .map(|m| m.as_bytes().to_vec())
            .unwrap_or_else(|| DEFAULT_END_MARKER.to_vec());
        let defaults = KdfParams::default();
        let kdf = KdfParams::new(
            self.kdf_log_n.unwrap_or(defaults.log_n),
            defaults.r,
            defaults.p,
        )?;

        Ok(CodecOptions::default()
            .with_markers(Markers::new(start, end)?)
            .with_kdf(kdf))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
}

/// prompts for a password on the terminal, hiding asks twice
pub fn ask_for_password(confirm: bool) -> Option<String> {
    let mut prompt = dialoguer::Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Error: the passwords don't match.");
    }

    match prompt.interact() {
        Ok(password) => Some(password),
        Err(e) => {
            warn!("No password was entered: {e}");
            None
        }
    }
}
