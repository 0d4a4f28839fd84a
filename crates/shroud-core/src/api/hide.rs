use std::path::{Path, PathBuf};

use log::info;

use super::Password;
use crate::media::payload::CryptedPayloadCodec;
use crate::{CodecOptions, LsbCarrier, Media, Persist, ShroudError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    media: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// the carrier, an image, a WAV audio or a Y4M video
    pub fn with_media<A: AsRef<Path>>(mut self, media: A) -> Self {
        self.media = Some(media.as_ref().to_path_buf());
        self
    }

    pub fn with_image<A: AsRef<Path>>(self, image: A) -> Self {
        self.with_media(image)
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password, `None` fails on execution since every message is encrypted
    pub fn use_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Encrypts the message, hides it and writes the output, nothing is written on failure
    pub fn execute(self) -> Result<(), ShroudError> {
        let Some(message) = self.message else {
            return Err(ShroudError::MissingMessage);
        };
        let password = self.password.require()?;
        let Some(media) = self.media else {
            return Err(ShroudError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(ShroudError::TargetNotSet);
        };

        let mut carrier = Media::from_file(&media)?;
        let bits = CryptedPayloadCodec::new(password, &self.options).encode(&message)?;
        carrier.hide_data(&bits)?.save_as(&output)?;
        info!(
            "hid {} of {} bits in {output:?}",
            bits.len(),
            carrier.capacity()
        );

        Ok(())
    }
}
