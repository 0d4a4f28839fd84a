use std::path::{Path, PathBuf};

use log::info;

use super::Password;
use crate::media::payload::CryptedPayloadCodec;
use crate::{CodecOptions, Media, ShroudError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    password: Password,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, they must match the ones used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the media that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// Set the password the message was sealed with
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the unveil process and return the message
    pub fn execute(self) -> Result<String, ShroudError> {
        let password = self.password.require()?;
        let Some(secret_media) = self.secret_media else {
            return Err(ShroudError::CarrierNotSet);
        };

        let media = Media::from_file(&secret_media)?;
        let message =
            CryptedPayloadCodec::new(password, &self.options).decode(&media.unveil_data())?;
        info!("unveiled a message of {} bytes", message.len());

        Ok(message)
    }
}
