use log::debug;
use rand::{CryptoRng, RngCore};
use shroud_seal::{decrypt, encrypt, encrypt_with_rng, Envelope};

use crate::media::CodecOptions;
use crate::result::Result;

/// Turns a text message into the framed bits of a sealed envelope and back.
pub struct CryptedPayloadCodec<'o> {
    password: String,
    options: &'o CodecOptions,
}

impl<'o> CryptedPayloadCodec<'o> {
    pub fn new<I: Into<String>>(password: I, options: &'o CodecOptions) -> Self {
        Self {
            password: password.into(),
            options,
        }
    }

    /// encrypts the message and frames the envelope
    pub fn encode(&self, message: &str) -> Result<Vec<bool>> {
        let envelope = encrypt(message.as_bytes(), &self.password, &self.options.kdf)?;
        self.frame(&envelope)
    }

    /// like `encode`, with salt and nonce drawn from `rng`
    pub fn encode_with_rng<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        message: &str,
    ) -> Result<Vec<bool>> {
        let envelope =
            encrypt_with_rng(rng, message.as_bytes(), &self.password, &self.options.kdf)?;
        self.frame(&envelope)
    }

    /// locates the envelope between the markers, then verifies and decrypts it
    pub fn decode(&self, bits: &[bool]) -> Result<String> {
        let json = self.options.markers.unframe(bits)?;
        let envelope = Envelope::from_json(&json)?;
        let plain = decrypt(&envelope, &self.password, &self.options.kdf)?;

        Ok(String::from_utf8(plain)?)
    }

    fn frame(&self, envelope: &Envelope) -> Result<Vec<bool>> {
        let json = envelope.to_json()?;
        debug!("sealed envelope takes {} bytes", json.len());

        self.options.markers.frame(json.as_bytes())
    }
}
