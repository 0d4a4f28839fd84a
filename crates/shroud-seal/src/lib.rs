//! # Shroud Seal
//!
//! Password based authenticated encryption of short messages.
//! A key is derived with scrypt from the password and a random salt,
//! the message is then sealed with AES-256-GCM under a random nonce.
//!
//! ```rust
//! use shroud_seal::{decrypt, encrypt, Envelope, KdfParams};
//!
//! let params = KdfParams::default();
//! let envelope = encrypt(b"HELLO", "pw123", &params).unwrap();
//! let json = envelope.to_json().unwrap();
//!
//! let envelope = Envelope::from_json(json.as_bytes()).unwrap();
//! assert_eq!(decrypt(&envelope, "pw123", &params).unwrap(), b"HELLO");
//! ```

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key as AesKey, Nonce};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

pub mod envelope;
pub mod error;
pub mod kdf;

pub use crate::envelope::{Envelope, ENVELOPE_VERSION};
pub use crate::error::SealError;
pub use crate::kdf::{derive_key, KdfParams, Key};

pub const SALT_LEN: usize = 16;
pub const NONCE_LEN: usize = 12;
pub const TAG_LEN: usize = 16;
pub const KEY_LEN: usize = 32;

pub type Result<T> = std::result::Result<T, SealError>;

/// encrypt a message with a password, salt and nonce are drawn from the operating system
pub fn encrypt(message: &[u8], password: &str, params: &KdfParams) -> Result<Envelope> {
    encrypt_with_rng(&mut OsRng, message, password, params)
}

/// encrypt a message with a password, salt and nonce are drawn from `rng`
pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
    rng: &mut R,
    message: &[u8],
    password: &str,
    params: &KdfParams,
) -> Result<Envelope> {
    let mut salt = [0u8; SALT_LEN];
    rng.fill_bytes(&mut salt);
    let key = derive_key(password.as_bytes(), &salt, params)?;

    let mut nonce = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce);

    let encryptor = Aes256Gcm::new(AesKey::<Aes256Gcm>::from_slice(key.as_slice()));
    let sealed = encryptor
        .encrypt(Nonce::from_slice(&nonce), message)
        .map_err(SealError::EncryptionError)?;

    Ok(Envelope {
        version: ENVELOPE_VERSION,
        salt,
        nonce,
        sealed,
    })
}

/// verify and decrypt an envelope, a wrong password or any modification yields `AuthenticationFailure`
pub fn decrypt(envelope: &Envelope, password: &str, params: &KdfParams) -> Result<Vec<u8>> {
    if envelope.version != ENVELOPE_VERSION {
        return Err(SealError::UnsupportedEnvelopeVersion(envelope.version));
    }
    let key = derive_key(password.as_bytes(), &envelope.salt, params)?;

    let decryptor = Aes256Gcm::new(AesKey::<Aes256Gcm>::from_slice(key.as_slice()));
    decryptor
        .decrypt(Nonce::from_slice(&envelope.nonce), envelope.sealed.as_slice())
        .map_err(|_| SealError::AuthenticationFailure)
}
