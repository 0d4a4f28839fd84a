pub use aes_gcm::Error as AesGcmError;
pub use base64::DecodeError as Base64Error;
pub use scrypt::errors::{InvalidOutputLen, InvalidParams};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SealError {
    #[error("Key derivation error: the password must not be empty")]
    EmptyPassword,

    #[error("Key derivation error: the salt must not be empty")]
    EmptySalt,

    #[error("Key derivation parameter error")]
    KeyDerivationParamError(InvalidParams),

    #[error("Key derivation error")]
    KeyDerivationError(InvalidOutputLen),

    #[error("Encryption error")]
    EncryptionError(AesGcmError),

    /// The authentication tag did not verify, either the password is wrong or the data was tampered with
    #[error("Authentication failure: wrong password or corrupted data")]
    AuthenticationFailure,

    #[error("Envelope is not valid JSON")]
    InvalidEnvelopeJson(#[from] serde_json::Error),

    #[error("Envelope field is not valid base64")]
    InvalidEnvelopeEncoding(#[from] Base64Error),

    #[error("Envelope salt has {0} bytes, expected 16")]
    InvalidSaltLength(usize),

    #[error("Envelope ciphertext is too short ({0} bytes) to carry a nonce and a tag")]
    TruncatedCiphertext(usize),

    #[error("Unsupported envelope version: {0}")]
    UnsupportedEnvelopeVersion(u8),
}
