use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::{Result, SealError, NONCE_LEN, SALT_LEN, TAG_LEN};

pub const ENVELOPE_VERSION: u8 = 1;

/// The output of one encryption: salt, nonce and the AEAD ciphertext with its tag appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub version: u8,
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
    /// ciphertext ‖ tag
    pub sealed: Vec<u8>,
}

/// JSON shape on the wire: `{"ciphertext": b64(nonce ‖ ciphertext ‖ tag), "salt": b64(salt)}`
#[derive(Serialize, Deserialize)]
struct WireEnvelope {
    ciphertext: String,
    salt: String,
    #[serde(
        rename = "v",
        default = "default_version",
        skip_serializing_if = "is_default_version"
    )]
    version: u8,
}

fn default_version() -> u8 {
    ENVELOPE_VERSION
}

fn is_default_version(version: &u8) -> bool {
    *version == ENVELOPE_VERSION
}

/// `{"ciphertext":"","salt":""}`
const JSON_OVERHEAD: usize = 27;

fn b64_len(len: usize) -> usize {
    (len + 2) / 3 * 4
}

impl Envelope {
    /// exact length of `to_json` for a message of `message_len` bytes
    pub fn json_len(message_len: usize) -> usize {
        JSON_OVERHEAD + b64_len(SALT_LEN) + b64_len(NONCE_LEN + message_len + TAG_LEN)
    }

    /// the longest message whose envelope serializes to at most `json_len` bytes
    pub fn max_message_len(json_len: usize) -> Option<usize> {
        let ciphertext_chars = json_len.checked_sub(JSON_OVERHEAD + b64_len(SALT_LEN))?;
        (ciphertext_chars / 4 * 3).checked_sub(NONCE_LEN + TAG_LEN)
    }

    pub fn to_json(&self) -> Result<String> {
        let mut ciphertext = Vec::with_capacity(NONCE_LEN + self.sealed.len());
        ciphertext.extend_from_slice(&self.nonce);
        ciphertext.extend_from_slice(&self.sealed);

        let wire = WireEnvelope {
            ciphertext: STANDARD.encode(ciphertext),
            salt: STANDARD.encode(self.salt),
            version: self.version,
        };

        Ok(serde_json::to_string(&wire)?)
    }

    pub fn from_json(json: &[u8]) -> Result<Self> {
        let wire: WireEnvelope = serde_json::from_slice(json)?;
        if wire.version != ENVELOPE_VERSION {
            return Err(SealError::UnsupportedEnvelopeVersion(wire.version));
        }

        let salt = STANDARD.decode(wire.salt)?;
        let salt: [u8; SALT_LEN] = salt
            .as_slice()
            .try_into()
            .map_err(|_| SealError::InvalidSaltLength(salt.len()))?;

        let ciphertext = STANDARD.decode(wire.ciphertext)?;
        if ciphertext.len() < NONCE_LEN + TAG_LEN {
            return Err(SealError::TruncatedCiphertext(ciphertext.len()));
        }
        let (nonce, sealed) = ciphertext.split_at(NONCE_LEN);
        let mut n = [0u8; NONCE_LEN];
        n.copy_from_slice(nonce);

        Ok(Self {
            version: wire.version,
            salt,
            nonce: n,
            sealed: sealed.to_vec(),
        })
    }
}
