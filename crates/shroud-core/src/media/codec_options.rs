use shroud_seal::KdfParams;

use super::payload::Markers;

/// Explicit per call configuration, so that framing and key derivation can evolve
/// without breaking media that was created with older settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodecOptions {
    /// delimits the sealed envelope inside the unveiled bits
    pub markers: Markers,

    /// scrypt cost used to derive the key from the password
    pub kdf: KdfParams,
}

impl CodecOptions {
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    pub fn with_kdf(mut self, kdf: KdfParams) -> Self {
        self.kdf = kdf;
        self
    }
}
