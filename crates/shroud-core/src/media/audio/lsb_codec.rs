use super::pcm::PcmAudio;
use crate::media::LsbCarrier;
use crate::result::Result;

/// LSB codec for PCM audio, one bit per stored sample byte
pub struct LsbCodec;

impl LsbCodec {
    pub fn capacity(carrier: &PcmAudio) -> usize {
        carrier.capacity()
    }

    /// hides bit `i` in the LSB of sample byte `i`
    pub fn embed(carrier: &mut PcmAudio, bits: &[bool]) -> Result<()> {
        carrier.hide_bits(bits)
    }

    /// unveils the LSB of every sample byte
    pub fn extract(carrier: &PcmAudio) -> Vec<bool> {
        carrier.unveil_bits()
    }
}
