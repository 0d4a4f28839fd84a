use super::y4m_stream::{Y4mHeader, Y4mVideo};
use crate::media::LsbCarrier;
use crate::result::Result;

/// LSB codec for video, only the first frame carries bits
pub struct LsbCodec;

impl LsbCodec {
    /// three bits per pixel of the first frame, whatever the chroma subsampling of the source
    pub fn capacity(header: &Y4mHeader) -> usize {
        header.pixel_count() * 3
    }

    /// hides bit `i` in the LSB of channel `i % 3` of first frame pixel `i / 3`
    pub fn embed(carrier: &mut Y4mVideo, bits: &[bool]) -> Result<()> {
        carrier.hide_bits(bits)
    }

    pub fn extract(carrier: &Y4mVideo) -> Vec<bool> {
        carrier.unveil_bits()
    }
}
