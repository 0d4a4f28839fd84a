use enum_dispatch::enum_dispatch;
use log::debug;

use crate::result::Result;
use crate::ShroudError;

/// A carrier is a flat buffer of 8 bit sample units, each of them holds one bit in its LSB.
///
/// For images that is the row major `R, G, B` channel buffer, for audio the raw PCM bytes
/// and for video the interleaved pixel triples of the first frame.
#[enum_dispatch]
pub trait LsbCarrier {
    fn samples(&self) -> &[u8];

    fn samples_mut(&mut self) -> &mut [u8];

    /// number of bits the carrier can hold
    fn capacity(&self) -> usize {
        self.samples().len()
    }

    /// overwrites the LSB of sample `i` with bit `i`, samples after the last bit stay untouched
    fn hide_bits(&mut self, bits: &[bool]) -> Result<()> {
        let capacity = self.capacity();
        if bits.len() > capacity {
            return Err(ShroudError::CapacityExceeded {
                required: bits.len(),
                capacity,
            });
        }
        debug!("hiding {} bits in a carrier of {capacity} bits", bits.len());

        let samples = self.samples_mut();
        for (i, bit) in bits.iter().enumerate() {
            samples[i] = (samples[i] & !1) | *bit as u8;
        }

        Ok(())
    }

    /// collects the LSB of every sample
    fn unveil_bits(&self) -> Vec<bool> {
        self.samples().iter().map(|s| s & 1 == 1).collect()
    }
}
