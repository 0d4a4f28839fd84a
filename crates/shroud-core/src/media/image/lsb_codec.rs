use image::RgbImage;

use crate::media::LsbCarrier;
use crate::result::Result;

/// `R, G, B` of every pixel, row by row, is exactly the raw buffer layout of an `RgbImage`
impl LsbCarrier for RgbImage {
    fn samples(&self) -> &[u8] {
        self.as_raw()
    }

    fn samples_mut(&mut self) -> &mut [u8] {
        &mut **self
    }
}

/// LSB codec for still images
pub struct LsbCodec;

impl LsbCodec {
    /// 3 bits per pixel
    pub fn capacity(width: u32, height: u32) -> usize {
        3 * width as usize * height as usize
    }

    /// hides `bits` in the color channels, row major, channel order `R, G, B`
    pub fn embed(carrier: &mut RgbImage, bits: &[bool]) -> Result<()> {
        carrier.hide_bits(bits)
    }

    /// unveils one bit per color channel, `3 * width * height` bits in total
    pub fn extract(carrier: &RgbImage) -> Vec<bool> {
        carrier.unveil_bits()
    }
}
