pub mod lsb_codec;

use std::io::{Seek, Write};
use std::path::Path;

use image::{ImageFormat, RgbImage};
use log::error;

pub use lsb_codec::LsbCodec;

use crate::result::Result;
use crate::ShroudError;

/// opens any supported image and converts it to 8 bit RGB, alpha is dropped
pub fn open_rgb(file: &Path) -> Result<RgbImage> {
    Ok(image::open(file)
        .map_err(ShroudError::InvalidImageMedia)?
        .to_rgb8())
}

/// the lossless format that matches the extension of `file`, LSBs would not survive anything else
pub fn lossless_format(file: &Path) -> Result<ImageFormat> {
    match ImageFormat::from_path(file) {
        Ok(format @ (ImageFormat::Png | ImageFormat::Bmp)) => Ok(format),
        _ => Err(ShroudError::UnsupportedMedia),
    }
}

pub fn write_rgb<W: Write + Seek>(img: &RgbImage, writer: &mut W, format: ImageFormat) -> Result<()> {
    img.write_to(writer, format).map_err(|e| {
        error!("Error saving image: {e}");
        ShroudError::ImageEncodingError(e)
    })
}
