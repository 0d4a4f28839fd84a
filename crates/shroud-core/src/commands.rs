use std::path::Path;

use shroud_seal::Envelope;

use crate::{CodecOptions, LsbCarrier, Media, MediaKind, ShroudError};

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    message: Option<String>,
    password: Option<String>,
    options: CodecOptions,
) -> Result<(), ShroudError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_media(media)
        .with_output(write_to_file)
        .use_password(password)
        .use_message(message)
        .execute()
}

pub fn unveil(
    secret_media: &Path,
    password: Option<String>,
    options: CodecOptions,
) -> Result<String, ShroudError> {
    crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .using_password(password)
        .execute()
}

/// What a carrier can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub kind: MediaKind,
    /// one bit per carrier byte
    pub bits: usize,
    /// the longest message in bytes that still fits after encryption and framing, if any
    pub max_message_len: Option<usize>,
}

pub fn capacity(media: &Path, options: &CodecOptions) -> Result<Capacity, ShroudError> {
    let media = Media::from_file(media)?;
    let bits = media.capacity();
    let framing = options.markers.framed_bit_len(0) / 8;
    let max_message_len = (bits / 8)
        .checked_sub(framing)
        .and_then(Envelope::max_message_len);

    Ok(Capacity {
        kind: media.kind(),
        bits,
        max_message_len,
    })
}
