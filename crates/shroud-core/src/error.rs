use std::string::FromUtf8Error;
use thiserror::Error;

pub use hound::Error as HoundError;
pub use image::ImageError;
pub use shroud_seal::SealError;
pub use y4m::Colorspace;
pub use y4m::Error as Y4mError;

#[derive(Error, Debug)]
pub enum ShroudError {
    /// The framed message needs more bits than the carrier offers, nothing has been modified
    #[error(
        "Capacity Error: the message needs {required} bits but the carrier can hold only {capacity} bits"
    )]
    CapacityExceeded { required: usize, capacity: usize },

    /// The unveiled bits do not contain both markers, so the media was not made by us or the wrong codec was used
    #[error("No hidden message found, start or end marker is missing")]
    MarkerNotFound,

    /// Wrong password or the hidden data was corrupted
    #[error("Authentication failure: wrong password or corrupted data")]
    AuthenticationFailure,

    /// Represents an unsupported carrier media. For example, a Movie file in a container we cannot process
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier audio media. For example, a broken WAV file
    #[error("Audio media is invalid")]
    InvalidAudioMedia(#[source] HoundError),

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia(#[source] ImageError),

    /// Represents an invalid carrier video media. For example, a truncated Y4M header
    #[error("Video media is invalid: {0:?}")]
    InvalidVideoMedia(Y4mError),

    /// The video stream could be opened but did not contain a single frame
    #[error("Video media does not contain any frame")]
    EmptyVideo,

    #[error("Video colorspace {0:?} is not supported, only 8-bit layouts are")]
    UnsupportedVideoColorspace(Colorspace),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an audio file.
    #[error("Audio encoding error")]
    AudioEncodingError(#[source] HoundError),

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError(#[source] ImageError),

    /// Represents a failure when encoding a video file.
    #[error("Video encoding error: {0:?}")]
    VideoEncodingError(Y4mError),

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Configuration or format errors of the sealing layer, except authentication failures
    #[error(transparent)]
    Seal(SealError),

    #[error("Markers must not be empty")]
    InvalidMarkers,

    #[error("The message contains one of the marker sequences")]
    PayloadContainsMarker,

    /// Represents the error of invalid UTF-8 text data found inside of a decrypted message
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing password")]
    MissingPassword,
}

impl From<SealError> for ShroudError {
    fn from(e: SealError) -> Self {
        match e {
            SealError::AuthenticationFailure => ShroudError::AuthenticationFailure,
            other => ShroudError::Seal(other),
        }
    }
}
