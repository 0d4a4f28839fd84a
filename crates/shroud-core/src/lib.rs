//! # Shroud Core API
//!
//! Hides a password sealed text message in the least significant bits of an image,
//! a PCM audio file or the first frame of a video, and unveils it again.
//!
//! The message is encrypted with [`shroud_seal`], the resulting envelope is framed by
//! a start and an end marker and the framed bits are written one per carrier byte.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! RgbImage::from_pixel(64, 64, Rgb([120, 80, 40]))
//!     .save(&carrier)
//!     .expect("Failed to create carrier image");
//!
//! shroud_core::api::hide::prepare()
//!     .with_message("Hello, World!")  // will hide this message inside the image
//!     .with_password("SuperSecret42") // will encrypt the message with this password
//!     .with_media(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-secret.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = shroud_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("image-with-a-secret.png"))
//!     .using_password("SuperSecret42")
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message, "Hello, World!");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;

pub use crate::error::ShroudError;
pub use crate::media::payload::{CryptedPayloadCodec, Markers};
pub use crate::media::{CodecOptions, LsbCarrier, Media, MediaKind, Persist};
pub use crate::result::Result;
pub use shroud_seal::KdfParams;
