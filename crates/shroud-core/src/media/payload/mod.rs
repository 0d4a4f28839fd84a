mod crypted;
pub mod framing;

pub use crypted::*;
pub use framing::{Markers, DEFAULT_END_MARKER, DEFAULT_START_MARKER};
