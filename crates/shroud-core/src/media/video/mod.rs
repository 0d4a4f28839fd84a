pub mod lsb_codec;
pub mod y4m_stream;

pub use lsb_codec::LsbCodec;
pub use y4m_stream::{Y4mHeader, Y4mVideo};
