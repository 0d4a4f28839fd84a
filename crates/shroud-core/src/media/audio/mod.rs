pub mod lsb_codec;
pub mod pcm;

pub use lsb_codec::LsbCodec;
pub use pcm::PcmAudio;
