use std::io::{Read, Seek, Write};
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::media::LsbCarrier;
use crate::result::Result;
use crate::ShroudError;

/// The PCM payload of a WAV file as the little endian bytes it is stored with,
/// together with the container parameters needed to write it back.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmAudio {
    spec: WavSpec,
    bytes: Vec<u8>,
}

impl PcmAudio {
    pub fn from_file(file: &Path) -> Result<Self> {
        let reader = WavReader::open(file).map_err(ShroudError::InvalidAudioMedia)?;
        Self::from_reader(reader)
    }

    pub fn from_reader<R: Read>(mut reader: WavReader<R>) -> Result<Self> {
        let spec = reader.spec();
        let width = bytes_per_sample(&spec)?;
        let mut bytes = Vec::with_capacity(reader.len() as usize * width);
        let mut buf = [0u8; 4];

        match spec.sample_format {
            SampleFormat::Int => {
                for sample in reader.samples::<i32>() {
                    let sample = sample.map_err(ShroudError::InvalidAudioMedia)?;
                    LittleEndian::write_int(&mut buf, sample as i64, width);
                    if width == 1 {
                        // 8 bit PCM is stored unsigned
                        buf[0] ^= 0x80;
                    }
                    bytes.extend_from_slice(&buf[..width]);
                }
            }
            SampleFormat::Float => {
                for sample in reader.samples::<f32>() {
                    let sample = sample.map_err(ShroudError::InvalidAudioMedia)?;
                    bytes.extend_from_slice(&sample.to_le_bytes());
                }
            }
        }

        Ok(Self { spec, bytes })
    }

    pub fn spec(&self) -> WavSpec {
        self.spec
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// writes a WAV file with the very same channel count, sample rate and bit depth
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let width = bytes_per_sample(&self.spec)?;
        let mut wav_writer =
            WavWriter::new(writer, self.spec).map_err(ShroudError::AudioEncodingError)?;

        for chunk in self.bytes.chunks_exact(width) {
            let written = match self.spec.sample_format {
                SampleFormat::Int => {
                    let mut buf = [0u8; 4];
                    buf[..width].copy_from_slice(chunk);
                    if width == 1 {
                        buf[0] ^= 0x80;
                    }
                    let sample = LittleEndian::read_int(&buf[..width], width) as i32;
                    wav_writer.write_sample(sample)
                }
                SampleFormat::Float => {
                    let sample = LittleEndian::read_f32(chunk);
                    wav_writer.write_sample(sample)
                }
            };
            written.map_err(ShroudError::AudioEncodingError)?;
        }
        wav_writer
            .finalize()
            .map_err(ShroudError::AudioEncodingError)?;

        Ok(())
    }
}

impl LsbCarrier for PcmAudio {
    fn samples(&self) -> &[u8] {
        &self.bytes
    }

    fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

fn bytes_per_sample(spec: &WavSpec) -> Result<usize> {
    match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, bits @ 1..=32) => Ok((bits as usize + 7) / 8),
        (SampleFormat::Float, 32) => Ok(4),
        _ => Err(ShroudError::UnsupportedMedia),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Cursor;

    use super::*;

    /// an in memory WAV file with a little saw tooth
    pub(crate) fn wav_bytes(spec: WavSpec, sample_count: usize) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
            for i in 0..sample_count {
                let written = match (spec.sample_format, spec.bits_per_sample) {
                    (SampleFormat::Float, _) => writer.write_sample(i as f32 / 100.0 - 0.5),
                    (_, 8) => writer.write_sample((i % 256) as i32 - 128),
                    (_, 16) => writer.write_sample((i as i32 * 37 % 65536) - 32768),
                    (_, 24) => writer.write_sample((i as i32 * 4099 % 16_777_216) - 8_388_608),
                    _ => writer.write_sample(i as i32 * 16_777_259 - 1),
                };
                written.unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    pub(crate) fn spec(channels: u16, bits_per_sample: u16, sample_format: SampleFormat) -> WavSpec {
        WavSpec {
            channels,
            sample_rate: 8000,
            bits_per_sample,
            sample_format,
        }
    }

    fn read(bytes: Vec<u8>) -> PcmAudio {
        PcmAudio::from_reader(WavReader::new(Cursor::new(bytes)).unwrap()).unwrap()
    }

    #[test]
    fn should_expose_the_stored_bytes_of_16_bit_samples() {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut cursor, spec(1, 16, SampleFormat::Int)).unwrap();
            writer.write_sample(0x1234i16).unwrap();
            writer.write_sample(-2i16).unwrap();
            writer.finalize().unwrap();
        }
        let audio = read(cursor.into_inner());

        assert_eq!(audio.bytes(), &[0x34, 0x12, 0xfe, 0xff]);
        assert_eq!(audio.capacity(), 4);
    }

    #[test]
    fn should_expose_8_bit_samples_unsigned() {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut cursor, spec(1, 8, SampleFormat::Int)).unwrap();
            writer.write_sample(-128i8).unwrap();
            writer.write_sample(0i8).unwrap();
            writer.write_sample(127i8).unwrap();
            writer.finalize().unwrap();
        }

        assert_eq!(read(cursor.into_inner()).bytes(), &[0x00, 0x80, 0xff]);
    }

    #[test]
    fn should_write_back_identical_files_for_every_supported_layout() {
        for spec in [
            spec(1, 8, SampleFormat::Int),
            spec(2, 16, SampleFormat::Int),
            spec(1, 24, SampleFormat::Int),
            spec(2, 32, SampleFormat::Int),
            spec(1, 32, SampleFormat::Float),
        ] {
            let audio = read(wav_bytes(spec, 64));
            assert_eq!(
                audio.bytes().len(),
                64 * spec.bits_per_sample as usize / 8,
                "{spec:?}"
            );

            let mut written = Cursor::new(Vec::new());
            audio.write_to(&mut written).unwrap();
            let reread = read(written.into_inner());

            assert_eq!(reread.spec(), spec);
            assert_eq!(reread, audio, "{spec:?}");
        }
    }

    #[test]
    fn should_keep_modified_lsbs_through_a_write() {
        let mut audio = read(wav_bytes(spec(2, 16, SampleFormat::Int), 32));
        let bits: Vec<bool> = (0..64).map(|i| i % 5 == 0).collect();
        audio.hide_bits(&bits).unwrap();

        let mut written = Cursor::new(Vec::new());
        audio.write_to(&mut written).unwrap();

        assert_eq!(read(written.into_inner()).unveil_bits(), bits);
    }
}
