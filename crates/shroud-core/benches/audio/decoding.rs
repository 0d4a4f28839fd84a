use std::io::Cursor;

use criterion::{criterion_group, criterion_main, Criterion};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use shroud_core::media::audio::{LsbCodec, PcmAudio};
use shroud_core::Markers;

pub fn audio_decoding(c: &mut Criterion) {
    c.bench_function("Audio Decoding", |b| {
        let spec = WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut cursor, spec).expect("Cannot create writer");
            for i in 0..44100 {
                writer
                    .write_sample((i % 3000) as i16)
                    .expect("Cannot write sample");
            }
            writer.finalize().expect("Cannot finalize audio");
        }
        cursor.set_position(0);
        let markers = Markers::default();
        let mut audio_with_secret =
            PcmAudio::from_reader(WavReader::new(cursor).expect("Cannot create reader"))
                .expect("Cannot read audio");
        LsbCodec::embed(
            &mut audio_with_secret,
            &markers.frame(b"Hello World!").expect("Cannot frame secret message"),
        )
        .expect("Cannot write secret message");

        b.iter(|| {
            let bits = LsbCodec::extract(&audio_with_secret);
            markers.unframe(&bits).expect("Cannot find secret message")
        })
    });
}

criterion_group!(benches, audio_decoding);
criterion_main!(benches);
