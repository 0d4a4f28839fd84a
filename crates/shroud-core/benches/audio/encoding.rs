use std::io::Cursor;

use criterion::{criterion_group, criterion_main, Criterion};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use shroud_core::media::audio::{LsbCodec, PcmAudio};
use shroud_core::Markers;

pub fn plain_audio() -> PcmAudio {
    let spec = WavSpec {
        channels: 2,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec).expect("Cannot create writer");
        for i in 0..88200 {
            writer
                .write_sample((i % 2000) as i16 - 1000)
                .expect("Cannot write sample");
        }
        writer.finalize().expect("Cannot finalize audio");
    }
    cursor.set_position(0);

    PcmAudio::from_reader(WavReader::new(cursor).expect("Cannot create reader"))
        .expect("Cannot read audio")
}

pub fn audio_encoding(c: &mut Criterion) {
    c.bench_function("Audio Encoding", |b| {
        let mut plain_audio = plain_audio();
        let secret_message = Markers::default()
            .frame(b"Hello World!")
            .expect("Cannot frame secret message");

        b.iter(|| {
            LsbCodec::embed(&mut plain_audio, &secret_message)
                .expect("Cannot write secret message");
        })
    });
}

criterion_group!(benches, audio_encoding);
criterion_main!(benches);
