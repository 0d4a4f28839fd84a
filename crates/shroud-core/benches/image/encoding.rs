use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use shroud_core::media::image::LsbCodec;
use shroud_core::Markers;

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let mut plain_image = RgbImage::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, 42]));
        let secret_message = Markers::default()
            .frame(b"Hello World!")
            .expect("Cannot frame secret message");

        b.iter(|| {
            LsbCodec::embed(&mut plain_image, &secret_message)
                .expect("Cannot write secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
