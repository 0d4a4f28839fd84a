use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use shroud_core::media::image::LsbCodec;
use shroud_core::Markers;

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let markers = Markers::default();
        let mut image_with_secret =
            RgbImage::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, 42]));
        LsbCodec::embed(
            &mut image_with_secret,
            &markers.frame(b"Hello World!").expect("Cannot frame secret message"),
        )
        .expect("Cannot write secret message");

        b.iter(|| {
            let bits = LsbCodec::extract(&image_with_secret);
            markers.unframe(&bits).expect("Cannot find secret message")
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
