use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};
use std::io::Write;
use steggy_core::media::image::encoder::FrameRedChannelMut;
use steggy_core::universal_encoder::{OneBitHide, UniversalEncoder};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Frame Encoding", |b| {
        let mut frame: RgbImage =
            ImageBuffer::from_fn(320, 240, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 0]));
        let secret_message = b"%7B%22hello%22%3A%22world%22%7D";

        b.iter(|| {
            UniversalEncoder::new(FrameRedChannelMut::new(&mut frame), OneBitHide)
                .write_all(&secret_message[..])
                .expect("Cannot write secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
