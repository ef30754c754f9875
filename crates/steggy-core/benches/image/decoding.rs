use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};
use steggy_core::media::{Carrier, CarrierFormat};

pub fn image_decoding(c: &mut Criterion) {
    let frames: Vec<RgbImage> = (0..8)
        .map(|i| ImageBuffer::from_fn(160, 120, |x, y| Rgb([((x + y) % 4 * 32 + i) as u8, 0, 0])))
        .collect();
    let mut carrier = Carrier::from_frames(frames, 0, 100);
    let data = steggy_core::Message::from_payload(br#"{"hello":"world"}"#)
        .to_raw_data(&steggy_core::media::payload::MarkerLengthCodec)
        .expect("Cannot frame message");
    let last = carrier.frames.len() - 1;
    carrier
        .hide_data(&data, &mut |_: usize| -> usize { last })
        .expect("Cannot hide message");
    let mut gif = std::io::Cursor::new(Vec::new());
    carrier.save_to_writer(&mut gif).expect("Cannot encode gif");
    let gif = gif.into_inner();

    c.bench_function("Frame Scan", |b| {
        b.iter(|| carrier.unveil().expect("Cannot unveil message"))
    });

    c.bench_function("Gif Decoding", |b| {
        b.iter(|| Carrier::from_bytes(&gif, CarrierFormat::Gif).expect("Cannot decode gif"))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
