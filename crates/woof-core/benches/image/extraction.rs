use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba};
use std::io::Read;
use woof_core::media::image::decoder::ImageRgbaColor;
use woof_core::universal_decoder::Decoder;
use woof_core::{codec, CodecOptions};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let img = ImageBuffer::from_pixel(256, 256, Rgba([1, 0, 1, 255]));
        let mut buf = [0; 16];

        b.iter(|| {
            Decoder::new(ImageRgbaColor::new(&img))
                .read_exact(&mut buf)
                .expect("Failed to read 16 bytes");
        })
    });
}

pub fn document_extraction(c: &mut Criterion) {
    c.bench_function("Document Extraction", |b| {
        let plain = ImageBuffer::from_fn(256, 256, |x, y| Rgba([x as u8, y as u8, 7, 255]));
        let woof = codec::embed(
            &plain,
            &serde_json::json!({"tags": ["dog", "cute"], "score": 0.95}),
            &CodecOptions::default(),
        )
        .expect("Cannot embed the document");

        b.iter(|| assert!(codec::extract(&woof).is_present()))
    });
}

criterion_group!(benches, image_decoding, document_extraction);
criterion_main!(benches);
