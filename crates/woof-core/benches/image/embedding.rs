use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::io::Write;
use woof_core::annotate::create_metadata;
use woof_core::media::image::encoder::ImageRgbaColorMut;
use woof_core::universal_encoder::Encoder;
use woof_core::{codec, CodecOptions, Frame};

fn carrier_image() -> RgbaImage {
    ImageBuffer::from_fn(256, 256, |x, y| {
        Rgba([x as u8, y as u8, (x ^ y) as u8, 255])
    })
}

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let mut plain_image = carrier_image();
        let secret_message = b"WOOF_STEG_V2 Hello World!";

        b.iter(|| {
            Encoder::new(ImageRgbaColorMut::new(&mut plain_image))
                .write_all(&secret_message[..])
                .expect("Cannot write secret message");
        })
    });
}

pub fn frame_embedding(c: &mut Criterion) {
    c.bench_function("Frame Embedding", |b| {
        let mut plain_image = carrier_image();
        let document = create_metadata(&plain_image);
        let frame = Frame::build(&document, &CodecOptions::default())
            .expect("Cannot build the frame");

        b.iter(|| {
            codec::embed_frame(&mut plain_image, &frame).expect("Cannot embed the frame");
        })
    });
}

criterion_group!(benches, image_encoding, frame_embedding);
criterion_main!(benches);
