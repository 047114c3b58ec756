use image::{ImageBuffer, Rgba, RgbaImage};
use proptest::prelude::*;
use serde_json::{Map, Value};

use woof_core::{codec, CodecOptions, Extraction};

fn document_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("JSON has no NaN or infinity", |f| f.is_finite())
            .prop_map(Value::from),
        "[a-zA-Z0-9 äöü🐕]{0,24}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<String, Value>>())),
        ]
    })
}

fn image_strategy(width: u32, height: u32) -> impl Strategy<Value = RgbaImage> {
    prop::collection::vec(any::<u8>(), (width * height * 4) as usize).prop_map(move |raw| {
        ImageBuffer::from_raw(width, height, raw).expect("buffer size matches the dimensions")
    })
}

proptest! {
    #[test]
    fn embedded_documents_come_back_unchanged(
        document in document_strategy(),
        carrier in image_strategy(96, 96),
    ) {
        let woof = codec::embed(&carrier, &document, &CodecOptions::default()).unwrap();

        prop_assert_eq!(codec::extract(&woof), Extraction::Present(document));
        for (original, embedded) in carrier.pixels().zip(woof.pixels()) {
            let Rgba([_, _, _, a]) = *original;
            prop_assert_eq!(a, embedded.0[3]);
        }
    }

    #[test]
    fn foreign_images_carry_no_document(carrier in image_strategy(24, 24)) {
        prop_assert_eq!(codec::extract(&carrier), Extraction::Absent);
    }

    #[test]
    fn extraction_never_panics_on_tiny_images(
        width in 0u32..8,
        height in 0u32..8,
        seed in any::<u8>(),
    ) {
        let carrier = ImageBuffer::from_pixel(width, height, Rgba([seed, seed, seed, seed]));
        prop_assert_eq!(codec::extract(&carrier), Extraction::Absent);
    }
}
