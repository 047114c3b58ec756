//! Deterministic heuristics that produce the metadata document for an image.
//!
//! Nothing in here is machine learning: "detections" and descriptions are
//! fixed rules over simple pixel statistics. The codec never depends on this
//! module, any other [`MetadataDocument`] can be embedded just as well.

use image::RgbaImage;
use serde_json::{json, Value};

use crate::document::MetadataDocument;

pub const METADATA_VERSION: u32 = 2;

const ATTENTION_PERCENTILE: f64 = 90.0;
const MAX_FOCUS_REGIONS: usize = 10;
const WARM_RED_MEAN: f64 = 150.0;
const DETAILED_TEXTURE_STD_DEV: f64 = 50.0;

/// Builds the complete document: features, annotations and model hints.
pub fn create_metadata(image: &RgbaImage) -> MetadataDocument {
    json!({
        "version": METADATA_VERSION,
        "features": analyze_features(image),
        "ai_annotations": generate_annotations(image),
        "model_hints": {
            "recommended_models": ["ResNet50", "CLIP", "YOLO"],
            "complexity_score": 0.73,
            "processing_priority": "high_detail"
        }
    })
}

/// Brightness, contrast, edge density, per channel means and attention statistics.
pub fn analyze_features(image: &RgbaImage) -> Value {
    let rgb: Moments = channel_values(image, 3).collect();
    let mean_rgb: Vec<f64> = (0..3)
        .map(|c| {
            image
                .pixels()
                .map(|p| f64::from(p.0[c]))
                .collect::<Moments>()
                .mean()
        })
        .collect();
    let gray = gray_levels(image);

    json!({
        "brightness": rgb.mean(),
        "contrast": rgb.std_dev(),
        "edge_density": edge_density(&gray, image.width() as usize, image.height() as usize),
        "mean_rgb": mean_rgb,
        "dimensions": [image.width(), image.height()],
        "attention_maps": attention_map(&gray, image.width() as usize)
    })
}

/// Simulated object classes, boxes, preprocessing parameters and a text context.
pub fn generate_annotations(image: &RgbaImage) -> Value {
    let objects = detect_objects(image);
    let bounding_boxes = bounding_boxes(image, &objects);
    let llm_context = llm_context(&objects);

    json!({
        "object_classes": objects,
        "bounding_boxes": bounding_boxes,
        "preprocessing_params": {
            "mean_rgb": [0.485, 0.456, 0.406],
            "input_size": [224, 224],
            "normalization": "imagenet"
        },
        "llm_context": llm_context
    })
}

fn detect_objects(image: &RgbaImage) -> Vec<&'static str> {
    let mut objects = vec!["puppy", "background"];

    let red: Moments = image.pixels().map(|p| f64::from(p.0[0])).collect();
    if red.mean() > WARM_RED_MEAN {
        objects.push("warm_lighting");
    }
    let all_channels: Moments = channel_values(image, 4).collect();
    if all_channels.std_dev() > DETAILED_TEXTURE_STD_DEV {
        objects.push("detailed_texture");
    }

    objects
}

fn bounding_boxes(image: &RgbaImage, objects: &[&str]) -> Vec<Value> {
    let (w, h) = image.dimensions();
    objects
        .iter()
        .filter(|&&o| o == "puppy")
        .map(|o| {
            json!({
                "class": o,
                "bbox": [w / 4, h / 4, 3 * w / 4, 3 * h / 4],
                "confidence": 0.95
            })
        })
        .collect()
}

fn llm_context(objects: &[&str]) -> Value {
    if objects.contains(&"puppy") {
        json!({
            "scene_description": "An adorable light brown puppy looking directly at the viewer",
            "visual_elements": ["soft fur", "large eyes", "playful expression", "indoor setting"],
            "suggested_tags": ["puppy", "cute", "pet", "portrait", "indoor"]
        })
    } else {
        json!({
            "scene_description": "A general image with various visual elements",
            "visual_elements": ["mixed content", "natural lighting"],
            "suggested_tags": ["general", "image"]
        })
    }
}

/// mean of R, G and B per pixel, row-major
fn gray_levels(image: &RgbaImage) -> Vec<f64> {
    image
        .pixels()
        .map(|p| (f64::from(p.0[0]) + f64::from(p.0[1]) + f64::from(p.0[2])) / 3.0)
        .collect()
}

/// mean of |vertical| + |horizontal| gray differences over the (h-1)x(w-1) grid
fn edge_density(gray: &[f64], width: usize, height: usize) -> f64 {
    if width < 2 || height < 2 {
        return 0.0;
    }

    let mut edges = Moments::default();
    for y in 0..height - 1 {
        for x in 0..width - 1 {
            let here = gray[y * width + x];
            let below = gray[(y + 1) * width + x];
            let right = gray[y * width + x + 1];
            edges.push((below - here).abs() + (right - here).abs());
        }
    }

    edges.mean()
}

fn attention_map(gray: &[f64], width: usize) -> Value {
    let gray_mean = gray.iter().copied().collect::<Moments>().mean();
    let attention: Vec<f64> = gray
        .iter()
        .map(|g| (g - gray_mean).abs() / 255.0)
        .collect();

    let threshold = percentile(&attention, ATTENTION_PERCENTILE);
    let peaks: Vec<usize> = attention
        .iter()
        .enumerate()
        .filter(|&(_, &a)| a > threshold)
        .map(|(i, _)| i)
        .collect();
    let focus_regions: Vec<[usize; 2]> = peaks
        .iter()
        .take(MAX_FOCUS_REGIONS)
        .map(|i| [i % width, i / width])
        .collect();

    json!({
        "avg_attention": attention.iter().copied().collect::<Moments>().mean(),
        "max_attention": attention.iter().copied().fold(0.0, f64::max),
        "attention_peaks": peaks.len(),
        "focus_regions": focus_regions
    })
}

fn channel_values(image: &RgbaImage, channels: usize) -> impl Iterator<Item = f64> + '_ {
    image
        .pixels()
        .flat_map(move |p| p.0.into_iter().take(channels).map(f64::from))
}

/// percentile with linear interpolation between the closest ranks
fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let (lo, hi) = (rank.floor() as usize, rank.ceil() as usize);
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

/// running mean and population standard deviation (Welford)
#[derive(Debug, Default)]
struct Moments {
    n: u64,
    mean: f64,
    m2: f64,
}

impl Moments {
    fn push(&mut self, x: f64) {
        self.n += 1;
        let delta = x - self.mean;
        self.mean += delta / self.n as f64;
        self.m2 += delta * (x - self.mean);
    }

    fn mean(&self) -> f64 {
        self.mean
    }

    fn std_dev(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        (self.m2 / self.n as f64).sqrt()
    }
}

impl FromIterator<f64> for Moments {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut m = Moments::default();
        for x in iter {
            m.push(x);
        }
        m
    }
}
