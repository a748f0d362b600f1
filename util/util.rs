#![allow(dead_code)]

use std::sync::OnceLock;

use image::RgbaImage;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro128PlusPlus;

/// A synthetic photo-like image: smooth gradients, a few flat regions, and some transparency.
pub fn synthetic_image(width: u32, height: u32, seed: u64) -> RgbaImage {
    let mut rng = Xoroshiro128PlusPlus::seed_from_u64(seed);
    let flat = [
        image::Rgba([rng.gen(), rng.gen(), rng.gen(), 255]),
        image::Rgba([rng.gen(), rng.gen(), rng.gen(), 255]),
        image::Rgba([rng.gen(), rng.gen(), rng.gen(), 255]),
    ];

    RgbaImage::from_fn(width, height, |x, y| {
        let region = (x * 4 / width.max(1), y * 4 / height.max(1));
        match region {
            (0, _) => flat[0],
            (_, 0) => flat[1],
            (3, 3) => flat[2],
            (1, 3) => image::Rgba([0, 0, 0, 0]),
            _ => {
                #[allow(clippy::cast_possible_truncation)]
                let channel = |v: u32, max: u32| (v * 255 / max.max(1)) as u8;
                let noise = rng.gen_range(0..8);
                image::Rgba([
                    channel(x, width).saturating_add(noise),
                    channel(y, height),
                    channel(x + y, width + height),
                    255,
                ])
            }
        }
    })
}

pub fn synthetic_images() -> &'static [(String, RgbaImage)] {
    static IMAGES: OnceLock<Vec<(String, RgbaImage)>> = OnceLock::new();
    IMAGES.get_or_init(|| {
        [(100, 100), (480, 270), (1920, 1080)]
            .into_iter()
            .enumerate()
            .map(|(seed, (w, h))| (format!("synthetic_{w}x{h}"), synthetic_image(w, h, seed as u64)))
            .collect()
    })
}
