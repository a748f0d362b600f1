//! Sampling images down to the fixed resolution that extraction runs on.
//!
//! Extraction cost depends only on the number of sampled pixels,
//! so images of any size are first resized to [`SAMPLE_WIDTH`] x [`SAMPLE_HEIGHT`].
//! The aspect ratio is not preserved.

use crate::{DistinctColors, DistinctPalette, PixelBuffer, SAMPLE_HEIGHT, SAMPLE_WIDTH};
use image::{imageops::FilterType, DynamicImage, RgbaImage};

/// Resizes `image` to `width` x `height` and converts it to straight (non-premultiplied) RGBA8.
#[must_use]
pub fn sample_image_to(image: &DynamicImage, width: u32, height: u32) -> RgbaImage {
    if image.width() == width && image.height() == height {
        image.to_rgba8()
    } else {
        image::imageops::resize(&image.to_rgba8(), width, height, FilterType::Triangle)
    }
}

/// Resizes `image` to the canonical [`SAMPLE_WIDTH`] x [`SAMPLE_HEIGHT`] resolution.
#[must_use]
pub fn sample_image(image: &DynamicImage) -> RgbaImage {
    sample_image_to(image, SAMPLE_WIDTH, SAMPLE_HEIGHT)
}

/// Samples `image` and extracts up to `max_colors` distinct colors from it
/// using the default thresholds.
///
/// # Examples
/// ```no_run
/// # use colorkit::{extract_from_image, PaletteColor};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let img = image::open("some image")?;
/// for color in &extract_from_image(&img, 14) {
///     println!("{}", color.to_hex());
/// }
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn extract_from_image(image: &DynamicImage, max_colors: usize) -> DistinctColors {
    let sampled = sample_image(image);
    // a freshly resized `RgbaImage` always holds `width * height * 4` bytes
    PixelBuffer::try_from(&sampled)
        .map(|buffer| DistinctPalette::new(buffer).max_colors(max_colors).colors())
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use image::Rgba;
    use palette::Srgb;

    #[test]
    fn samples_to_canonical_resolution() {
        for (w, h) in [(1, 1), (37, 512), (640, 480), (100, 100)] {
            let image = DynamicImage::ImageRgba8(RgbaImage::new(w, h));
            assert_eq!(sample_image(&image).dimensions(), (SAMPLE_WIDTH, SAMPLE_HEIGHT));
        }
    }

    #[test]
    fn rgb_images_become_opaque() {
        let image = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            250,
            40,
            image::Rgb([10, 120, 230]),
        ));
        let sampled = sample_image(&image);
        assert!(sampled.pixels().all(|&p| p == Rgba([10, 120, 230, 255])));
    }

    #[test]
    fn halves_of_an_image() {
        let image = RgbaImage::from_fn(200, 200, |_, y| {
            if y < 150 {
                Rgba([255, 255, 0, 255])
            } else {
                Rgba([0, 0, 128, 255])
            }
        });

        let colors = extract_from_image(&DynamicImage::ImageRgba8(image), 14);
        assert_eq!(colors[0], Srgb::new(255, 255, 0));
        assert!(colors.contains(&Srgb::new(0, 0, 128)));
        crate::tests::assert_pairwise_distinct(&colors, crate::DISTINCTNESS_THRESHOLD);
    }

    #[test]
    fn matches_extraction_on_the_sampled_buffer() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_fn(333, 47, |x, y| {
            Rgba([(x % 256) as u8, (y * 5) as u8, ((x + y) % 7 * 30) as u8, 255])
        }));
        let sampled = sample_image(&image);
        let expected = DistinctPalette::new(PixelBuffer::try_from(&sampled).unwrap())
            .max_colors(9)
            .colors();

        let colors = extract_from_image(&image, 9);
        assert_eq!(colors, expected);
        assert_eq!(colors.len(), 9);
    }

    #[test]
    fn transparent_image_has_no_colors() {
        let image = RgbaImage::from_pixel(300, 300, Rgba([255, 0, 0, 0]));
        assert!(extract_from_image(&DynamicImage::ImageRgba8(image), 14).is_empty());
    }
}
