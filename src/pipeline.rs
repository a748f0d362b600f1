//! Contains the builder struct for configuring and running color extraction.

use crate::{
    select_distinct, DistinctColors, FrequencyMap, PixelBuffer, ALPHA_THRESHOLD,
    DEFAULT_MAX_COLORS, DISTINCTNESS_THRESHOLD,
};
#[cfg(feature = "image")]
use {crate::PaletteError, image::RgbaImage};

/// A builder struct to specify options for extracting distinct colors from a [`PixelBuffer`].
///
/// # Examples
/// ```
/// # use colorkit::{DistinctPalette, PixelBuffer, PaletteColor};
/// # fn main() -> Result<(), colorkit::PaletteError> {
/// let bytes = [
///     255, 0, 0, 255, 255, 0, 0, 255, 255, 0, 0, 255,
///     0, 0, 255, 255,
/// ];
/// let buffer = PixelBuffer::new(2, 2, &bytes)?;
///
/// let colors = DistinctPalette::new(buffer)
///     .max_colors(2)
///     .distinctness_threshold(0.25)
///     .colors();
///
/// let hex = colors.iter().map(|c| c.to_hex()).collect::<Vec<_>>();
/// assert_eq!(hex, ["#FF0000", "#0000FF"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DistinctPalette<'a> {
    /// The pixels to extract colors from.
    buffer: PixelBuffer<'a>,
    /// The maximum number of colors to return.
    max_colors: usize,
    /// Pixels with an alpha below this value are ignored.
    alpha_threshold: u8,
    /// The minimum normalized distance between any two returned colors.
    threshold: f64,
}

impl<'a> DistinctPalette<'a> {
    /// Creates a new [`DistinctPalette`] with default options.
    #[must_use]
    pub const fn new(buffer: PixelBuffer<'a>) -> Self {
        Self {
            buffer,
            max_colors: DEFAULT_MAX_COLORS,
            alpha_threshold: ALPHA_THRESHOLD,
            threshold: DISTINCTNESS_THRESHOLD,
        }
    }

    /// Sets the maximum number of colors to return.
    ///
    /// The default is [`DEFAULT_MAX_COLORS`]. A value of `0` always gives an empty result.
    #[must_use]
    pub const fn max_colors(mut self, max_colors: usize) -> Self {
        self.max_colors = max_colors;
        self
    }

    /// Sets the minimum alpha value a pixel must have to be counted.
    ///
    /// The default is [`ALPHA_THRESHOLD`].
    #[must_use]
    pub const fn alpha_threshold(mut self, alpha_threshold: u8) -> Self {
        self.alpha_threshold = alpha_threshold;
        self
    }

    /// Sets the minimum normalized RGB distance between any two returned colors.
    ///
    /// The default is [`DISTINCTNESS_THRESHOLD`].
    #[must_use]
    pub const fn distinctness_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Runs extraction and returns the distinct colors, most frequent first.
    #[must_use]
    pub fn colors(self) -> DistinctColors {
        self.select(&FrequencyMap::new(self.buffer, self.alpha_threshold))
    }

    /// Runs extraction, counting pixel colors in parallel.
    ///
    /// The result is identical to [`DistinctPalette::colors`].
    #[cfg(feature = "threads")]
    #[must_use]
    pub fn colors_par(self) -> DistinctColors {
        self.select(&FrequencyMap::new_par(self.buffer, self.alpha_threshold))
    }

    /// Runs the selection stage over already counted colors.
    fn select(&self, frequencies: &FrequencyMap) -> DistinctColors {
        let colors = select_distinct(frequencies, self.max_colors, self.threshold);

        log::debug!(
            "extracted {} of at most {} colors from {} unique colors ({} of {} pixels opaque)",
            colors.len(),
            self.max_colors,
            frequencies.len(),
            frequencies.total_count(),
            self.buffer.num_pixels(),
        );

        colors
    }
}

impl<'a> From<PixelBuffer<'a>> for DistinctPalette<'a> {
    fn from(buffer: PixelBuffer<'a>) -> Self {
        Self::new(buffer)
    }
}

#[cfg(feature = "image")]
impl<'a> TryFrom<&'a RgbaImage> for DistinctPalette<'a> {
    type Error = PaletteError;

    fn try_from(image: &'a RgbaImage) -> Result<Self, Self::Error> {
        Ok(Self::new(image.try_into()?))
    }
}

/// Extracts up to `max_colors` mutually distinct colors from `buffer`, most frequent first,
/// using the default alpha and distinctness thresholds.
///
/// Equally frequent colors are ordered by where they first appear in the buffer,
/// so the result is fully determined by the input.
///
/// # Examples
/// ```
/// # use colorkit::{extract_distinct_colors, PixelBuffer};
/// # use palette::Srgb;
/// # fn main() -> Result<(), colorkit::PaletteError> {
/// let bytes = [255, 0, 0, 255].repeat(4);
/// let colors = extract_distinct_colors(PixelBuffer::new(2, 2, &bytes)?, 14);
/// assert_eq!(&*colors, [Srgb::new(255, 0, 0)]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn extract_distinct_colors(buffer: PixelBuffer, max_colors: usize) -> DistinctColors {
    DistinctPalette::new(buffer).max_colors(max_colors).colors()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tests::*;
    use palette::Srgb;

    /// Runs both the sequential and parallel paths and checks they agree.
    fn extract(pixels: &[[u8; 4]], width: u32, max_colors: usize) -> Vec<Srgb<u8>> {
        let bytes = rgba_bytes(pixels);
        let height = u32::try_from(pixels.len()).unwrap() / width.max(1);
        let buffer = PixelBuffer::new(width, height, &bytes).unwrap();
        let colors = extract_distinct_colors(buffer, max_colors);

        #[cfg(feature = "threads")]
        {
            let par = DistinctPalette::new(buffer).max_colors(max_colors).colors_par();
            assert_eq!(par, colors);
        }

        colors.into_inner()
    }

    #[test]
    fn single_color_image() {
        let colors = extract(&[[255, 0, 0, 255]; 4], 2, 14);
        assert_eq!(colors, [Srgb::new(255, 0, 0)]);
    }

    #[test]
    fn two_colors_in_frequency_order() {
        let pixels = [
            [0, 0, 255, 255],
            [255, 0, 0, 255],
            [255, 0, 0, 255],
            [255, 0, 0, 255],
        ];
        let colors = extract(&pixels, 2, 2);
        assert_eq!(colors, [Srgb::new(255, 0, 0), Srgb::new(0, 0, 255)]);
    }

    #[test]
    fn equally_frequent_similar_colors_keep_first_seen() {
        let pixels = [
            [250, 5, 5, 255],
            [255, 0, 0, 255],
            [255, 0, 0, 255],
            [250, 5, 5, 255],
        ];
        let colors = extract(&pixels, 2, 2);
        assert_eq!(colors, [Srgb::new(250, 5, 5)]);

        let pixels = [pixels[1], pixels[0], pixels[2], pixels[3]];
        let colors = extract(&pixels, 2, 2);
        assert_eq!(colors, [Srgb::new(255, 0, 0)]);
    }

    #[test]
    fn fully_transparent_image() {
        assert!(extract(&[[12, 200, 40, 0]; 100], 10, 14).is_empty());
    }

    #[test]
    fn only_opaque_pixel_counts() {
        let mut pixels = vec![[255, 255, 255, 0]; 100];
        pixels[57] = [3, 140, 90, 255];
        assert_eq!(extract(&pixels, 10, 14), [Srgb::new(3, 140, 90)]);
    }

    #[test]
    fn zero_max_colors() {
        assert!(extract(&[[255, 0, 0, 255]; 4], 2, 0).is_empty());
        assert!(extract(&random_pixels(100, 5), 10, 0).is_empty());
    }

    #[test]
    fn empty_buffer() {
        let buffer = PixelBuffer::new(0, 0, &[]).unwrap();
        assert!(extract_distinct_colors(buffer, 14).is_empty());
    }

    #[test]
    fn twenty_distinct_colors_capped_at_fourteen() {
        let expected = well_separated_colors();
        let pixels = expected
            .iter()
            .map(|c| [c.red, c.green, c.blue, 255])
            .collect::<Vec<_>>();

        let colors = extract(&pixels, 4, 14);
        assert_eq!(colors, expected[..14]);
    }

    #[test]
    fn builder_options() {
        let pixels = [
            [0, 0, 0, 255],
            [0, 0, 0, 255],
            [0, 0, 0, 255],
            [40, 40, 40, 255],
            [40, 40, 40, 255],
            [255, 255, 255, 100],
        ];
        let bytes = rgba_bytes(&pixels);
        let buffer = PixelBuffer::new(3, 2, &bytes).unwrap();

        let default = DistinctPalette::new(buffer).colors();
        assert_eq!(&*default, [Srgb::new(0, 0, 0), Srgb::new(40, 40, 40)]);

        let strict = DistinctPalette::new(buffer).distinctness_threshold(0.5).colors();
        assert_eq!(&*strict, [Srgb::new(0, 0, 0)]);

        let lenient = DistinctPalette::from(buffer).alpha_threshold(100).colors();
        assert_eq!(
            &*lenient,
            [Srgb::new(0, 0, 0), Srgb::new(40, 40, 40), Srgb::new(255, 255, 255)]
        );
    }

    #[test]
    fn random_images_satisfy_invariants() {
        for seed in 0..8 {
            let pixels = random_pixels(100 * 100, seed);
            let bytes = rgba_bytes(&pixels);
            let buffer = PixelBuffer::new(100, 100, &bytes).unwrap();
            let frequencies = FrequencyMap::new(buffer, ALPHA_THRESHOLD);

            for max_colors in [0, 1, 7, 14, 100] {
                let colors = extract(&pixels, 100, max_colors);
                assert!(colors.len() <= max_colors);
                assert_pairwise_distinct(&colors, DISTINCTNESS_THRESHOLD);
                assert_nonincreasing_frequency(&colors, &frequencies);
            }
        }
    }

    #[test]
    fn deterministic() {
        let pixels = random_pixels(4096, 99);
        assert_eq!(extract(&pixels, 64, 14), extract(&pixels, 64, 14));
    }

    #[cfg(feature = "image")]
    #[test]
    fn from_rgba_image() {
        let image = RgbaImage::from_fn(4, 4, |x, _| {
            if x == 0 {
                image::Rgba([0, 255, 0, 255])
            } else {
                image::Rgba([0, 0, 0, 255])
            }
        });
        let colors = DistinctPalette::try_from(&image).unwrap().colors();
        assert_eq!(&*colors, [Srgb::new(0, 0, 0), Srgb::new(0, 255, 0)]);
    }
}
