//! Contains the input and output types of color extraction.

use crate::PaletteError;
use palette::{Srgb, Srgba};
use std::ops::Deref;
#[cfg(feature = "image")]
use image::RgbaImage;

/// The number of bytes in one RGBA8 pixel.
pub(crate) const BYTES_PER_PIXEL: usize = 4;

/// A borrowed, row-major RGBA8 raster with the invariant that its byte length
/// is exactly `width * height * 4`.
///
/// The raster is only read, never modified, by extraction.
///
/// # Examples
/// Use [`PixelBuffer::new`] on raw bytes:
/// ```
/// # use colorkit::{PixelBuffer, PaletteError};
/// # fn main() -> Result<(), PaletteError> {
/// let bytes = [255, 0, 0, 255, 0, 0, 255, 255];
/// let buffer = PixelBuffer::new(2, 1, &bytes)?;
/// assert_eq!(buffer.num_pixels(), 2);
///
/// assert!(PixelBuffer::new(3, 1, &bytes).is_err());
/// # Ok(())
/// # }
/// ```
///
/// Or convert an image (needs the `image` feature to be enabled):
/// ```no_run
/// # use colorkit::PixelBuffer;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let img = image::open("some image")?.into_rgba8();
/// let buffer = PixelBuffer::try_from(&img)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBuffer<'a> {
    /// The width in pixels.
    width: u32,
    /// The height in pixels.
    height: u32,
    /// The RGBA8 bytes, `width * height * 4` long.
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Creates a new [`PixelBuffer`] over `data`.
    ///
    /// # Errors
    /// Returns [`PaletteError::DimensionMismatch`] if `data.len()` is not `width * height * 4`.
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self, PaletteError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL));

        if expected == Some(data.len()) {
            Ok(Self { width, height, data })
        } else {
            Err(PaletteError::DimensionMismatch { len: data.len(), width, height })
        }
    }

    /// The width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// The height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The number of pixels in the buffer.
    #[must_use]
    pub const fn num_pixels(&self) -> usize {
        self.data.len() / BYTES_PER_PIXEL
    }

    /// Whether or not the buffer contains no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw RGBA8 bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Returns an iterator over the pixels in row-major order.
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = Srgba<u8>> + 'a {
        self.data.chunks_exact(BYTES_PER_PIXEL).map(rgba)
    }
}

/// Reads one pixel out of a 4 byte chunk.
#[inline]
pub(crate) fn rgba(chunk: &[u8]) -> Srgba<u8> {
    Srgba::new(chunk[0], chunk[1], chunk[2], chunk[3])
}

#[cfg(feature = "image")]
impl<'a> TryFrom<&'a RgbaImage> for PixelBuffer<'a> {
    type Error = PaletteError;

    fn try_from(image: &'a RgbaImage) -> Result<Self, Self::Error> {
        let (width, height) = image.dimensions();
        // `ImageBuffer` allows a backing buffer longer than the image.
        let data = image.as_raw();
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .map_or(data.len(), |len| len.min(data.len()));
        Self::new(width, height, &data[..len])
    }
}

/// The ordered, mutually distinct colors returned by extraction.
///
/// Colors are ordered by descending frequency in the source buffer,
/// and every pair of colors is at least the distinctness threshold apart.
/// The sequence cannot be modified once produced;
/// use [`DistinctColors::into_inner`] to take ownership of the colors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistinctColors(Vec<Srgb<u8>>);

impl DistinctColors {
    /// Wraps colors that are already known to satisfy the distinctness invariant.
    pub(crate) const fn new_unchecked(colors: Vec<Srgb<u8>>) -> Self {
        Self(colors)
    }

    /// Returns the inner `Vec` of colors.
    #[must_use]
    pub fn into_inner(self) -> Vec<Srgb<u8>> {
        self.0
    }
}

impl Deref for DistinctColors {
    type Target = [Srgb<u8>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[Srgb<u8>]> for DistinctColors {
    fn as_ref(&self) -> &[Srgb<u8>] {
        self
    }
}

impl From<DistinctColors> for Vec<Srgb<u8>> {
    fn from(colors: DistinctColors) -> Self {
        colors.into_inner()
    }
}

impl<'a> IntoIterator for &'a DistinctColors {
    type Item = &'a Srgb<u8>;
    type IntoIter = std::slice::Iter<'a, Srgb<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
