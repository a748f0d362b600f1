//! Contains the error type shared across the crate.

use thiserror::Error;

/// The errors that can occur when handing data to `colorkit`.
///
/// Extraction itself never fails: once a [`PixelBuffer`](crate::PixelBuffer) has been
/// constructed, every code path is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The byte length of a pixel buffer does not equal `width * height * 4`.
    #[error("pixel buffer length {len} does not match dimensions {width}x{height} (expected 4 bytes per pixel)")]
    DimensionMismatch {
        /// The length of the provided byte slice.
        len: usize,
        /// The claimed width in pixels.
        width: u32,
        /// The claimed height in pixels.
        height: u32,
    },

    /// A string could not be parsed as a hex color code.
    #[error("invalid hex color {input:?}: {reason}")]
    InvalidHex {
        /// The rejected input.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },
}
