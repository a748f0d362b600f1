//! The color value shared between the frequency counter and the selector,
//! along with its distance function and string projections.

use crate::PaletteError;
use palette::Srgb;
use std::str::FromStr;

/// The largest value of a `u8` channel as a float, used to normalize channels into `[0, 1]`.
const CHANNEL_MAX: f64 = 255.0;

/// Returns the Euclidean distance between two colors after normalizing each channel into `[0, 1]`.
///
/// The result lies in `[0, sqrt(3)]`.
#[must_use]
pub fn normalized_distance(a: Srgb<u8>, b: Srgb<u8>) -> f64 {
    let channel = |x: u8, y: u8| {
        let d = (f64::from(x) - f64::from(y)) / CHANNEL_MAX;
        d * d
    };

    (channel(a.red, b.red) + channel(a.green, b.green) + channel(a.blue, b.blue)).sqrt()
}

/// Parses a hex color code into an [`Srgb<u8>`].
///
/// Both the long (`"#RRGGBB"`) and short (`"#RGB"`) forms are accepted,
/// with or without the leading `#`, in either letter case.
///
/// # Errors
/// Returns [`PaletteError::InvalidHex`] if `hex` is not a valid color code.
///
/// # Examples
/// ```
/// # use colorkit::{parse_hex, PaletteColor};
/// # fn main() -> Result<(), colorkit::PaletteError> {
/// let color = parse_hex("#1E90FF")?;
/// assert_eq!(color.to_hex(), "#1E90FF");
/// # Ok(())
/// # }
/// ```
pub fn parse_hex(hex: &str) -> Result<Srgb<u8>, PaletteError> {
    let invalid = |reason: String| PaletteError::InvalidHex {
        input: hex.to_owned(),
        reason,
    };

    // palette slices by byte offset and accepts a leading `+` per channel
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !matches!(digits.len(), 3 | 6) {
        return Err(invalid(format!("expected 3 or 6 hex digits, found {}", digits.len())));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid("contains a character that is not a hex digit".to_owned()));
    }

    Srgb::<u8>::from_str(hex).map_err(|e| invalid(e.to_string()))
}

/// Palette-facing operations on 8-bit sRGB colors.
pub trait PaletteColor: Copy {
    /// Formats the color as `"#RRGGBB"` using uppercase, zero-padded hex digits.
    fn to_hex(self) -> String;

    /// Formats the color as a decimal triplet `"(R,G,B)"`.
    fn to_rgb_string(self) -> String;

    /// The normalized Euclidean distance to `other`. See [`normalized_distance`].
    fn distance_to(self, other: Self) -> f64;
}

impl PaletteColor for Srgb<u8> {
    fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    fn to_rgb_string(self) -> String {
        format!("({},{},{})", self.red, self.green, self.blue)
    }

    fn distance_to(self, other: Self) -> f64 {
        normalized_distance(self, other)
    }
}
