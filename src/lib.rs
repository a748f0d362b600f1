//! A library for extracting a small palette of distinct dominant colors from an image.
//!
//! Extraction runs in two stages over an RGBA8 [`PixelBuffer`]:
//! 1. A [`FrequencyMap`] counts how often each opaque color occurs.
//!    Pixels with an alpha below [`ALPHA_THRESHOLD`] are ignored.
//! 2. [`select_distinct`] walks the colors from most to least frequent and greedily keeps
//!    each one that is at least [`DISTINCTNESS_THRESHOLD`] away (normalized RGB Euclidean distance)
//!    from every color kept so far, until the requested number of colors is reached.
//!
//! Equally frequent colors are ranked by where they first appear in the buffer,
//! so the output is fully determined by the input.
//!
//! # Features
//! To reduce dependencies and compile times, `colorkit` has several `cargo` features
//! that can be turned off or on:
//! - `threads`: exposes a parallel frequency counter via [`rayon`].
//! - `image`: enables integration with the [`image`] crate, including sampling
//!   an image down to [`SAMPLE_WIDTH`] x [`SAMPLE_HEIGHT`] before extraction.
//!
//! # Example
//! ```no_run
//! # use colorkit::{DistinctPalette, PaletteColor};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::open("some image")?;
//! let sampled = colorkit::sample_image(&img);
//!
//! let colors = DistinctPalette::try_from(&sampled)?
//!     .max_colors(8) // at most 8 colors
//!     .distinctness_threshold(0.2) // require colors to be further apart
//!     .colors_par(); // count pixels in parallel
//!
//! for color in &colors {
//!     println!("{} {}", color.to_hex(), color.to_rgb_string());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::unwrap_in_result,
    clippy::expect_used,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice,
    missing_docs,
    clippy::missing_docs_in_private_items,
    rustdoc::all,
    clippy::float_cmp_const,
    clippy::lossy_float_literal
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::many_single_char_names,
    clippy::missing_panics_doc,
    clippy::unreadable_literal,
    clippy::wildcard_imports
)]

mod color;
mod distinct;
mod error;
mod frequency;
mod pipeline;
mod types;

#[cfg(feature = "image")]
mod sample;

pub mod display;


pub use color::*;
pub use distinct::select_distinct;
pub use error::PaletteError;
pub use frequency::*;
pub use pipeline::*;
pub use types::*;

#[cfg(feature = "image")]
pub use sample::*;

/// The default maximum number of colors to extract, enough to fill a [`display::PaletteGrid`].
pub const DEFAULT_MAX_COLORS: usize = display::GRID_SLOTS;

/// Pixels with an alpha value below this (i.e., less than 50% opaque) are ignored.
pub const ALPHA_THRESHOLD: u8 = 128;

/// The default minimum normalized RGB distance between any two extracted colors.
///
/// See [`normalized_distance`].
pub const DISTINCTNESS_THRESHOLD: f64 = 0.1;

/// The width images are resized to before extraction.
pub const SAMPLE_WIDTH: u32 = 100;

/// The height images are resized to before extraction.
pub const SAMPLE_HEIGHT: u32 = 100;
