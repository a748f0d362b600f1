//! Contains the frequency counter that turns a pixel buffer into per-color occurrence counts.

use crate::{
    types::{rgba, BYTES_PER_PIXEL},
    PixelBuffer,
};
use palette::Srgb;
#[cfg(feature = "threads")]
use rayon::prelude::*;
use std::{cmp::Reverse, collections::HashMap};

/// A unique color together with the number of opaque pixels that had it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorFrequency {
    /// The color, with alpha discarded.
    pub color: Srgb<u8>,
    /// The number of opaque pixels with this color. Always nonzero.
    pub count: usize,
    /// The index of the first opaque pixel with this color in row-major order.
    ///
    /// This is used to break ties between equally frequent colors.
    pub first_seen: usize,
}

/// The opaque colors of a [`PixelBuffer`] and their occurrence counts.
///
/// Entries are unique by color and are stored in first-seen order.
/// Pixels with an alpha below the chosen threshold are not counted at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyMap {
    /// One entry per unique color, ordered by `first_seen`.
    entries: Vec<ColorFrequency>,
    /// The number of opaque pixels, i.e., the sum of all counts.
    total_count: usize,
}

/// Accumulates counts while remembering where each color was first seen.
#[derive(Default)]
struct Counter {
    /// Maps a color to its position in `entries`.
    lookup: HashMap<[u8; 3], usize>,
    /// The accumulated entries in first-seen order.
    entries: Vec<ColorFrequency>,
    /// The number of pixels counted so far.
    total_count: usize,
}

impl Counter {
    /// Adds `count` occurrences of `color`, first seen at pixel index `first_seen`.
    ///
    /// Callers must add colors in nondecreasing `first_seen` order.
    fn add(&mut self, color: Srgb<u8>, first_seen: usize, count: usize) {
        self.total_count += count;
        let key = [color.red, color.green, color.blue];
        if let Some(&i) = self.lookup.get(&key) {
            self.entries[i].count += count;
        } else {
            self.lookup.insert(key, self.entries.len());
            self.entries.push(ColorFrequency { color, count, first_seen });
        }
    }

    /// Counts the opaque pixels in `bytes`, whose first pixel has index `offset` in the buffer.
    fn count_pixels(&mut self, bytes: &[u8], offset: usize, alpha_threshold: u8) {
        for (i, chunk) in bytes.chunks_exact(BYTES_PER_PIXEL).enumerate() {
            let pixel = rgba(chunk);
            if pixel.alpha >= alpha_threshold {
                self.add(pixel.color, offset + i, 1);
            }
        }
    }

    /// Converts the accumulated counts into a [`FrequencyMap`].
    fn finish(self) -> FrequencyMap {
        FrequencyMap {
            entries: self.entries,
            total_count: self.total_count,
        }
    }
}

impl FrequencyMap {
    /// Counts the colors of every pixel in `buffer` whose alpha is at least `alpha_threshold`.
    ///
    /// See [`ALPHA_THRESHOLD`](crate::ALPHA_THRESHOLD) for the default threshold.
    #[must_use]
    pub fn new(buffer: PixelBuffer, alpha_threshold: u8) -> Self {
        let mut counter = Counter::default();
        counter.count_pixels(buffer.as_bytes(), 0, alpha_threshold);
        counter.finish()
    }

    /// Counts the colors of `buffer` in parallel.
    ///
    /// The result is identical to [`FrequencyMap::new`], including entry order and `first_seen` indices.
    #[cfg(feature = "threads")]
    #[must_use]
    pub fn new_par(buffer: PixelBuffer, alpha_threshold: u8) -> Self {
        if buffer.is_empty() {
            return Self::default();
        }

        let chunk_pixels = buffer.num_pixels().div_ceil(rayon::current_num_threads());
        let partials = buffer
            .as_bytes()
            .par_chunks(chunk_pixels * BYTES_PER_PIXEL)
            .enumerate()
            .map(|(i, bytes)| {
                let mut counter = Counter::default();
                counter.count_pixels(bytes, i * chunk_pixels, alpha_threshold);
                counter
            })
            .collect::<Vec<_>>();

        // merging in chunk order keeps the earliest `first_seen` for each color
        let mut merged = Counter::default();
        for partial in partials {
            for entry in partial.entries {
                merged.add(entry.color, entry.first_seen, entry.count);
            }
        }
        merged.finish()
    }

    /// Returns the unique colors and their counts in first-seen order.
    #[must_use]
    pub fn entries(&self) -> &[ColorFrequency] {
        &self.entries
    }

    /// Returns the number of opaque pixels that were counted.
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns the number of unique colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether or not no opaque pixels were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of opaque pixels with exactly `color`, or `0` if there were none.
    #[must_use]
    pub fn count_of(&self, color: Srgb<u8>) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.color == color)
            .map_or(0, |entry| entry.count)
    }

    /// Returns the entries sorted by descending count.
    ///
    /// Equal counts are ordered by ascending `first_seen`, so the ranking is fully deterministic.
    #[must_use]
    pub fn ranked(&self) -> Vec<ColorFrequency> {
        let mut ranked = self.entries.clone();
        ranked.sort_unstable_by_key(|entry| (Reverse(entry.count), entry.first_seen));
        ranked
    }
}
