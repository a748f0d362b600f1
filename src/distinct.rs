//! Contains the greedy selection of mutually distinct colors.
//!
//! Candidates are visited from most to least frequent (ties go to the color seen first).
//! A candidate is accepted only if its [`normalized_distance`] to every previously accepted
//! color is at least the threshold; otherwise it is considered to be represented by
//! the more frequent, similar color that was already accepted.
//! Selection stops once `max_colors` colors have been accepted or the candidates run out.

use crate::{normalized_distance, DistinctColors, FrequencyMap};
use palette::Srgb;

/// Whether or not `color` is at least `threshold` away from every color in `accepted`.
fn is_distinct(color: Srgb<u8>, accepted: &[Srgb<u8>], threshold: f64) -> bool {
    accepted
        .iter()
        .all(|&other| normalized_distance(color, other) >= threshold)
}

/// Selects up to `max_colors` mutually distinct colors from `frequencies`,
/// in descending order of frequency.
///
/// Every pair of returned colors has a [`normalized_distance`] of at least `threshold`.
/// A `max_colors` of `0` or an empty `frequencies` gives an empty result.
#[must_use]
pub fn select_distinct(
    frequencies: &FrequencyMap,
    max_colors: usize,
    threshold: f64,
) -> DistinctColors {
    let mut accepted = Vec::with_capacity(max_colors.min(frequencies.len()));

    for candidate in frequencies.ranked() {
        if accepted.len() >= max_colors {
            break;
        }

        if is_distinct(candidate.color, &accepted, threshold) {
            accepted.push(candidate.color);
        } else {
            log::trace!(
                "skipping {:?} (count {}): too close to an accepted color",
                candidate.color,
                candidate.count,
            );
        }
    }

    DistinctColors::new_unchecked(accepted)
}
