//! A presentation-side model of a palette: a fixed two-row grid of color slots with labels.
//!
//! This holds no extraction logic; it only arranges already extracted colors for display.

use crate::PaletteColor;
use palette::Srgb;
use std::fmt::Display;

/// The number of rows in a [`PaletteGrid`].
pub const GRID_ROWS: usize = 2;

/// The number of slots per row in a [`PaletteGrid`].
pub const GRID_COLUMNS: usize = 7;

/// The total number of slots in a [`PaletteGrid`].
pub const GRID_SLOTS: usize = GRID_ROWS * GRID_COLUMNS;

/// The neutral light gray shown in slots without a color.
pub const PLACEHOLDER: Srgb<u8> = Srgb::new(170, 170, 170);

/// How slot labels are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorFormat {
    /// `"#RRGGBB"`, see [`PaletteColor::to_hex`].
    #[default]
    Hex,
    /// `"(R,G,B)"`, see [`PaletteColor::to_rgb_string`].
    Rgb,
}

impl ColorFormat {
    /// Returns the other format.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Hex => Self::Rgb,
            Self::Rgb => Self::Hex,
        }
    }

    /// A short label naming the format.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hex => "HEX",
            Self::Rgb => "RGB",
        }
    }

    /// Formats `color` in this format.
    #[must_use]
    pub fn format(self, color: Srgb<u8>) -> String {
        match self {
            Self::Hex => color.to_hex(),
            Self::Rgb => color.to_rgb_string(),
        }
    }
}

impl Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One cell of a [`PaletteGrid`].
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    /// The color to show, or [`PLACEHOLDER`] if the slot is unused.
    pub color: Srgb<u8>,
    /// The formatted color, or an empty string if the slot is unused.
    pub label: String,
    /// Whether or not the slot holds an extracted color.
    pub filled: bool,
}

/// A fixed grid of [`GRID_SLOTS`] color slots, filled in row-major order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaletteGrid {
    /// At most [`GRID_SLOTS`] colors.
    colors: Vec<Srgb<u8>>,
    /// The current label format.
    format: ColorFormat,
}

impl PaletteGrid {
    /// Creates an empty grid showing hex labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the shown colors. Colors past the first [`GRID_SLOTS`] are dropped.
    pub fn set_colors(&mut self, colors: &[Srgb<u8>]) {
        self.colors = colors.iter().copied().take(GRID_SLOTS).collect();
    }

    /// Removes all colors, leaving every slot as a placeholder.
    pub fn clear(&mut self) {
        self.colors.clear();
    }

    /// The colors currently shown.
    #[must_use]
    pub fn colors(&self) -> &[Srgb<u8>] {
        &self.colors
    }

    /// The current label format.
    #[must_use]
    pub const fn format(&self) -> ColorFormat {
        self.format
    }

    /// Sets the label format.
    pub fn set_format(&mut self, format: ColorFormat) {
        self.format = format;
    }

    /// Switches between hex and decimal labels.
    pub fn toggle_format(&mut self) {
        self.format = self.format.toggled();
    }

    /// Returns all [`GRID_SLOTS`] slots in row-major order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..GRID_SLOTS).map(|i| match self.colors.get(i) {
            Some(&color) => Slot {
                color,
                label: self.format.format(color),
                filled: true,
            },
            None => Slot {
                color: PLACEHOLDER,
                label: String::new(),
                filled: false,
            },
        })
    }

    /// Returns the slots split into [`GRID_ROWS`] rows of [`GRID_COLUMNS`].
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Slot>> {
        let slots = self.slots().collect::<Vec<_>>();
        slots.chunks(GRID_COLUMNS).map(<[Slot]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    #[test]
    fn empty_grid_is_all_placeholders() {
        let grid = PaletteGrid::new();
        let slots = grid.slots().collect::<Vec<_>>();
        assert_eq!(slots.len(), GRID_SLOTS);
        assert!(slots
            .iter()
            .all(|s| !s.filled && s.color == PLACEHOLDER && s.label.is_empty()));
    }

    #[test]
    fn colors_fill_in_row_major_order() {
        let colors = well_separated_colors();
        let mut grid = PaletteGrid::new();
        grid.set_colors(&colors[..9]);

        let rows = grid.rows();
        assert_eq!(rows.len(), GRID_ROWS);
        assert!(rows.iter().all(|row| row.len() == GRID_COLUMNS));
        assert_eq!(rows[0][0].color, colors[0]);
        assert_eq!(rows[1][1].color, colors[8]);
        assert!(rows[1][1].filled);
        assert!(!rows[1][2].filled);
    }

    #[test]
    fn extra_colors_are_dropped() {
        let colors = well_separated_colors();
        let mut grid = PaletteGrid::new();
        grid.set_colors(&colors);
        assert_eq!(grid.colors(), &colors[..GRID_SLOTS]);
        assert!(grid.slots().all(|s| s.filled));
    }

    #[test]
    fn toggle_changes_labels() {
        let mut grid = PaletteGrid::new();
        grid.set_colors(&[Srgb::new(255, 16, 0)]);
        assert_eq!(grid.format(), ColorFormat::Hex);
        assert_eq!(grid.rows()[0][0].label, "#FF1000");

        grid.toggle_format();
        assert_eq!(grid.format().label(), "RGB");
        assert_eq!(grid.rows()[0][0].label, "(255,16,0)");

        grid.toggle_format();
        assert_eq!(grid.format(), ColorFormat::Hex);
    }

    #[test]
    fn clear_resets() {
        let mut grid = PaletteGrid::new();
        grid.set_colors(&well_separated_colors());
        grid.clear();
        assert!(grid.colors().is_empty());
        assert_eq!(grid.slots().filter(|s| s.filled).count(), 0);
    }
}
