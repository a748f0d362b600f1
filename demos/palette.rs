#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice
)]

use std::{fmt::Display, path::PathBuf};

use clap::{Parser, ValueEnum};
use colorkit::{
    display::{ColorFormat, PaletteGrid, Slot},
    sample_image_to, DistinctColors, DistinctPalette, PixelBuffer, ALPHA_THRESHOLD,
    DEFAULT_MAX_COLORS, DISTINCTNESS_THRESHOLD, SAMPLE_HEIGHT, SAMPLE_WIDTH,
};

#[derive(Copy, Clone, ValueEnum)]
enum CliColorFormat {
    Hex,
    Rgb,
}

impl From<CliColorFormat> for ColorFormat {
    fn from(value: CliColorFormat) -> Self {
        match value {
            CliColorFormat::Hex => ColorFormat::Hex,
            CliColorFormat::Rgb => ColorFormat::Rgb,
        }
    }
}

impl Display for CliColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CliColorFormat::Hex => "hex",
                CliColorFormat::Rgb => "rgb",
            }
        )
    }
}

/// Prints the distinct dominant colors of an image as a two row palette.
#[derive(Parser)]
pub struct Options {
    #[arg(short, long, default_value_t = DEFAULT_MAX_COLORS)]
    k: usize,

    #[arg(long, default_value_t = CliColorFormat::Hex)]
    format: CliColorFormat,

    #[arg(long, default_value_t = DISTINCTNESS_THRESHOLD)]
    threshold: f64,

    #[arg(long, default_value_t = ALPHA_THRESHOLD)]
    alpha: u8,

    #[arg(long, default_value_t = SAMPLE_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = SAMPLE_HEIGHT)]
    height: u32,

    /// Count pixels on multiple threads.
    #[arg(long)]
    par: bool,

    /// Draw each slot as a 24-bit color swatch.
    #[arg(long)]
    swatches: bool,

    #[arg(long)]
    verbose: bool,

    input: PathBuf,
}

fn main() {
    let Options {
        k,
        format,
        threshold,
        alpha,
        width,
        height,
        par,
        swatches,
        verbose,
        input,
    } = Options::parse();

    macro_rules! log {
        ($name: literal, $val: expr) => {
            if verbose {
                let time = std::time::Instant::now();
                let value = $val;
                println!("{} took {}ms", $name, time.elapsed().as_millis());
                value
            } else {
                $val
            }
        };
    }

    let colors = match log!("read image", image::open(&input)) {
        Ok(image) => {
            let sampled = log!("sampling", sample_image_to(&image, width, height));
            match PixelBuffer::try_from(&sampled) {
                Ok(buffer) => {
                    let palette = DistinctPalette::new(buffer)
                        .max_colors(k)
                        .alpha_threshold(alpha)
                        .distinctness_threshold(threshold);

                    log!(
                        "extraction",
                        if par { palette.colors_par() } else { palette.colors() }
                    )
                }
                Err(e) => {
                    eprintln!("warning: {e}");
                    DistinctColors::default()
                }
            }
        }
        Err(e) => {
            eprintln!("warning: could not read {}: {e}", input.display());
            DistinctColors::default()
        }
    };

    let mut grid = PaletteGrid::new();
    grid.set_format(format.into());
    grid.set_colors(&colors);

    println!("{} ({} colors)", grid.format(), colors.len());
    for row in grid.rows() {
        let line = row
            .iter()
            .map(|slot| render(slot, swatches))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{line}");
    }

    if colors.len() > grid.colors().len() {
        for color in &colors[grid.colors().len()..] {
            println!("{}", grid.format().format(*color));
        }
    }
}

fn render(slot: &Slot, swatches: bool) -> String {
    let label = if slot.filled { slot.label.as_str() } else { "-" };
    if swatches {
        let c = slot.color;
        format!("\x1b[48;2;{};{};{}m  \x1b[0m {label:<13}", c.red, c.green, c.blue)
    } else {
        format!("{label:<13}")
    }
}
