use image::{GrayImage, RgbImage};

use crate::ramp::Ramp;

pub const COLOR_CELL_PREFIX: &str = "\x1b[48;2;";
pub const RESET: &str = "\x1b[0m";

/// Maps every pixel to a ramp glyph. Rows are joined with `\n`, with no
/// trailing newline.
pub fn character_art(grid: &GrayImage, ramp: &Ramp) -> String {
    let mut art = String::with_capacity(((grid.width() + 1) * grid.height()) as usize);

    for (y, row) in grid.rows().enumerate() {
        if y > 0 {
            art.push('\n');
        }
        art.extend(row.map(|pixel| ramp.glyph_for(pixel.0[0])));
    }

    art
}

/// One truecolor background cell per pixel; every row ends with `\n`.
pub fn color_art(grid: &RgbImage) -> String {
    let mut art = String::new();

    for row in grid.rows() {
        for pixel in row {
            let [r, g, b] = pixel.0;
            art.push_str(&format!("{}{};{};{}m {}", COLOR_CELL_PREFIX, r, g, b, RESET));
        }
        art.push('\n');
    }

    art
}
