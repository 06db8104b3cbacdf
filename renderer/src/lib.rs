use std::path::Path;

mod art;
mod errors;
mod ramp;
mod source;

pub use crate::art::{character_art, color_art, COLOR_CELL_PREFIX, RESET};
pub use crate::errors::{RampError, SourceError};
pub use crate::ramp::{Ramp, DEFAULT_RAMP};
pub use crate::source::{decode, decode_and_resize, resample, GridMode, PixelGrid};

pub const DEFAULT_WIDTH: u32 = 80;
pub const DEFAULT_HEIGHT: u32 = 30;

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub ramp: Ramp,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            ramp: Ramp::default(),
        }
    }
}

/// Both renderings of one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArt {
    pub character: String,
    pub color: String,
}

pub fn render(grid: &PixelGrid, config: &RenderConfig) -> String {
    match grid {
        PixelGrid::Luminance(grid) => character_art(grid, &config.ramp),
        PixelGrid::Rgb(grid) => color_art(grid),
    }
}

/// Decodes `path` once and renders it both ways at the configured size.
pub fn render_file(path: &Path, config: &RenderConfig) -> Result<RenderedArt, SourceError> {
    let image = decode(path)?;

    let luminance = resample(&image, config.width, config.height, GridMode::Luminance)?;
    let rgb = resample(&image, config.width, config.height, GridMode::Rgb)?;

    Ok(RenderedArt {
        character: render(&luminance, config),
        color: render(&rgb, config),
    })
}
