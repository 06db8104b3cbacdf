use std::path::Path;

use image::{imageops::FilterType, DynamicImage, GrayImage, RgbImage};

use crate::errors::SourceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMode {
    Luminance,
    Rgb,
}

/// A fixed-size grid of pixels, ready to be turned into art.
#[derive(Debug, Clone)]
pub enum PixelGrid {
    Luminance(GrayImage),
    Rgb(RgbImage),
}

impl PixelGrid {
    pub fn width(&self) -> u32 {
        match self {
            PixelGrid::Luminance(grid) => grid.width(),
            PixelGrid::Rgb(grid) => grid.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            PixelGrid::Luminance(grid) => grid.height(),
            PixelGrid::Rgb(grid) => grid.height(),
        }
    }
}

pub fn decode(path: &Path) -> Result<DynamicImage, SourceError> {
    let image = image::open(path).map_err(|source| SourceError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(image)
}

/// Resamples to exactly `width`x`height`, ignoring the source aspect ratio.
/// Luminance is taken before resampling.
pub fn resample(
    image: &DynamicImage,
    width: u32,
    height: u32,
    mode: GridMode,
) -> Result<PixelGrid, SourceError> {
    if width == 0 || height == 0 {
        return Err(SourceError::InvalidDimensions { width, height });
    }

    let grid = match mode {
        GridMode::Luminance => PixelGrid::Luminance(
            image
                .grayscale()
                .resize_exact(width, height, FilterType::CatmullRom)
                .to_luma8(),
        ),
        GridMode::Rgb => PixelGrid::Rgb(
            image
                .resize_exact(width, height, FilterType::CatmullRom)
                .to_rgb8(),
        ),
    };

    Ok(grid)
}

pub fn decode_and_resize(
    path: &Path,
    width: u32,
    height: u32,
    mode: GridMode,
) -> Result<PixelGrid, SourceError> {
    if width == 0 || height == 0 {
        return Err(SourceError::InvalidDimensions { width, height });
    }

    resample(&decode(path)?, width, height, mode)
}
