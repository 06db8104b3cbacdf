use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("could not decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RampError {
    #[error("a ramp needs at least one glyph")]
    Empty,
}
