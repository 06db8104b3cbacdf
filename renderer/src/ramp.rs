use crate::errors::RampError;

pub const DEFAULT_RAMP: &str = "@%#*+=-:. ";

/// Glyphs ordered from darkest (densest) to lightest (sparsest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp {
    glyphs: Vec<char>,
}

impl Ramp {
    pub fn new(glyphs: &str) -> Result<Self, RampError> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(RampError::Empty);
        }

        Ok(Self { glyphs })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// `floor(v / (256 / len))`, clamped to the last glyph so that 255 never
    /// indexes past the ramp.
    pub fn index_for(&self, luminance: u8) -> usize {
        let index = luminance as usize * self.glyphs.len() / 256;
        index.min(self.glyphs.len() - 1)
    }

    pub fn glyph_for(&self, luminance: u8) -> char {
        self.glyphs[self.index_for(luminance)]
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_RAMP.chars().collect(),
        }
    }
}
