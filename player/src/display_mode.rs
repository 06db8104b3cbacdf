use std::{fmt, str::FromStr};

use crate::errors::UnknownDisplayMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    CharacterArt,
    ColorArt,
    TextOnly,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DisplayMode::CharacterArt => "character art",
            DisplayMode::ColorArt => "color art",
            DisplayMode::TextOnly => "text only",
        };
        f.write_str(name)
    }
}

impl FromStr for DisplayMode {
    type Err = UnknownDisplayMode;

    /// Accepts the single-letter menu codes as well as the long names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "ascii" | "character-art" => Ok(DisplayMode::CharacterArt),
            "n" | "ansi" | "color-art" => Ok(DisplayMode::ColorArt),
            "t" | "text" | "text-only" => Ok(DisplayMode::TextOnly),
            _ => Err(UnknownDisplayMode(s.to_string())),
        }
    }
}
