use structures::PostKind;

use crate::display_mode::DisplayMode;

#[derive(Debug, thiserror::Error)]
pub enum PresentError {
    #[error("cannot show a {kind} post as {mode}")]
    InvalidSelection { mode: DisplayMode, kind: PostKind },
    #[error("no post number {number}, there are {count}")]
    NoSuchPost { number: usize, count: usize },
    #[error("could not write to output: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown display mode {0:?}, expected A (ASCII), N (ANSI) or T (text only)")]
pub struct UnknownDisplayMode(pub String);
