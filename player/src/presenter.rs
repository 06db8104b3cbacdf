use std::{
    fs,
    io::{ErrorKind, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use structures::{Art, Post};

use crate::{
    controls::Controls,
    display_mode::DisplayMode,
    errors::PresentError,
    pagination::{paginate, DEFAULT_WORDS_PER_PAGE},
};

/// Posts shown between two "keep going?" questions during a replay.
pub const BATCH_SIZE: usize = 5;

#[derive(Debug, PartialEq, Eq)]
pub enum DisplayOutcome {
    Shown,
    /// The color art file was missing or unreadable; the text was still shown.
    ArtUnavailable(PathBuf),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub shown: usize,
    pub art_unavailable: usize,
    pub skipped: usize,
    pub stopped_early: bool,
}

pub struct Presenter<W: Write, C: Controls> {
    out: W,
    controls: C,
    words_per_page: NonZeroUsize,
}

impl<W: Write, C: Controls> Presenter<W, C> {
    pub fn new(out: W, controls: C) -> Self {
        Self {
            out,
            controls,
            words_per_page: DEFAULT_WORDS_PER_PAGE,
        }
    }

    pub fn with_words_per_page(mut self, words_per_page: NonZeroUsize) -> Self {
        self.words_per_page = words_per_page;
        self
    }

    pub fn into_parts(self) -> (W, C) {
        (self.out, self.controls)
    }

    /// Shows one post. Only text-only works for every post; the art modes
    /// need a post carrying that kind of art, anything else is refused
    /// before writing.
    pub fn display(
        &mut self,
        post: &Post,
        mode: DisplayMode,
    ) -> Result<DisplayOutcome, PresentError> {
        let outcome = match (mode, &post.art) {
            (DisplayMode::TextOnly, _) => DisplayOutcome::Shown,
            (DisplayMode::CharacterArt, Art::Character(art)) => {
                writeln!(self.out, "{}", art)?;
                DisplayOutcome::Shown
            }
            (DisplayMode::ColorArt, Art::Color(path)) => self.write_color_art(path)?,
            _ => {
                return Err(PresentError::InvalidSelection {
                    mode,
                    kind: post.kind(),
                })
            }
        };

        self.write_text(&post.text)?;
        self.out.flush()?;

        Ok(outcome)
    }

    pub fn header(&mut self, post: &Post) -> Result<(), PresentError> {
        writeln!(self.out, "\nTimestamp: {}", post.timestamp)?;
        Ok(())
    }

    /// Numbered list of timestamps, counting from 1.
    pub fn index<'a, I>(&mut self, posts: I) -> Result<(), PresentError>
    where
        I: IntoIterator<Item = &'a Post>,
    {
        for (i, post) in posts.into_iter().enumerate() {
            writeln!(self.out, "{}. Timestamp: {}", i + 1, post.timestamp)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Shows posts in order. A post that cannot be shown in `mode` is
    /// reported and passed over. After every [`BATCH_SIZE`] posts the
    /// controls decide whether to go on.
    pub fn replay<'a, I>(
        &mut self,
        posts: I,
        mode: DisplayMode,
    ) -> Result<ReplaySummary, PresentError>
    where
        I: IntoIterator<Item = &'a Post>,
    {
        let mut summary = ReplaySummary::default();
        let mut posts = posts.into_iter().peekable();
        let mut processed = 0;

        while let Some(post) = posts.next() {
            processed += 1;
            self.header(post)?;

            match self.display(post, mode) {
                Ok(DisplayOutcome::Shown) => summary.shown += 1,
                Ok(DisplayOutcome::ArtUnavailable(_)) => summary.art_unavailable += 1,
                Err(PresentError::InvalidSelection { mode, kind }) => {
                    log::warn!(
                        "skipping {} post {}: not viewable as {}",
                        kind,
                        post.timestamp,
                        mode
                    );
                    writeln!(self.out, "This {} post has no {} to show.", kind, mode)?;
                    summary.skipped += 1;
                }
                Err(err) => return Err(err),
            }

            if processed % BATCH_SIZE == 0 && posts.peek().is_some() {
                self.out.flush()?;
                if !self.controls.keep_listing()? {
                    log::debug!("replay stopped after {} posts", processed);
                    summary.stopped_early = true;
                    break;
                }
            }
        }

        Ok(summary)
    }

    /// Art that cannot be read is reported in place of the art; only
    /// failures writing to the output are errors.
    fn write_color_art(&mut self, path: &Path) -> Result<DisplayOutcome, PresentError> {
        let art = match fs::read(path) {
            Ok(art) => art,
            Err(err) => {
                log::warn!("color art {} is unavailable: {}", path.display(), err);
                if err.kind() == ErrorKind::NotFound {
                    writeln!(self.out, "ANSI art file {} not found.", path.display())?;
                } else {
                    writeln!(self.out, "ANSI art file {} could not be read.", path.display())?;
                }
                return Ok(DisplayOutcome::ArtUnavailable(path.to_path_buf()));
            }
        };

        self.out.write_all(&art)?;
        Ok(DisplayOutcome::Shown)
    }

    fn write_text(&mut self, text: &str) -> Result<(), PresentError> {
        let mut pages = paginate(text, self.words_per_page).peekable();

        while let Some(page) = pages.next() {
            writeln!(self.out, "{}", page)?;
            if pages.peek().is_some() {
                self.out.flush()?;
                self.controls.wait_for_continue()?;
            }
        }

        Ok(())
    }
}

/// Picks post `number` (1-based) from a listing.
pub fn pick<'a>(posts: &[&'a Post], number: usize) -> Result<&'a Post, PresentError> {
    number
        .checked_sub(1)
        .and_then(|i| posts.get(i))
        .copied()
        .ok_or(PresentError::NoSuchPost {
            number,
            count: posts.len(),
        })
}
