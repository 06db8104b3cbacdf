use std::io;

/// Signals from whoever is watching the replay.
pub trait Controls {
    /// Blocks until the reader asks for the next page of text.
    fn wait_for_continue(&mut self) -> io::Result<()>;

    /// Asked between batches of posts; `false` ends the replay.
    fn keep_listing(&mut self) -> io::Result<bool>;
}
