mod art_store;
mod clock;
pub mod constants;
mod errors;
mod file_archive;
mod memory_archive;
mod queries;
mod record;

use structures::{Art, Post};

pub use crate::art_store::{art_name_for, ArtStore};
pub use crate::clock::{Clock, LocalClock, Timestamper};
pub use crate::errors::{ArchiveError, ArtStoreError, QueryError};
pub use crate::file_archive::FileArchive;
pub use crate::memory_archive::MemoryArchive;
pub use crate::queries::{find_by_date, most_recent};

/// An append-only log of posts.
pub trait PostArchive {
    /// Stamps the current time and appends the post as a new record.
    /// Earlier records are never touched.
    fn append(&mut self, art: Art, text: &str) -> Result<Post, ArchiveError>;

    /// Every post, in the order they were appended.
    fn load(&self) -> Result<Vec<Post>, ArchiveError>;
}
