use structures::{Art, Post};

use crate::{clock::Timestamper, errors::ArchiveError, record, PostArchive};

/// Keeps the encoded records in memory. Records go through the same line
/// encoding as the file archive.
#[derive(Default)]
pub struct MemoryArchive {
    lines: Vec<String>,
    timestamper: Timestamper,
}

impl MemoryArchive {
    pub fn new(timestamper: Timestamper) -> Self {
        Self {
            lines: Vec::new(),
            timestamper,
        }
    }

    /// Seeds the archive with raw record lines, as if read from disk.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            timestamper: Timestamper::default(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl PostArchive for MemoryArchive {
    fn append(&mut self, art: Art, text: &str) -> Result<Post, ArchiveError> {
        let post = Post::new(self.timestamper.next(), art, text);
        self.lines.push(record::encode(&post)?);
        Ok(post)
    }

    fn load(&self) -> Result<Vec<Post>, ArchiveError> {
        let mut posts = Vec::new();
        for (i, line) in self.lines.iter().enumerate() {
            if let Some(post) = record::decode_line(line, i + 1)? {
                posts.push(post);
            }
        }

        Ok(posts)
    }
}
