use std::{
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, ErrorKind, Write},
    path::{Path, PathBuf},
};

use structures::{Art, Post};

use crate::{clock::Timestamper, errors::ArchiveError, record, PostArchive};

/// Line-delimited JSON archive on disk. The file is only created by the
/// first append; until then the archive is simply empty.
pub struct FileArchive {
    path: PathBuf,
    timestamper: Timestamper,
}

impl FileArchive {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_timestamper(path, Timestamper::default())
    }

    pub fn with_timestamper(path: impl Into<PathBuf>, timestamper: Timestamper) -> Self {
        Self {
            path: path.into(),
            timestamper,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PostArchive for FileArchive {
    fn append(&mut self, art: Art, text: &str) -> Result<Post, ArchiveError> {
        let post = Post::new(self.timestamper.next(), art, text);

        let mut line = record::encode(&post)?;
        line.push('\n');

        let append_error = |source| ArchiveError::Append {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(append_error)?;
        // a single write so a record is either fully there or not at all
        file.write_all(line.as_bytes()).map_err(append_error)?;

        log::debug!(
            "appended {} post at {} to {}",
            post.kind(),
            post.timestamp,
            self.path.display()
        );

        Ok(post)
    }

    fn load(&self) -> Result<Vec<Post>, ArchiveError> {
        let read_error = |source| ArchiveError::Read {
            path: self.path.clone(),
            source,
        };

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("no archive at {} yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(read_error(err)),
        };

        let mut posts = Vec::new();
        for (i, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(read_error)?;
            if let Some(post) = record::decode_line(&line, i + 1)? {
                posts.push(post);
            }
        }

        log::debug!("loaded {} posts from {}", posts.len(), self.path.display());

        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use std::{fs, path::PathBuf};
    use structures::PostKind;
    use tempfile::tempdir;

    fn ticking_clock() -> impl FnMut() -> NaiveDateTime {
        let mut now = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        move || {
            now = now + Duration::seconds(1);
            now
        }
    }

    #[test]
    fn missing_file_is_an_empty_archive() {
        let dir = tempdir().unwrap();
        let archive = FileArchive::open(dir.path().join("posts.json"));

        assert!(archive.load().unwrap().is_empty());
        assert!(!archive.path().exists());
    }

    #[test]
    fn append_then_load() {
        let dir = tempdir().unwrap();
        let mut archive = FileArchive::with_timestamper(
            dir.path().join("posts.json"),
            Timestamper::new(ticking_clock()),
        );

        archive
            .append(Art::Character("@@".to_string()), "first")
            .unwrap();
        archive
            .append(Art::Color(PathBuf::from("ansi_images/cat.txt")), "first")
            .unwrap();
        archive.append(Art::None, "Y").unwrap();

        let posts = archive.load().unwrap();

        assert_eq!(posts.len(), 3);
        assert_eq!(
            posts.iter().map(Post::kind).collect::<Vec<_>>(),
            vec![PostKind::Ascii, PostKind::Ansi, PostKind::Text]
        );
        assert_eq!(posts[0].timestamp, "2024-03-01T10:00:01.000000");
        assert_eq!(posts[2].timestamp, "2024-03-01T10:00:03.000000");
        assert_eq!(posts[2].text, "Y");
        assert_eq!(posts[2].art, Art::None);
    }

    #[test]
    fn append_leaves_earlier_lines_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        let mut archive = FileArchive::open(&path);

        archive.append(Art::None, "one").unwrap();
        let before = fs::read_to_string(&path).unwrap();
        archive.append(Art::None, "two").unwrap();
        let after = fs::read_to_string(&path).unwrap();

        assert!(after.starts_with(&before));
        assert_eq!(after.lines().count(), 2);
        assert!(after.ends_with('\n'));
    }

    #[test]
    fn reads_lines_written_by_other_tools() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(
            &path,
            concat!(
                r#"{"timestamp": "2024-01-01T10:00:00", "art": "", "type": "text", "text": "hi"}"#,
                "\n\n",
                r#"{"timestamp": "2024-01-02T09:00:00", "art": "ansi_images/a.txt", "type": "ansi", "text": ""}"#,
                "\n",
            ),
        )
        .unwrap();

        let posts = FileArchive::open(&path).load().unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].color_art_path(), Some(Path::new("ansi_images/a.txt")));
    }

    #[test]
    fn malformed_line_fails_the_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(
            &path,
            concat!(
                r#"{"timestamp": "2024-01-01T10:00:00", "art": "", "type": "text", "text": "hi"}"#,
                "\n",
                "not json\n",
            ),
        )
        .unwrap();

        let err = FileArchive::open(&path).load().unwrap_err();

        assert!(matches!(err, ArchiveError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn append_to_unwritable_location_fails() {
        let dir = tempdir().unwrap();
        let mut archive = FileArchive::open(dir.path().join("missing").join("posts.json"));

        let err = archive.append(Art::None, "lost").unwrap_err();

        assert!(matches!(err, ArchiveError::Append { .. }));
    }
}
