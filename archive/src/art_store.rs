use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{constants::ART_FILE_EXTENSION, errors::ArtStoreError};

/// Color art is too large to inline in the archive, so it lives in its own
/// directory and posts refer to it by path.
pub struct ArtStore {
    directory: PathBuf,
}

impl ArtStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Writes `<directory>/<name>.txt`, replacing any earlier art of the same name.
    pub fn store(&self, content: &str, name: &str) -> Result<PathBuf, ArtStoreError> {
        fs::create_dir_all(&self.directory).map_err(|source| ArtStoreError::CreateDir {
            path: self.directory.clone(),
            source,
        })?;

        let path = self
            .directory
            .join(format!("{}.{}", name, ART_FILE_EXTENSION));

        fs::write(&path, content).map_err(|source| ArtStoreError::Write {
            path: path.clone(),
            source,
        })?;

        log::info!("stored color art at {}", path.display());

        Ok(path)
    }
}

/// The file name up to its first dot, so `cat.tar.png` becomes `cat`.
pub fn art_name_for(image_path: &Path) -> String {
    let file_name = image_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match file_name.split('.').next() {
        Some(prefix) if !prefix.is_empty() => prefix.to_string(),
        _ => image_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_directory_on_first_store() {
        let dir = tempdir().unwrap();
        let store = ArtStore::new(dir.path().join("ansi_images"));

        let path = store.store("art", "cat").unwrap();

        assert_eq!(path, dir.path().join("ansi_images").join("cat.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "art");
    }

    #[test]
    fn same_name_overwrites() {
        let dir = tempdir().unwrap();
        let store = ArtStore::new(dir.path());

        store.store("old", "cat").unwrap();
        let path = store.store("new", "cat").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn unwritable_directory_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("taken");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let err = ArtStore::new(&blocker).store("art", "cat").unwrap_err();

        assert!(matches!(err, ArtStoreError::CreateDir { .. }));
    }

    #[test]
    fn names_come_from_the_image_file() {
        assert_eq!(art_name_for(Path::new("photos/cat.png")), "cat");
        assert_eq!(art_name_for(Path::new("cat.tar.jpeg")), "cat");
        assert_eq!(art_name_for(Path::new(".hidden.png")), ".hidden");
        assert_eq!(art_name_for(Path::new("noext")), "noext");
    }
}
