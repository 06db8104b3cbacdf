use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("could not append to archive {path}: {source}")]
    Append {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not read archive {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        source: serde_json::Error,
    },
    #[error("could not encode post: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ArtStoreError {
    #[error("could not create art directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write art file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("no posts to choose from")]
    EmptyCollection,
}
