use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

#[macro_use]
extern crate serde_derive;

/// Local ISO-8601 with a fixed six-digit fraction, so string order is time order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Ascii,
    Ansi,
    Text,
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PostKind::Ascii => "ascii",
            PostKind::Ansi => "ansi",
            PostKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// The art payload of a post. Character art travels inline, color art is
/// referenced by the path of the file it was stored in.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Art {
    Character(String),
    Color(PathBuf),
    None,
}

impl Art {
    pub fn kind(&self) -> PostKind {
        match self {
            Art::Character(_) => PostKind::Ascii,
            Art::Color(_) => PostKind::Ansi,
            Art::None => PostKind::Text,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
#[serde(from = "StoredPost")]
pub struct Post {
    pub timestamp: String,
    pub art: Art,
    pub text: String,
}

impl Post {
    pub fn new(timestamp: String, art: Art, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            art,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> PostKind {
        self.art.kind()
    }

    pub fn color_art_path(&self) -> Option<&Path> {
        match &self.art {
            Art::Color(path) => Some(path),
            _ => None,
        }
    }
}

/// A post as it is laid out in one archive line.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct StoredPost {
    pub timestamp: String,
    pub art: String,
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub text: String,
}

impl From<StoredPost> for Post {
    fn from(stored: StoredPost) -> Self {
        let art = match stored.kind {
            PostKind::Ascii => Art::Character(stored.art),
            PostKind::Ansi => Art::Color(PathBuf::from(stored.art)),
            // text posts never carry art, whatever the line says
            PostKind::Text => Art::None,
        };

        Post {
            timestamp: stored.timestamp,
            art,
            text: stored.text,
        }
    }
}

/// A color art path that cannot be written to a line as-is.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NonUtf8ArtPath(pub PathBuf);

impl fmt::Display for NonUtf8ArtPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color art path {} is not valid UTF-8", self.0.display())
    }
}

impl std::error::Error for NonUtf8ArtPath {}

impl TryFrom<&Post> for StoredPost {
    type Error = NonUtf8ArtPath;

    fn try_from(post: &Post) -> Result<Self, Self::Error> {
        let art = match &post.art {
            Art::Character(art) => art.clone(),
            Art::Color(path) => path
                .to_str()
                .ok_or_else(|| NonUtf8ArtPath(path.clone()))?
                .to_string(),
            Art::None => String::new(),
        };

        Ok(StoredPost {
            timestamp: post.timestamp.clone(),
            art,
            kind: post.kind(),
            text: post.text.clone(),
        })
    }
}

// A lossy path would no longer resolve when read back, so refuse it instead.
impl serde::Serialize for Post {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let stored =
            StoredPost::try_from(self).map_err(<S::Error as serde::ser::Error>::custom)?;
        serde::Serialize::serialize(&stored, serializer)
    }
}
