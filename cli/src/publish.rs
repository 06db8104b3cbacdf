use std::{
    fs,
    path::{Path, PathBuf},
};

use archive::{art_name_for, ArchiveError, ArtStore, ArtStoreError, PostArchive};
use renderer::{render_file, RenderConfig, SourceError};
use structures::{Art, Post};

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error(transparent)]
    Image(#[from] SourceError),
    #[error(transparent)]
    ArtStore(#[from] ArtStoreError),
    #[error(transparent)]
    Archive(#[from] ArchiveError),
    #[error("could not read text file {path}: {source}")]
    ReadText {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What a submission left behind.
#[derive(Debug)]
pub struct Published {
    pub posts: Vec<Post>,
    pub character_art: Option<String>,
    pub color_art_path: Option<PathBuf>,
    pub text: String,
}

/// An image becomes an `ascii` post followed by an `ansi` post, both carrying
/// the text. Without an image a single `text` post is written.
pub fn publish<A: PostArchive>(
    archive: &mut A,
    store: &ArtStore,
    config: &RenderConfig,
    image: Option<&Path>,
    text_file: Option<&Path>,
) -> Result<Published, PublishError> {
    let text = match text_file {
        Some(path) => fs::read_to_string(path).map_err(|source| PublishError::ReadText {
            path: path.to_path_buf(),
            source,
        })?,
        None => String::new(),
    };

    let image = match image {
        Some(image) => image,
        None => {
            let post = archive.append(Art::None, &text)?;
            return Ok(Published {
                posts: vec![post],
                character_art: None,
                color_art_path: None,
                text,
            });
        }
    };

    let art = render_file(image, config)?;
    let color_art_path = store.store(&art.color, &art_name_for(image))?;

    let ascii = archive.append(Art::Character(art.character.clone()), &text)?;
    let ansi = archive.append(Art::Color(color_art_path.clone()), &text)?;

    log::info!("published {} as {} and {}", image.display(), ascii.timestamp, ansi.timestamp);

    Ok(Published {
        posts: vec![ascii, ansi],
        character_art: Some(art.character),
        color_art_path: Some(color_art_path),
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use archive::MemoryArchive;
    use image::{Rgb, RgbImage};
    use structures::PostKind;
    use tempfile::tempdir;

    #[test]
    fn image_with_text_makes_two_posts() {
        let dir = tempdir().unwrap();
        let image = dir.path().join("sunset.photo.png");
        RgbImage::from_pixel(120, 90, Rgb([200, 100, 0]))
            .save(&image)
            .unwrap();
        let text_file = dir.path().join("post.txt");
        fs::write(&text_file, "golden hour").unwrap();
        let store = ArtStore::new(dir.path().join("ansi_images"));
        let mut archive = MemoryArchive::default();

        let published = publish(
            &mut archive,
            &store,
            &RenderConfig::default(),
            Some(&image),
            Some(&text_file),
        )
        .unwrap();

        let posts = archive.load().unwrap();
        assert_eq!(posts, published.posts);
        assert_eq!(
            posts.iter().map(Post::kind).collect::<Vec<_>>(),
            vec![PostKind::Ascii, PostKind::Ansi]
        );
        assert!(posts.iter().all(|post| post.text == "golden hour"));
        assert!(posts[0].timestamp <= posts[1].timestamp);

        let stored = posts[1].color_art_path().unwrap();
        assert_eq!(stored, dir.path().join("ansi_images").join("sunset.txt"));
        assert_eq!(fs::read_to_string(stored).unwrap().matches('\n').count(), 30);
        assert_eq!(published.character_art.unwrap().lines().count(), 30);
    }

    #[test]
    fn text_only_makes_one_post() {
        let dir = tempdir().unwrap();
        let text_file = dir.path().join("post.txt");
        fs::write(&text_file, "just words").unwrap();
        let store = ArtStore::new(dir.path().join("ansi_images"));
        let mut archive = MemoryArchive::default();

        publish(&mut archive, &store, &RenderConfig::default(), None, Some(&text_file)).unwrap();

        let posts = archive.load().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].kind(), PostKind::Text);
        assert_eq!(posts[0].text, "just words");
        assert!(!store.directory().exists());
    }

    #[test]
    fn bad_image_leaves_archive_untouched() {
        let dir = tempdir().unwrap();
        let image = dir.path().join("broken.png");
        fs::write(&image, "not an image").unwrap();
        let store = ArtStore::new(dir.path().join("ansi_images"));
        let mut archive = MemoryArchive::default();

        let err = publish(&mut archive, &store, &RenderConfig::default(), Some(&image), None)
            .unwrap_err();

        assert!(matches!(err, PublishError::Image(_)));
        assert!(archive.lines().is_empty());
    }

    #[test]
    fn missing_text_file_stores_nothing() {
        let dir = tempdir().unwrap();
        let store = ArtStore::new(dir.path().join("ansi_images"));
        let mut archive = MemoryArchive::default();

        let err = publish(
            &mut archive,
            &store,
            &RenderConfig::default(),
            None,
            Some(&dir.path().join("missing.txt")),
        )
        .unwrap_err();

        assert!(matches!(err, PublishError::ReadText { .. }));
        assert!(archive.lines().is_empty());
    }
}
