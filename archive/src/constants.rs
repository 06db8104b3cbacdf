pub const DEFAULT_ARCHIVE_PATH: &str = "posts.json";
pub const DEFAULT_ART_DIR: &str = "ansi_images";
pub const ART_FILE_EXTENSION: &str = "txt";
