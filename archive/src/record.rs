use structures::Post;

use crate::errors::ArchiveError;

/// One post as one line, without the trailing newline.
pub fn encode(post: &Post) -> Result<String, ArchiveError> {
    serde_json::to_string(post).map_err(ArchiveError::Encode)
}

/// Blank lines are not records and yield `None`. `line` is 1-based and only
/// used for error reporting.
pub fn decode_line(record: &str, line: usize) -> Result<Option<Post>, ArchiveError> {
    if record.trim().is_empty() {
        return Ok(None);
    }

    match serde_json::from_str(record) {
        Ok(post) => Ok(Some(post)),
        Err(source) => {
            log::error!("archive line {} is not a valid post", line);
            Err(ArchiveError::MalformedRecord { line, source })
        }
    }
}
