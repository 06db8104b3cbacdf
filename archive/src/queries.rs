use structures::Post;

use crate::errors::QueryError;

/// Literal prefix match on the timestamp string; `date` is expected as
/// `YYYY-MM-DD` but nothing is parsed.
pub fn find_by_date<'a>(posts: &'a [Post], date: &str) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| post.timestamp.starts_with(date))
        .collect()
}

/// The post with the greatest timestamp. ISO-8601 strings sort
/// chronologically, so no parsing is needed. Ties go to the earlier post.
pub fn most_recent(posts: &[Post]) -> Result<&Post, QueryError> {
    posts
        .iter()
        .reduce(|latest, post| {
            if post.timestamp > latest.timestamp {
                post
            } else {
                latest
            }
        })
        .ok_or(QueryError::EmptyCollection)
}
