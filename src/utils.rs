//! Utility functions for path manipulation

use crate::error::{Error, Result};

/// Derive the local file name for an episode from its URL
///
/// The name is everything after the last `/`, i.e. the base name plus
/// extension of the URL path. Query strings and fragments are kept as part of
/// the name, so `https://example.com/ep1.mp3?x=1` yields `ep1.mp3?x=1`.
///
/// # Errors
///
/// Returns [`Error::InvalidEpisodeUrl`] when the URL ends in `/` or the last
/// segment is `.` or `..`, since none of those names a file.
///
/// # Examples
///
/// ```
/// use podcast_dl::utils::episode_file_name;
///
/// let name = episode_file_name("https://example.com/shows/ep1.mp3").unwrap();
/// assert_eq!(name, "ep1.mp3");
/// ```
pub fn episode_file_name(url: &str) -> Result<String> {
    let name = url.rsplit('/').next().unwrap_or(url);

    match name {
        "" | "." | ".." => Err(Error::InvalidEpisodeUrl(url.to_string())),
        _ => Ok(name.to_string()),
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_file_name() {
        assert_eq!(
            episode_file_name("https://example.com/ep1.mp3").unwrap(),
            "ep1.mp3"
        );
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(
            episode_file_name("https://cdn.example.com/a/b/c/Episode%2042.m4a").unwrap(),
            "Episode%2042.m4a"
        );
    }

    #[test]
    fn test_query_string_is_kept() {
        // Query parameters are part of the last segment and are not stripped
        assert_eq!(
            episode_file_name("https://example.com/path/ep1.mp3?x=1").unwrap(),
            "ep1.mp3?x=1"
        );
    }

    #[test]
    fn test_query_with_slash_splits_inside_query() {
        // Splitting is on the raw string, so a '/' inside the query wins
        assert_eq!(
            episode_file_name("https://example.com/ep1.mp3?redirect=/a/b.mp3").unwrap(),
            "b.mp3"
        );
    }

    #[test]
    fn test_multiple_dots() {
        assert_eq!(
            episode_file_name("https://example.com/show.2024.01.ep1.mp3").unwrap(),
            "show.2024.01.ep1.mp3"
        );
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(
            episode_file_name("https://example.com/episodes/latest").unwrap(),
            "latest"
        );
    }

    #[test]
    fn test_trailing_slash_rejected() {
        let result = episode_file_name("https://example.com/episodes/");
        match result {
            Err(Error::InvalidEpisodeUrl(url)) => {
                assert_eq!(url, "https://example.com/episodes/");
            }
            other => panic!("Expected InvalidEpisodeUrl error, got {other:?}"),
        }
    }

    #[test]
    fn test_dot_segments_rejected() {
        assert!(episode_file_name("https://example.com/a/.").is_err());
        assert!(episode_file_name("https://example.com/a/..").is_err());
    }

    #[test]
    fn test_no_slash_at_all() {
        assert_eq!(episode_file_name("ep1.mp3").unwrap(), "ep1.mp3");
    }
}
