//! Resolve arbitrary user-supplied YouTube links into embeddable URLs.

use std::sync::OnceLock;

use regex::Regex;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// YouTube video ids are exactly 11 characters.
const VIDEO_ID_LEN: usize = 11;

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:youtu\.be/|/v/|/u/\w+/|/embed/|[?&]v=)([^#&?/\s]+)")
            .expect("video id pattern compiles")
    })
}

/// Extract the video id from any of the known YouTube URL shapes
/// (`youtu.be/`, `/v/`, `/u/<user>/`, `/embed/`, `?v=`, `&v=`) and
/// return the canonical embed URL. Returns `None` when the input does
/// not match or the captured id is not exactly 11 characters; callers
/// render a "processing" placeholder in that case.
pub fn embed_url(input: &str) -> Option<String> {
    let captures = id_pattern().captures(input)?;
    let id = captures.get(1)?.as_str();
    if id.len() != VIDEO_ID_LEN {
        return None;
    }
    Some(format!("{EMBED_BASE}{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link() {
        assert_eq!(
            embed_url("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_watch_link() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_watch_link_with_extra_params() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?list=PL123&v=dQw4w9WgXcQ&t=42").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_embed_link_is_canonicalized() {
        assert_eq!(
            embed_url("https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_v_and_user_paths() {
        assert_eq!(
            embed_url("https://www.youtube.com/v/dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
        assert_eq!(
            embed_url("https://www.youtube.com/u/creator/dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_not_a_url() {
        assert_eq!(embed_url("not a url"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(embed_url(""), None);
    }

    #[test]
    fn test_wrong_id_length_is_rejected() {
        assert_eq!(embed_url("https://youtu.be/shortid"), None);
        assert_eq!(embed_url("https://youtu.be/dQw4w9WgXcQQQ"), None);
    }
}
