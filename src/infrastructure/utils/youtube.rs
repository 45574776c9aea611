use once_cell::sync::Lazy;
use regex::Regex;

static VIDEO_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*)")
        .expect("video id pattern is valid")
});

/// Pulls the 11-character video id out of the common YouTube URL shapes
/// (watch, share, embed). Returns `None` for anything else.
pub fn extract_video_id(url: &str) -> Option<&str> {
    let id = VIDEO_ID_PATTERN.captures(url)?.get(1)?.as_str();
    (id.len() == 11).then_some(id)
}

pub fn thumbnail_url(url: &str) -> Option<String> {
    extract_video_id(url)
        .map(|id| format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg"))
}
