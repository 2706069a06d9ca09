use once_cell::sync::Lazy;
use regex::Regex;

static VIDEO_ID: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(
        r"(?:youtube\.com/watch\?(?:[^#\s]*&)?v=|youtu\.be/|youtube(?:-nocookie)?\.com/(?:embed|shorts)/)([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
    )
    .map_err(|e| log::error!("video id pattern failed to compile: {}", e))
    .ok()
});

/// Pulls the 11-character video id out of a YouTube link.
pub fn extract_video_id(url: &str) -> Option<String> {
    let pattern = VIDEO_ID.as_ref()?;
    pattern
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

pub fn embed_url(video_id: &str) -> String {
    format!(
        "https://www.youtube-nocookie.com/embed/{}?autoplay=1&rel=0",
        video_id
    )
}

/// Embeddable player URL for a link, if it is a recognised video link.
pub fn embed_url_for(url: &str) -> Option<String> {
    extract_video_id(url).map(|id| embed_url(&id))
}
