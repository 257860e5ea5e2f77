//! Path utilities for deriving file type hints from media links.
//!
//! Links are treated as plain strings: the "extension" is whatever follows
//! the final `.`, query string included. Hosts rely on the browser sniffing
//! the real type when the hint is wrong.

/// Substring after the final `.` of a link, or the whole link if it has none.
///
/// # Examples
///
/// ```
/// use hero_video_common::paths::link_extension;
///
/// assert_eq!(link_extension("https://cdn.example.com/clip.mp4"), "mp4");
/// assert_eq!(link_extension("/media/clip.webm?v=2"), "webm?v=2");
/// ```
pub fn link_extension(link: &str) -> &str {
    link.rsplit('.').next().unwrap_or(link)
}

/// MIME type hint for a native `<source>` element.
///
/// # Examples
///
/// ```
/// use hero_video_common::paths::mime_type_for;
///
/// assert_eq!(mime_type_for("https://cdn.example.com/clip.mp4"), "video/mp4");
/// ```
#[must_use]
pub fn mime_type_for(link: &str) -> String {
    format!("video/{}", link_extension(link))
}
