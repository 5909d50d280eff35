//! Source-list coercion and media-kind detection.
//!
//! Hosts configure a segment's media as either a single URL or a list of
//! alternates. When no explicit kind is given, the kind is guessed from the
//! trailing file extension of the first recognizable source.

use serde::{Deserialize, Serialize};

/// Kind of media element the nested player is built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
}

impl MediaKind {
    /// Name of the kind as hosts spell it in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One source URL or a list of alternates.
///
/// Deserializes from either a plain string or an array of strings, the two
/// shapes host configuration commonly uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceList {
    One(String),
    Many(Vec<String>),
}

impl SourceList {
    /// Flatten into a plain list, dropping empty entries.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            SourceList::One(url) => {
                if url.is_empty() {
                    Vec::new()
                } else {
                    vec![url.clone()]
                }
            }
            SourceList::Many(urls) => urls.iter().filter(|u| !u.is_empty()).cloned().collect(),
        }
    }
}

impl Default for SourceList {
    fn default() -> Self {
        SourceList::Many(Vec::new())
    }
}

/// Guess the media kind from the first source with a recognized extension.
///
/// Returns `None` when no source carries a known extension, in which case
/// the segment cannot be built without an explicit `type`.
pub fn guess_media_kind(sources: &[String]) -> Option<MediaKind> {
    sources
        .iter()
        .filter_map(|src| trailing_extension(src))
        .find_map(|ext| kind_for_extension(&ext))
}

fn kind_for_extension(ext: &str) -> Option<MediaKind> {
    match ext {
        "webm" | "mp4" | "m4v" | "ogv" => Some(MediaKind::Video),
        "mp3" | "oga" | "ogg" | "aac" | "wav" => Some(MediaKind::Audio),
        _ => None,
    }
}

/// Extract a purely alphabetic extension from the very end of a URL.
///
/// A trailing query string or fragment defeats the match; such sources need
/// an explicit `type` in their options.
fn trailing_extension(url: &str) -> Option<String> {
    let (_, ext) = url.rsplit_once('.')?;
    if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(ext.to_ascii_lowercase())
    } else {
        None
    }
}
