//! Tracks and the opaque media handles that back them.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Unique identifier for a track. Ids start at 1.
pub type TrackId = u64;

/// Artist shown for every track added through an upload.
pub const UPLOADED_ARTIST: &str = "Uploaded";

/// Matches the last extension of a file name (`.mp3` in `song.mp3`).
static EXTENSION_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\.[^/.]+$").ok());

/// Opaque reference to playable or displayable content.
///
/// Created by whatever ingests files (an object URL, a path, a blob key).
/// The feed only stores it and hands it back to the playback surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaRef(String);

impl MediaRef {
    /// Wrap a handle produced by an ingestion surface.
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// The raw handle, for the surface that created it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaRef {
    fn from(handle: &str) -> Self {
        Self::new(handle)
    }
}

/// A single entry in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Registry id.
    pub id: TrackId,
    /// Display title.
    pub title: String,
    /// Display artist.
    pub artist: String,
    /// Handle passed to the playback surface.
    pub media: MediaRef,
    /// Number of times the track became current by scrolling in browse mode.
    pub listen_count: u64,
}

impl Track {
    /// Create a track with no listens.
    pub fn new(
        id: TrackId,
        title: impl Into<String>,
        artist: impl Into<String>,
        media: MediaRef,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            media,
            listen_count: 0,
        }
    }

    /// Build the track for a freshly uploaded file.
    pub fn uploaded(id: TrackId, display_name: &str, media: MediaRef) -> Self {
        Self::new(id, title_from_file_name(display_name), UPLOADED_ARTIST, media)
    }

    /// Whether this track came from an upload.
    #[must_use]
    pub fn is_uploaded(&self) -> bool {
        self.artist == UPLOADED_ARTIST
    }
}

/// Strip the final extension from a file name.
///
/// Only the last `.suffix` goes, and only when it contains no `/`:
/// `"song.mp3"` becomes `"song"`, `"live.set.flac"` becomes `"live.set"`,
/// `"README"` is unchanged.
#[must_use]
pub fn title_from_file_name(file_name: &str) -> String {
    match EXTENSION_RE.as_ref() {
        Some(re) => re.replace(file_name, "").into_owned(),
        None => file_name.to_string(),
    }
}
