//! Capability traits for everything the feed does not do itself.
//!
//! Playback, file picking and rendering belong to the host. The feed reaches
//! them only through these traits, which allows for mocking in tests.

use serde::{Deserialize, Serialize};

use crate::feed::FeedSnapshot;
use crate::track::MediaRef;

/// Kind of file a picker should offer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Audio files, for uploads.
    Audio,
    /// Images, for the profile picture.
    Image,
}

impl FileKind {
    /// MIME filter a browser-style picker would use.
    #[must_use]
    pub const fn accept_filter(self) -> &'static str {
        match self {
            Self::Audio => "audio/*",
            Self::Image => "image/*",
        }
    }
}

/// A file the user picked, already turned into a media handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    /// File name as the user saw it, extension included.
    pub display_name: String,
    /// Handle for the picked content.
    pub media: MediaRef,
}

impl PickedFile {
    /// Create a picked file.
    pub fn new(display_name: impl Into<String>, media: MediaRef) -> Self {
        Self {
            display_name: display_name.into(),
            media,
        }
    }
}

/// Plays audio. Fire-and-forget: the feed does not track position or end.
#[cfg_attr(test, mockall::automock)]
pub trait MediaPlaybackSurface {
    /// Start playing the given media.
    fn play(&mut self, media: &MediaRef);
}

/// Lets the user choose a file.
#[cfg_attr(test, mockall::automock)]
pub trait FileIngestionSurface {
    /// Ask for a file of the given kind. `None` means the user cancelled.
    fn pick_file(&mut self, kind: FileKind) -> Option<PickedFile>;
}

/// Draws the feed. Receives a fresh snapshot after every change.
#[cfg_attr(test, mockall::automock)]
pub trait ViewRenderer {
    /// Render the snapshot.
    fn render(&mut self, snapshot: &FeedSnapshot);
}
