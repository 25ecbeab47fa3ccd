//! User intents and the reducer that applies them.
//!
//! The view layer never mutates [`FeedState`] directly; it builds an
//! [`Intent`] and hands it to [`FeedState::apply`] (usually through a
//! [`FeedSession`](crate::session::FeedSession)). Intents are applied in the
//! order they are dispatched.

use serde::{Deserialize, Serialize};

use crate::feed::{FeedState, FollowState, ViewMode};
use crate::theme::Theme;
use crate::track::{MediaRef, Track, TrackId};

/// Something the user asked the feed to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Intent {
    /// Scroll to the next track.
    Advance,
    /// Like or unlike a specific track.
    ToggleLike(TrackId),
    /// Like or unlike the track being shown.
    ToggleLikeCurrent,
    /// Follow or unfollow.
    ToggleFollow,
    /// Switch panels.
    SetViewMode(ViewMode),
    /// Sidebar liked/all toggle.
    ToggleLikedView,
    /// A file picked for upload is ready.
    UploadCompleted {
        /// File name as the user saw it.
        display_name: String,
        /// Handle produced by the ingestion surface.
        media: MediaRef,
    },
    /// A new profile picture was picked.
    ProfileImageSelected(MediaRef),
    /// Choose a theme.
    SetTheme(Theme),
    /// Send an emoji to the chat panel.
    PostChat(String),
}

/// What applying an intent produced, beyond the state change itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// State changed; nothing further to report.
    Updated,
    /// Nothing changed (advance or like on an empty playlist).
    Unchanged,
    /// The cursor moved to this index.
    Advanced(usize),
    /// A track's like status is now this value.
    Liked {
        /// Track that was toggled.
        track_id: TrackId,
        /// New status.
        liked: bool,
    },
    /// Follow button state after the toggle.
    Followed(FollowState),
    /// Panel after the liked/all toggle.
    ViewChanged(ViewMode),
    /// The upload added this track.
    Uploaded(Track),
}

impl FeedState {
    /// Apply one intent.
    pub fn apply(&mut self, intent: Intent) -> Applied {
        match intent {
            Intent::Advance => self.advance().map_or(Applied::Unchanged, Applied::Advanced),
            Intent::ToggleLike(track_id) => Applied::Liked {
                track_id,
                liked: self.toggle_like(track_id),
            },
            Intent::ToggleLikeCurrent => {
                let Some(track_id) = self.current_track().map(|t| t.id) else {
                    return Applied::Unchanged;
                };
                Applied::Liked {
                    track_id,
                    liked: self.toggle_like(track_id),
                }
            }
            Intent::ToggleFollow => Applied::Followed(self.toggle_follow()),
            Intent::SetViewMode(mode) => {
                self.set_view_mode(mode);
                Applied::ViewChanged(mode)
            }
            Intent::ToggleLikedView => Applied::ViewChanged(self.toggle_liked_view()),
            Intent::UploadCompleted {
                display_name,
                media,
            } => Applied::Uploaded(self.ingest_upload(&display_name, media)),
            Intent::ProfileImageSelected(media) => {
                self.set_profile_image(media);
                Applied::Updated
            }
            Intent::SetTheme(theme) => {
                self.set_theme(theme);
                Applied::Updated
            }
            Intent::PostChat(emoji) => {
                self.post_chat(emoji);
                Applied::Updated
            }
        }
    }

    /// Apply intents in order.
    pub fn apply_all(&mut self, intents: impl IntoIterator<Item = Intent>) -> Vec<Applied> {
        intents.into_iter().map(|intent| self.apply(intent)).collect()
    }
}
