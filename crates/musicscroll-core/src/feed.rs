//! Feed state management.
//!
//! [`FeedState`] owns everything the feed widget shows: the track registry,
//! the cursor into the active playlist, likes, uploads, the follow counter,
//! the chat log, the theme and the profile image. Every operation is a
//! synchronous, total state transition; the view layer renders from
//! [`FeedState::snapshot`].
//!
//! The active playlist is the liked subset in [`ViewMode::Liked`] and the
//! whole registry otherwise. The stored cursor is always read modulo the
//! active length, so shrinking the liked list never produces an
//! out-of-range read, and an empty active playlist reads as `None`.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::FeedConfig;
use crate::error::Error;
use crate::theme::{Theme, ThemePalette};
use crate::track::{MediaRef, Track, TrackId};

/// Which panel the feed is showing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Scroll through every track (default).
    #[default]
    Browse,
    /// Scroll through liked tracks only.
    Liked,
    /// Profile panel with counters and uploads.
    Profile,
    /// Theme settings.
    Settings,
}

impl ViewMode {
    /// Whether this mode selects which playlist is scrolled.
    #[must_use]
    pub const fn is_playlist(self) -> bool {
        matches!(self, Self::Browse | Self::Liked)
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Browse => write!(f, "Browse"),
            Self::Liked => write!(f, "Liked"),
            Self::Profile => write!(f, "Profile"),
            Self::Settings => write!(f, "Settings"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "browse" => Ok(Self::Browse),
            "liked" => Ok(Self::Liked),
            "profile" => Ok(Self::Profile),
            "settings" => Ok(Self::Settings),
            _ => Err(Error::UnknownViewMode(s.to_string())),
        }
    }
}

/// Follow button state and the follower counter next to it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FollowState {
    /// Whether the user currently follows.
    #[serde(default)]
    pub is_following: bool,
    /// Displayed follower count.
    #[serde(default)]
    pub follower_count: u64,
}

/// Immutable copy of the feed handed to the renderer after each change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedSnapshot {
    /// Every track in registry order.
    pub tracks: Vec<Track>,
    /// Active panel.
    pub view_mode: ViewMode,
    /// Cursor wrapped into the active playlist (0 when it is empty).
    pub cursor: usize,
    /// Liked track ids in registry order.
    pub liked_ids: Vec<TrackId>,
    /// Follow button state.
    pub follow: FollowState,
    /// Chat emoji in posting order.
    pub chat_log: Vec<String>,
    /// Selected theme.
    pub theme: Theme,
    /// Uploaded track ids in upload order.
    pub uploaded_ids: Vec<TrackId>,
    /// Profile picture, if one was picked.
    pub profile_image: Option<MediaRef>,
}

impl FeedSnapshot {
    /// Tracks of the active playlist, in registry order.
    pub fn active_playlist(&self) -> Vec<&Track> {
        match self.view_mode {
            ViewMode::Liked => self
                .tracks
                .iter()
                .filter(|t| self.liked_ids.contains(&t.id))
                .collect(),
            _ => self.tracks.iter().collect(),
        }
    }

    /// Track under the cursor, or `None` for an empty playlist.
    pub fn current_track(&self) -> Option<&Track> {
        self.active_playlist().get(self.cursor).copied()
    }
}

/// The playlist state manager.
#[derive(Debug, Clone)]
pub struct FeedState {
    tracks: Vec<Track>,
    view_mode: ViewMode,
    cursor: usize,
    liked: HashSet<TrackId>,
    uploaded: Vec<TrackId>,
    follow: FollowState,
    chat_log: Vec<String>,
    theme: Theme,
    profile_image: Option<MediaRef>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self::from_config(&FeedConfig::default())
    }
}

impl FeedState {
    /// Create a feed from configuration. Seed tracks get ids `1..=n`.
    #[must_use]
    pub fn from_config(config: &FeedConfig) -> Self {
        let tracks = config
            .seed_tracks
            .iter()
            .cloned()
            .zip(1..)
            .map(|(seed, id)| seed.into_track(id))
            .collect();

        let mut state = Self::with_tracks(tracks);
        state.theme = config.theme;
        state.follow = config.follow;
        state
    }

    /// Create a feed over an existing registry, in browse mode at the top.
    ///
    /// Tracks are renumbered `1..=n` in registry order so that upload ids
    /// (registry length plus one) never collide with an existing id.
    #[must_use]
    pub fn with_tracks(tracks: Vec<Track>) -> Self {
        let tracks = tracks
            .into_iter()
            .zip(1..)
            .map(|(mut track, id)| {
                track.id = id;
                track
            })
            .collect();

        Self {
            tracks,
            view_mode: ViewMode::Browse,
            cursor: 0,
            liked: HashSet::new(),
            uploaded: Vec::new(),
            follow: FollowState::default(),
            chat_log: Vec::new(),
            theme: Theme::default(),
            profile_image: None,
        }
    }

    // ---------------------------------------------------------------------
    // Operations
    // ---------------------------------------------------------------------

    /// Move to the next track of the active playlist, wrapping at the end.
    ///
    /// In browse mode the track that becomes current gets one more listen.
    /// Returns the new cursor, or `None` (and changes nothing) when the
    /// active playlist is empty.
    pub fn advance(&mut self) -> Option<usize> {
        let len = self.active_len();
        if len == 0 {
            debug!(mode = %self.view_mode, "Advance on empty playlist ignored");
            return None;
        }

        let next = (self.cursor + 1) % len;
        if self.view_mode == ViewMode::Browse {
            // Browse scrolls the full registry, so the index is a registry index
            if let Some(track) = self.tracks.get_mut(next) {
                track.listen_count += 1;
                debug!(
                    track_id = track.id,
                    listens = track.listen_count,
                    "Counted listen"
                );
            }
        }

        self.cursor = next;
        debug!(cursor = next, mode = %self.view_mode, "Advanced");
        Some(next)
    }

    /// Flip whether `track_id` is liked. Returns the new liked status.
    ///
    /// Ids outside the registry are ignored and report `false`.
    pub fn toggle_like(&mut self, track_id: TrackId) -> bool {
        if self.track(track_id).is_none() {
            debug!(track_id, "Like on unknown track ignored");
            return false;
        }

        let liked = if self.liked.remove(&track_id) {
            false
        } else {
            self.liked.insert(track_id);
            true
        };
        debug!(track_id, liked, "Toggled like");
        liked
    }

    /// Toggle the like on the track being shown.
    ///
    /// Returns `None` when there is no current track.
    pub fn toggle_like_current(&mut self) -> Option<bool> {
        let id = self.current_track()?.id;
        Some(self.toggle_like(id))
    }

    /// Flip the follow button, moving the counter by one.
    ///
    /// Unfollowing with a zero counter leaves it at zero.
    pub fn toggle_follow(&mut self) -> FollowState {
        let follow = &mut self.follow;
        follow.is_following = !follow.is_following;
        if follow.is_following {
            follow.follower_count += 1;
        } else if follow.follower_count == 0 {
            warn!("Unfollow with follower count already at zero, keeping zero");
        } else {
            follow.follower_count -= 1;
        }
        debug!(
            is_following = follow.is_following,
            followers = follow.follower_count,
            "Toggled follow"
        );
        *follow
    }

    /// Switch panels.
    ///
    /// Moving to a different playlist mode (browse or liked) puts the cursor
    /// back at the top; profile and settings keep it.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        let previous = self.view_mode;
        self.view_mode = mode;
        if mode.is_playlist() && mode != previous {
            self.cursor = 0;
        }
        debug!(from = %previous, to = %mode, cursor = self.cursor, "View mode changed");
    }

    /// Sidebar "Liked Songs / All Songs" toggle.
    ///
    /// Leaves liked mode for browse, enters liked mode from anywhere else,
    /// and always resets the cursor.
    pub fn toggle_liked_view(&mut self) -> ViewMode {
        let mode = if self.view_mode == ViewMode::Liked {
            ViewMode::Browse
        } else {
            ViewMode::Liked
        };
        self.set_view_mode(mode);
        self.cursor = 0;
        mode
    }

    /// Add an uploaded file to the registry.
    ///
    /// The title is the file name without its extension and the id is the
    /// registry length plus one. In browse mode the new track becomes current.
    pub fn ingest_upload(&mut self, display_name: &str, media: MediaRef) -> Track {
        let position = self.tracks.len();
        let track = Track::uploaded(self.next_track_id(), display_name, media);

        self.tracks.push(track.clone());
        self.uploaded.push(track.id);
        if self.view_mode == ViewMode::Browse {
            self.cursor = position;
        }

        info!(
            track_id = track.id,
            title = %track.title,
            uploads = self.uploaded.len(),
            "Ingested upload"
        );
        track
    }

    /// Replace the profile picture.
    pub fn set_profile_image(&mut self, media: MediaRef) {
        debug!(media = %media, "Profile image set");
        self.profile_image = Some(media);
    }

    /// Select a theme.
    pub fn set_theme(&mut self, theme: Theme) {
        debug!(theme = %theme, "Theme set");
        self.theme = theme;
    }

    /// Append an emoji to the chat log.
    ///
    /// The log is never trimmed; it lives as long as the feed does.
    pub fn post_chat(&mut self, emoji: impl Into<String>) {
        self.chat_log.push(emoji.into());
        debug!(messages = self.chat_log.len(), "Chat posted");
    }

    // ---------------------------------------------------------------------
    // Derived state
    // ---------------------------------------------------------------------

    /// Tracks of the active playlist, in registry order.
    pub fn active_playlist(&self) -> Vec<&Track> {
        match self.view_mode {
            ViewMode::Liked => self
                .tracks
                .iter()
                .filter(|t| self.liked.contains(&t.id))
                .collect(),
            _ => self.tracks.iter().collect(),
        }
    }

    /// Id for the next registry entry: length plus one.
    fn next_track_id(&self) -> TrackId {
        TrackId::try_from(self.tracks.len()).map_or(TrackId::MAX, |len| len.saturating_add(1))
    }

    fn active_len(&self) -> usize {
        match self.view_mode {
            ViewMode::Liked => self
                .tracks
                .iter()
                .filter(|t| self.liked.contains(&t.id))
                .count(),
            _ => self.tracks.len(),
        }
    }

    /// Cursor wrapped into the active playlist; 0 when it is empty.
    pub fn cursor(&self) -> usize {
        match self.active_len() {
            0 => 0,
            len => self.cursor % len,
        }
    }

    /// Track under the cursor, or `None` when the active playlist is empty.
    pub fn current_track(&self) -> Option<&Track> {
        let playlist = self.active_playlist();
        if playlist.is_empty() {
            return None;
        }
        playlist.get(self.cursor % playlist.len()).copied()
    }

    /// Whether the track being shown is liked. `false` when nothing is shown.
    pub fn is_current_liked(&self) -> bool {
        self.current_track()
            .is_some_and(|track| self.liked.contains(&track.id))
    }

    /// Whether `track_id` is liked.
    pub fn is_liked(&self, track_id: TrackId) -> bool {
        self.liked.contains(&track_id)
    }

    /// Liked ids in registry order.
    pub fn liked_ids(&self) -> Vec<TrackId> {
        self.tracks
            .iter()
            .map(|t| t.id)
            .filter(|id| self.liked.contains(id))
            .collect()
    }

    /// Number of liked tracks.
    pub fn liked_count(&self) -> usize {
        self.liked.len()
    }

    /// Uploaded tracks in upload order.
    pub fn uploaded_tracks(&self) -> Vec<&Track> {
        self.uploaded.iter().filter_map(|id| self.track(*id)).collect()
    }

    /// Number of uploads.
    pub fn uploaded_count(&self) -> usize {
        self.uploaded.len()
    }

    /// Every track in registry order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Look up a track by id.
    pub fn track(&self, track_id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == track_id)
    }

    /// Active panel.
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Follow button state.
    pub const fn follow(&self) -> FollowState {
        self.follow
    }

    /// Chat emoji in posting order.
    pub fn chat_log(&self) -> &[String] {
        &self.chat_log
    }

    /// Selected theme.
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Colors of the selected theme.
    pub const fn palette(&self) -> ThemePalette {
        self.theme.palette()
    }

    /// Profile picture, if one was picked.
    pub const fn profile_image(&self) -> Option<&MediaRef> {
        self.profile_image.as_ref()
    }

    /// Copy the current state for rendering.
    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            tracks: self.tracks.clone(),
            view_mode: self.view_mode,
            cursor: self.cursor(),
            liked_ids: self.liked_ids(),
            follow: self.follow,
            chat_log: self.chat_log.clone(),
            theme: self.theme,
            uploaded_ids: self.uploaded.clone(),
            profile_image: self.profile_image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_tracks() -> FeedState {
        FeedState::default()
    }

    fn ids(playlist: &[&Track]) -> Vec<TrackId> {
        playlist.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_default_feed() {
        let feed = three_tracks();
        assert_eq!(feed.tracks().len(), 3);
        assert_eq!(feed.view_mode(), ViewMode::Browse);
        assert_eq!(feed.cursor(), 0);
        assert_eq!(feed.current_track().map(|t| t.id), Some(1));
        assert_eq!(feed.theme(), Theme::Black);
        assert!(feed.chat_log().is_empty());
        assert!(feed.profile_image().is_none());
    }

    #[test]
    fn test_seed_ids_are_positional() {
        let feed = three_tracks();
        let ids: Vec<_> = feed.tracks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_advance_wraps() {
        let mut feed = three_tracks();
        for n in 1..=7 {
            assert_eq!(feed.advance(), Some(n % 3));
        }
        assert_eq!(feed.cursor(), 7 % 3);
    }

    #[test]
    fn test_advance_counts_listen_in_browse() {
        let mut feed = three_tracks();
        feed.advance();
        assert_eq!(feed.track(2).map(|t| t.listen_count), Some(1));
        assert_eq!(feed.track(1).map(|t| t.listen_count), Some(0));
        assert_eq!(feed.track(3).map(|t| t.listen_count), Some(0));
    }

    #[test]
    fn test_advance_wrap_counts_first_track() {
        let mut feed = three_tracks();
        feed.advance();
        feed.advance();
        feed.advance();
        assert_eq!(feed.cursor(), 0);
        assert_eq!(feed.track(1).map(|t| t.listen_count), Some(1));
    }

    #[test]
    fn test_advance_does_not_count_outside_browse() {
        for mode in [ViewMode::Profile, ViewMode::Settings] {
            let mut feed = three_tracks();
            feed.set_view_mode(mode);
            assert_eq!(feed.advance(), Some(1));
            assert!(feed.tracks().iter().all(|t| t.listen_count == 0));
        }

        let mut feed = three_tracks();
        feed.toggle_like(1);
        feed.toggle_like(3);
        feed.set_view_mode(ViewMode::Liked);
        assert_eq!(feed.advance(), Some(1));
        assert!(feed.tracks().iter().all(|t| t.listen_count == 0));
    }

    #[test]
    fn test_advance_on_empty_playlist_is_noop() {
        let mut feed = three_tracks();
        feed.set_view_mode(ViewMode::Liked);
        assert_eq!(feed.advance(), None);
        assert!(feed.current_track().is_none());

        let mut empty = FeedState::with_tracks(Vec::new());
        assert_eq!(empty.advance(), None);
        assert_eq!(empty.cursor(), 0);
    }

    #[test]
    fn test_toggle_like_double_is_identity() {
        let mut feed = three_tracks();
        feed.toggle_like(2);
        let before = feed.liked_ids();
        assert!(feed.toggle_like(3));
        assert!(!feed.toggle_like(3));
        assert_eq!(feed.liked_ids(), before);
    }

    #[test]
    fn test_toggle_like_keeps_cursor() {
        let mut feed = three_tracks();
        feed.advance();
        feed.toggle_like(2);
        assert_eq!(feed.cursor(), 1);
    }

    #[test]
    fn test_liked_playlist_follows_registry_order() {
        let mut feed = three_tracks();
        feed.toggle_like(3);
        feed.toggle_like(1);
        feed.set_view_mode(ViewMode::Liked);
        assert_eq!(ids(&feed.active_playlist()), vec![1, 3]);
        assert_eq!(feed.liked_ids(), vec![1, 3]);
    }

    #[test]
    fn test_toggle_like_current() {
        let mut feed = three_tracks();
        assert_eq!(feed.toggle_like_current(), Some(true));
        assert!(feed.is_current_liked());
        assert_eq!(feed.toggle_like_current(), Some(false));
        assert!(!feed.is_current_liked());

        feed.set_view_mode(ViewMode::Liked);
        assert_eq!(feed.toggle_like_current(), None);
    }

    #[test]
    fn test_unlike_in_liked_mode_rewraps_cursor() {
        let mut feed = three_tracks();
        feed.toggle_like(1);
        feed.toggle_like(2);
        feed.set_view_mode(ViewMode::Liked);
        feed.advance();
        assert_eq!(feed.current_track().map(|t| t.id), Some(2));

        // Drop the current track: the cursor wraps onto what is left
        feed.toggle_like(2);
        assert_eq!(feed.cursor(), 0);
        assert_eq!(feed.current_track().map(|t| t.id), Some(1));

        feed.toggle_like(1);
        assert!(feed.current_track().is_none());
        assert!(!feed.is_current_liked());
    }

    #[test]
    fn test_toggle_follow_round_trip() {
        let mut feed = three_tracks();
        let state = feed.toggle_follow();
        assert!(state.is_following);
        assert_eq!(state.follower_count, 1);

        let state = feed.toggle_follow();
        assert_eq!(state, FollowState::default());
    }

    #[test]
    fn test_toggle_follow_clamps_at_zero() {
        let config = FeedConfig {
            follow: FollowState {
                is_following: true,
                follower_count: 0,
            },
            ..Default::default()
        };
        let mut feed = FeedState::from_config(&config);
        let state = feed.toggle_follow();
        assert!(!state.is_following);
        assert_eq!(state.follower_count, 0);
    }

    #[test]
    fn test_set_view_mode_resets_cursor_on_playlist_change() {
        let mut feed = three_tracks();
        feed.advance();
        feed.advance();

        feed.set_view_mode(ViewMode::Browse);
        assert_eq!(feed.cursor(), 2, "same mode keeps cursor");

        feed.set_view_mode(ViewMode::Profile);
        assert_eq!(feed.cursor(), 2, "profile keeps cursor");

        feed.set_view_mode(ViewMode::Browse);
        assert_eq!(feed.cursor(), 0);

        feed.advance();
        feed.set_view_mode(ViewMode::Liked);
        assert_eq!(feed.cursor(), 0);
    }

    #[test]
    fn test_toggle_liked_view() {
        let mut feed = three_tracks();
        feed.toggle_like(2);
        assert_eq!(feed.toggle_liked_view(), ViewMode::Liked);
        assert_eq!(feed.current_track().map(|t| t.id), Some(2));

        assert_eq!(feed.toggle_liked_view(), ViewMode::Browse);
        assert_eq!(feed.cursor(), 0);

        feed.set_view_mode(ViewMode::Settings);
        assert_eq!(feed.toggle_liked_view(), ViewMode::Liked);
    }

    #[test]
    fn test_ingest_upload_in_browse() {
        let mut feed = three_tracks();
        let track = feed.ingest_upload("song.mp3", MediaRef::new("blob:1"));

        assert_eq!(track.id, 4);
        assert_eq!(track.title, "song");
        assert_eq!(track.artist, "Uploaded");
        assert_eq!(track.listen_count, 0);
        assert_eq!(feed.cursor(), 3);
        assert_eq!(feed.current_track(), Some(&track));
        assert_eq!(feed.uploaded_count(), 1);
        assert_eq!(ids(&feed.uploaded_tracks()), vec![4]);
    }

    #[test]
    fn test_ingest_upload_outside_browse_keeps_cursor() {
        let mut feed = three_tracks();
        feed.toggle_like(1);
        feed.toggle_like(2);
        feed.set_view_mode(ViewMode::Liked);
        feed.advance();

        feed.ingest_upload("extra.wav", MediaRef::new("blob:x"));
        assert_eq!(feed.cursor(), 1);
        assert_eq!(feed.tracks().len(), 4);

        // Profile scrolls the full registry, where index 1 is still valid
        feed.set_view_mode(ViewMode::Profile);
        feed.ingest_upload("more.wav", MediaRef::new("blob:y"));
        assert_eq!(feed.cursor(), 1);
        assert_eq!(feed.uploaded_count(), 2);
    }

    #[test]
    fn test_with_tracks_renumbers_by_position() {
        let feed = FeedState::with_tracks(vec![
            Track::new(1, "First", "Seeded", MediaRef::new("/one.mp3")),
            Track::new(3, "Second", "Seeded", MediaRef::new("/two.mp3")),
            Track::new(3, "Third", "Seeded", MediaRef::new("/three.mp3")),
        ]);
        let ids: Vec<_> = feed.tracks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(feed.track(2).map(|t| t.title.as_str()), Some("Second"));
    }

    #[test]
    fn test_uploads_never_collide_with_existing_ids() {
        let mut feed = FeedState::with_tracks(vec![
            Track::new(1, "Low", "Seeded", MediaRef::new("/low.mp3")),
            Track::new(3, "Gap", "Seeded", MediaRef::new("/gap.mp3")),
            Track::new(10, "High", "Seeded", MediaRef::new("/high.mp3")),
        ]);
        for n in 0..10 {
            feed.ingest_upload(&format!("upload{n}.mp3"), MediaRef::new(format!("blob:{n}")));
        }

        let ids: Vec<_> = feed.tracks().iter().map(|t| t.id).collect();
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len(), "duplicate ids in {ids:?}");

        assert!(feed.toggle_like(3));
        assert_eq!(feed.liked_ids(), vec![3]);
    }

    #[test]
    fn test_toggle_like_unknown_id_ignored() {
        let mut feed = three_tracks();
        assert!(!feed.toggle_like(99));
        assert!(!feed.is_liked(99));
        assert_eq!(feed.liked_count(), 0);
        assert_eq!(feed.liked_count(), feed.liked_ids().len());

        feed.toggle_like(2);
        feed.toggle_like(42);
        assert_eq!(feed.liked_count(), 1);
        assert_eq!(feed.liked_count(), feed.snapshot().liked_ids.len());

        // A later upload reaching id 4 does not start out liked
        feed.toggle_like(4);
        let track = feed.ingest_upload("fresh.mp3", MediaRef::new("blob:fresh"));
        assert_eq!(track.id, 4);
        assert!(!feed.is_liked(4));
    }

    #[test]
    fn test_theme_and_palette() {
        let mut feed = three_tracks();
        feed.set_theme(Theme::Red);
        assert_eq!(feed.theme(), Theme::Red);
        assert_eq!(feed.palette().accent, "#dc2626");
    }

    #[test]
    fn test_post_chat_keeps_order() {
        let mut feed = three_tracks();
        feed.post_chat("🔥");
        feed.post_chat("🎶");
        feed.post_chat("🔥");
        assert_eq!(feed.chat_log(), ["🔥", "🎶", "🔥"]);
    }

    #[test]
    fn test_profile_image() {
        let mut feed = three_tracks();
        feed.set_profile_image(MediaRef::new("blob:me"));
        feed.set_profile_image(MediaRef::new("blob:me2"));
        assert_eq!(feed.profile_image().map(MediaRef::as_str), Some("blob:me2"));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut feed = three_tracks();
        feed.toggle_like(3);
        feed.toggle_like(1);
        feed.toggle_follow();
        feed.post_chat("👏");
        feed.ingest_upload("mine.mp3", MediaRef::new("blob:m"));

        let snapshot = feed.snapshot();
        assert_eq!(snapshot.tracks.len(), 4);
        assert_eq!(snapshot.cursor, 3);
        assert_eq!(snapshot.liked_ids, vec![1, 3]);
        assert_eq!(snapshot.uploaded_ids, vec![4]);
        assert_eq!(snapshot.follow.follower_count, 1);
        assert_eq!(snapshot.chat_log, vec!["👏".to_string()]);
        assert_eq!(snapshot.current_track().map(|t| t.id), Some(4));
    }

    #[test]
    fn test_snapshot_cursor_is_wrapped() {
        let mut feed = three_tracks();
        feed.toggle_like(1);
        feed.toggle_like(2);
        feed.set_view_mode(ViewMode::Liked);
        feed.advance();
        feed.toggle_like(2);

        let snapshot = feed.snapshot();
        assert_eq!(snapshot.cursor, 0);
        assert_eq!(snapshot.active_playlist().len(), 1);
        assert_eq!(snapshot.current_track().map(|t| t.id), Some(1));
    }

    #[test]
    fn test_view_mode_from_str() {
        assert_eq!("Liked".parse::<ViewMode>().expect("parse"), ViewMode::Liked);
        assert!(matches!(
            "queue".parse::<ViewMode>(),
            Err(Error::UnknownViewMode(_))
        ));
    }
}
