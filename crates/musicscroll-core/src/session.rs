//! Feed session: one-way data flow between the host surfaces and the state.
//!
//! A [`FeedSession`] holds the only mutable [`FeedState`]. Input adapters
//! dispatch intents into it; after each state change the renderer gets a
//! snapshot, and when the displayed track changes the playback surface is
//! asked to play it.

use tracing::{debug, info, instrument};

use crate::config::FeedConfig;
use crate::feed::{FeedSnapshot, FeedState};
use crate::input::ScrollInput;
use crate::intent::{Applied, Intent};
use crate::surface::{FileIngestionSurface, FileKind, MediaPlaybackSurface, ViewRenderer};
use crate::track::{MediaRef, Track, TrackId};

/// Drives a [`FeedState`] on behalf of the host.
pub struct FeedSession<P, F, R> {
    state: FeedState,
    scroll: ScrollInput,
    emoji_palette: Vec<String>,
    playback: P,
    picker: F,
    renderer: R,
    playing: Option<(TrackId, MediaRef)>,
}

impl<P, F, R> FeedSession<P, F, R>
where
    P: MediaPlaybackSurface,
    F: FileIngestionSurface,
    R: ViewRenderer,
{
    /// Create a session from configuration and the host surfaces.
    pub fn new(config: &FeedConfig, playback: P, picker: F, renderer: R) -> Self {
        Self {
            state: FeedState::from_config(config),
            scroll: ScrollInput::new(config.scroll),
            emoji_palette: config.emoji_palette.clone(),
            playback,
            picker,
            renderer,
            playing: None,
        }
    }

    /// Render the initial state and start the first track.
    pub fn start(&mut self) {
        info!(
            tracks = self.state.tracks().len(),
            theme = %self.state.theme(),
            "Feed session started"
        );
        self.publish();
    }

    /// Apply an intent, then render and update playback.
    ///
    /// Intents that change nothing (advancing an empty playlist) are not
    /// rendered.
    #[instrument(skip(self), level = "debug")]
    pub fn dispatch(&mut self, intent: Intent) -> Applied {
        let applied = self.state.apply(intent);
        if applied != Applied::Unchanged {
            self.publish();
        }
        applied
    }

    /// Handle a wheel event. Returns what the resulting intent did, if any.
    pub fn wheel(&mut self, delta_y: f64) -> Option<Applied> {
        let intent = self.scroll.intent_for(delta_y, self.state.view_mode())?;
        Some(self.dispatch(intent))
    }

    /// Ask the host for an audio file and add it to the feed.
    ///
    /// A cancelled pick changes nothing and returns `None`.
    pub fn request_upload(&mut self) -> Option<Track> {
        let Some(file) = self.picker.pick_file(FileKind::Audio) else {
            debug!("Upload pick cancelled");
            return None;
        };

        match self.dispatch(Intent::UploadCompleted {
            display_name: file.display_name,
            media: file.media,
        }) {
            Applied::Uploaded(track) => Some(track),
            _ => None,
        }
    }

    /// Ask the host for an image and use it as the profile picture.
    ///
    /// Returns whether a picture was set.
    pub fn request_profile_image(&mut self) -> bool {
        let Some(file) = self.picker.pick_file(FileKind::Image) else {
            debug!("Profile image pick cancelled");
            return false;
        };
        self.dispatch(Intent::ProfileImageSelected(file.media));
        true
    }

    /// Post one of the palette's emoji by index. Out-of-range is ignored.
    pub fn post_palette_emoji(&mut self, index: usize) -> bool {
        let Some(emoji) = self.emoji_palette.get(index).cloned() else {
            return false;
        };
        self.dispatch(Intent::PostChat(emoji));
        true
    }

    /// Emoji offered by the chat panel.
    pub fn emoji_palette(&self) -> &[String] {
        &self.emoji_palette
    }

    /// Read-only access to the state.
    pub const fn state(&self) -> &FeedState {
        &self.state
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> FeedSnapshot {
        self.state.snapshot()
    }

    fn publish(&mut self) {
        self.renderer.render(&self.state.snapshot());

        let current = self
            .state
            .current_track()
            .map(|track| (track.id, track.media.clone()));
        if current != self.playing {
            if let Some((track_id, media)) = &current {
                debug!(track_id, media = %media, "Playing");
                self.playback.play(media);
            }
            self.playing = current;
        }
    }
}
