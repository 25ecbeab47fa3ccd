//! `MusicScroll` Core Library
//!
//! This crate provides the state behind the `MusicScroll` feed widget:
//! - Track registry, scrolling cursor and listen counting
//! - Likes, with a liked-only playlist in registry order
//! - Uploads of audio files and a profile picture
//! - Follow counter, theme selection and an emoji chat log
//! - Capability traits for playback, file picking and rendering
//! - Feed configuration and logging setup
//!
//! # Data flow
//!
//! The host builds a [`FeedSession`] around its surfaces and dispatches
//! [`Intent`]s into it. The session applies each intent to its
//! [`FeedState`], renders a [`FeedSnapshot`] and plays the current track
//! when it changes.
//!
//! ```rust,ignore
//! use musicscroll_core::{FeedConfig, FeedSession, Intent};
//!
//! let mut session = FeedSession::new(&FeedConfig::load()?, player, picker, view);
//! session.start();
//! session.wheel(120.0);
//! session.dispatch(Intent::ToggleLikeCurrent);
//! ```

pub mod config;
pub mod error;
pub mod feed;
pub mod input;
pub mod intent;
pub mod logging;
pub mod session;
pub mod surface;
pub mod theme;
pub mod track;

pub use config::{DEFAULT_EMOJI_PALETTE, FeedConfig, SeedTrack, default_seed_tracks};
pub use error::{Error, Result};
pub use feed::{FeedSnapshot, FeedState, FollowState, ViewMode};
pub use input::{DEFAULT_SCROLL_THRESHOLD, ScrollConfig, ScrollInput};
pub use intent::{Applied, Intent};
pub use logging::{LoggingConfig, LoggingError, LoggingGuard};
pub use session::FeedSession;
pub use surface::{FileIngestionSurface, FileKind, MediaPlaybackSurface, PickedFile, ViewRenderer};
pub use theme::{Theme, ThemePalette};
pub use track::{MediaRef, Track, TrackId, UPLOADED_ARTIST, title_from_file_name};
