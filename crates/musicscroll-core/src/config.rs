//! Feed configuration management.
//!
//! Handles loading and saving the settings a feed starts from: the seed
//! tracks, the initial theme and follow state, the scroll threshold and the
//! emoji offered in the chat panel. Feed state itself is never written back.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::feed::FollowState;
use crate::input::ScrollConfig;
use crate::theme::Theme;
use crate::track::{MediaRef, Track, TrackId};

/// Emoji offered by the chat panel when no palette is configured.
pub const DEFAULT_EMOJI_PALETTE: [&str; 6] = ["😊", "🔥", "🎶", "👏", "💯", "❤️"];

/// A track the feed starts with. Ids are assigned by position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedTrack {
    /// Display title.
    pub title: String,
    /// Display artist.
    pub artist: String,
    /// Handle passed to the playback surface.
    pub media: MediaRef,
}

impl SeedTrack {
    /// Create a seed entry.
    pub fn new(title: impl Into<String>, artist: impl Into<String>, media: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            media: MediaRef::new(media),
        }
    }

    /// Turn this entry into a registry track.
    pub fn into_track(self, id: TrackId) -> Track {
        Track::new(id, self.title, self.artist, self.media)
    }
}

/// The built-in seed list.
#[must_use]
pub fn default_seed_tracks() -> Vec<SeedTrack> {
    vec![
        SeedTrack::new("Relaxing Lo-Fi", "Lo-Fi Beats", "/music/lofi.mp3"),
        SeedTrack::new("Chill Vibes", "Chillstep", "/music/chill.mp3"),
        SeedTrack::new("Ambient Sounds", "AmbientMix", "/music/ambient.mp3"),
    ]
}

fn default_emoji_palette() -> Vec<String> {
    DEFAULT_EMOJI_PALETTE.iter().map(ToString::to_string).collect()
}

/// Feed configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedConfig {
    /// Tracks present when the feed starts.
    #[serde(default = "default_seed_tracks")]
    pub seed_tracks: Vec<SeedTrack>,
    /// Initial theme.
    #[serde(default)]
    pub theme: Theme,
    /// Initial follow state.
    #[serde(default)]
    pub follow: FollowState,
    /// Wheel input settings.
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Emoji offered by the chat panel.
    #[serde(default = "default_emoji_palette")]
    pub emoji_palette: Vec<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            seed_tracks: default_seed_tracks(),
            theme: Theme::default(),
            follow: FollowState::default(),
            scroll: ScrollConfig::default(),
            emoji_palette: default_emoji_palette(),
        }
    }
}

impl FeedConfig {
    /// Load configuration from the default location, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read, parsed
    /// or validated.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        if !config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::FileSystem {
            path: path.to_path_buf(),
            message: format!("Failed to read config file: {e}"),
        })?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {e}")))?;
        config.validate()?;

        info!("Loaded config from {}", path.display());
        debug!(
            seed_tracks = config.seed_tracks.len(),
            theme = %config.theme,
            "Feed config"
        );

        Ok(config)
    }

    /// Save configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to an explicit path, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| Error::FileSystem {
                path: parent.to_path_buf(),
                message: format!("Failed to create config directory: {e}"),
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| Error::FileSystem {
            path: path.to_path_buf(),
            message: format!("Failed to write config file: {e}"),
        })?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Check values serde cannot constrain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] for a negative or non-finite scroll
    /// threshold, or an empty emoji palette.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.scroll.threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(Error::Configuration(format!(
                "Scroll threshold must be a finite, non-negative number (got {threshold})"
            )));
        }
        if self.emoji_palette.is_empty() {
            return Err(Error::Configuration(
                "Emoji palette must offer at least one emoji".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the path to the config file.
    #[must_use]
    pub fn config_file_path() -> PathBuf {
        config_file_path()
    }
}

/// Get the path to the config file.
fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("musicscroll")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FeedConfig::default();
        assert_eq!(config.seed_tracks.len(), 3);
        assert_eq!(config.seed_tracks[0].title, "Relaxing Lo-Fi");
        assert_eq!(config.theme, Theme::Black);
        assert_eq!(config.follow, FollowState::default());
        assert_eq!(config.emoji_palette.len(), DEFAULT_EMOJI_PALETTE.len());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: FeedConfig = serde_json::from_str("{}").expect("Should deserialize");
        assert_eq!(config, FeedConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{"theme":"red","follow":{"is_following":true,"follower_count":12}}"#;
        let config: FeedConfig = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(config.theme, Theme::Red);
        assert!(config.follow.is_following);
        assert_eq!(config.follow.follower_count, 12);
        assert_eq!(config.seed_tracks, default_seed_tracks());
    }

    #[test]
    fn test_save_and_load_from() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("nested").join("config.json");

        let config = FeedConfig {
            seed_tracks: vec![SeedTrack::new("Solo", "Someone", "/music/solo.mp3")],
            theme: Theme::Blue,
            ..Default::default()
        };
        config.save_to(&path).expect("Should save");
        assert!(path.exists());

        let loaded = FeedConfig::load_from(&path).expect("Should load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let result = FeedConfig::load_from(&temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::FileSystem { .. })));
    }

    #[test]
    fn test_load_from_invalid_json() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").expect("Should write file");

        let err = FeedConfig::load_from(&path).expect_err("Should fail");
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_validate_rejects_negative_threshold() {
        let mut config = FeedConfig::default();
        config.scroll.threshold = -1.0;
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));

        config.scroll.threshold = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_palette() {
        let config = FeedConfig {
            emoji_palette: Vec::new(),
            ..Default::default()
        };
        let err = config.validate().expect_err("Should fail");
        assert!(err.to_string().contains("Emoji palette"));
    }

    #[test]
    fn test_seed_into_track() {
        let track = SeedTrack::new("Chill Vibes", "Chillstep", "/music/chill.mp3").into_track(2);
        assert_eq!(track.id, 2);
        assert_eq!(track.listen_count, 0);
        assert_eq!(track.media.as_str(), "/music/chill.mp3");
    }

    #[test]
    fn test_config_file_path() {
        let path = FeedConfig::config_file_path();
        assert!(path.to_string_lossy().ends_with("config.json"));
        assert!(path.to_string_lossy().contains("musicscroll"));
    }
}
