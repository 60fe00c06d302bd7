//! # Suite Configuration Module
//!
//! Provides configuration management for the media suite.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! [`SuiteConfig`] holding every setting a session needs: the title line,
//! how to react when input runs out, the contents of the demo playlist and the
//! logging setup. Defaults reproduce the stock transcript exactly, so hosts
//! only override what they need. `build()` validates eagerly and fails fast
//! with an actionable [`Error::Config`].
//!
//! Configuration is assembled in code by the host binary. There is no
//! configuration file and no command-line parsing.
//!
//! ## Usage
//!
//! ```
//! use core_runtime::config::{EndOfInputPolicy, SuiteConfig};
//!
//! let config = SuiteConfig::builder()
//!     .end_of_input(EndOfInputPolicy::Strict)
//!     .bonus_track("Encore.mp3")
//!     .build()
//!     .expect("valid config");
//!
//! assert_eq!(config.playlist.bonus_track, "Encore.mp3");
//! ```
//!
//! ## Error Handling
//!
//! ```should_panic
//! use core_runtime::config::SuiteConfig;
//!
//! // An empty playlist title is rejected
//! let config = SuiteConfig::builder()
//!     .playlist_title("")
//!     .build()
//!     .expect("Should fail - empty playlist title");
//! ```

use crate::error::{Error, Result};
use crate::logging::LoggingConfig;

/// Title line written before the first prompt.
pub const DEFAULT_TITLE: &str = "===== Modular Media Suite =====";

/// What a session does when input ends before every prompt is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndOfInputPolicy {
    /// Treat each missing line as an empty answer, which selects the default
    /// branch of every prompt.
    #[default]
    UseDefault,
    /// Abort the session on the first missing line.
    Strict,
}

/// Contents of the fixed demo playlist.
///
/// The entered media name is always the first track of the root playlist,
/// followed by `bonus_track` and then the nested mix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoPlaylistConfig {
    /// Title of the root playlist
    pub root_title: String,
    /// Track added after the entered media name
    pub bonus_track: String,
    /// Title of the nested playlist
    pub mix_title: String,
    /// Tracks of the nested playlist, in order
    pub mix_tracks: Vec<String>,
}

impl Default for DemoPlaylistConfig {
    fn default() -> Self {
        Self {
            root_title: "Main Playlist".to_string(),
            bonus_track: "Bonus Track.mp3".to_string(),
            mix_title: "Chill Mix".to_string(),
            mix_tracks: vec!["TrackA.mp3".to_string(), "TrackB.mp3".to_string()],
        }
    }
}

impl DemoPlaylistConfig {
    /// Validates that every title and track name is non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.root_title.is_empty() {
            return Err(Error::Config("Playlist title cannot be empty".to_string()));
        }

        if self.bonus_track.is_empty() {
            return Err(Error::Config("Bonus track name cannot be empty".to_string()));
        }

        if self.mix_title.is_empty() {
            return Err(Error::Config("Mix title cannot be empty".to_string()));
        }

        if let Some(index) = self.mix_tracks.iter().position(|t| t.is_empty()) {
            return Err(Error::Config(format!(
                "Mix track #{} has an empty name",
                index + 1
            )));
        }

        Ok(())
    }
}

/// Configuration for one media suite session.
///
/// Use [`SuiteConfigBuilder`] to construct instances.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Line written before the first prompt
    pub title: String,

    /// Reaction to input ending early
    pub end_of_input: EndOfInputPolicy,

    /// Demo playlist contents
    pub playlist: DemoPlaylistConfig,

    /// Logging setup used by the host binary
    pub logging: LoggingConfig,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            end_of_input: EndOfInputPolicy::default(),
            playlist: DemoPlaylistConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SuiteConfig {
    /// Creates a new builder for constructing a `SuiteConfig`.
    pub fn builder() -> SuiteConfigBuilder {
        SuiteConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - The title line is not empty and fits on one line
    /// - The demo playlist has no empty names
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Config("Title line cannot be empty".to_string()));
        }

        if self.title.contains('\n') {
            return Err(Error::Config(
                "Title line must not contain line breaks".to_string(),
            ));
        }

        self.playlist.validate()
    }
}

/// Builder for constructing [`SuiteConfig`] instances.
///
/// Unset fields fall back to the defaults of [`SuiteConfig::default`].
#[derive(Debug, Default)]
pub struct SuiteConfigBuilder {
    title: Option<String>,
    end_of_input: Option<EndOfInputPolicy>,
    playlist: DemoPlaylistConfig,
    logging: Option<LoggingConfig>,
}

impl SuiteConfigBuilder {
    /// Sets the title line written before the first prompt.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the end-of-input policy.
    ///
    /// Default: [`EndOfInputPolicy::UseDefault`]
    pub fn end_of_input(mut self, policy: EndOfInputPolicy) -> Self {
        self.end_of_input = Some(policy);
        self
    }

    /// Sets the root playlist title.
    pub fn playlist_title(mut self, title: impl Into<String>) -> Self {
        self.playlist.root_title = title.into();
        self
    }

    /// Sets the track appended after the entered media name.
    pub fn bonus_track(mut self, name: impl Into<String>) -> Self {
        self.playlist.bonus_track = name.into();
        self
    }

    /// Sets the nested playlist title.
    pub fn mix_title(mut self, title: impl Into<String>) -> Self {
        self.playlist.mix_title = title.into();
        self
    }

    /// Replaces the nested playlist tracks.
    pub fn mix_tracks<I, S>(mut self, tracks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.playlist.mix_tracks = tracks.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the logging configuration.
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Builds and validates the final `SuiteConfig`.
    pub fn build(self) -> Result<SuiteConfig> {
        let config = SuiteConfig {
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            end_of_input: self.end_of_input.unwrap_or_default(),
            playlist: self.playlist,
            logging: self.logging.unwrap_or_default(),
        };

        config.validate()?;

        Ok(config)
    }
}
