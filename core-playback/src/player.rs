//! Players and runtime feature decorators.
//!
//! A chain is a [`BaseMediaPlayer`] wrapped by zero or more decorators. Every
//! decorator plays its inner player first and then appends one line, so the
//! transcript reads base lines first and feature lines outward.

use std::io::Write;
use std::sync::Arc;

use bridge_traits::error::Result as BridgeResult;
use bridge_traits::{write_banner, Player, Renderer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Optional playback features, in canonical wrapping order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerFeature {
    Subtitles,
    Equalizer,
    Watermark,
}

impl PlayerFeature {
    /// All features in the order they are offered and applied.
    pub const ALL: [PlayerFeature; 3] = [
        PlayerFeature::Subtitles,
        PlayerFeature::Equalizer,
        PlayerFeature::Watermark,
    ];

    /// Wrap `inner` with the decorator for this feature.
    pub fn wrap(self, inner: Box<dyn Player>) -> Box<dyn Player> {
        match self {
            PlayerFeature::Subtitles => Box::new(SubtitleDecorator::new(inner)),
            PlayerFeature::Equalizer => Box::new(EqualizerDecorator::new(inner)),
            PlayerFeature::Watermark => Box::new(WatermarkDecorator::new(inner)),
        }
    }
}

/// Plays a named asset through a shared renderer.
pub struct BaseMediaPlayer {
    file_name: String,
    renderer: Arc<dyn Renderer>,
}

impl BaseMediaPlayer {
    pub fn new(file_name: impl Into<String>, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            file_name: file_name.into(),
            renderer,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Player for BaseMediaPlayer {
    fn play(&self, out: &mut dyn Write) -> BridgeResult<()> {
        self.renderer.render(&self.file_name, out)?;
        writeln!(out, "Playing {}...", self.file_name)?;
        Ok(())
    }
}

pub struct SubtitleDecorator {
    wrappee: Box<dyn Player>,
}

impl SubtitleDecorator {
    pub fn new(wrappee: Box<dyn Player>) -> Self {
        Self { wrappee }
    }
}

impl Player for SubtitleDecorator {
    fn play(&self, out: &mut dyn Write) -> BridgeResult<()> {
        self.wrappee.play(out)?;
        writeln!(out, "Subtitles enabled.")?;
        Ok(())
    }
}

pub struct EqualizerDecorator {
    wrappee: Box<dyn Player>,
}

impl EqualizerDecorator {
    pub fn new(wrappee: Box<dyn Player>) -> Self {
        Self { wrappee }
    }
}

impl Player for EqualizerDecorator {
    fn play(&self, out: &mut dyn Write) -> BridgeResult<()> {
        self.wrappee.play(out)?;
        writeln!(out, "Equalizer applied.")?;
        Ok(())
    }
}

pub struct WatermarkDecorator {
    wrappee: Box<dyn Player>,
}

impl WatermarkDecorator {
    pub fn new(wrappee: Box<dyn Player>) -> Self {
        Self { wrappee }
    }
}

impl Player for WatermarkDecorator {
    fn play(&self, out: &mut dyn Write) -> BridgeResult<()> {
        self.wrappee.play(out)?;
        writeln!(out, "Watermark displayed.")?;
        Ok(())
    }
}

/// Wrap `base` with the requested features.
///
/// Features are applied in canonical order (subtitles, equalizer, watermark)
/// whatever order they are given in, and each at most once.
pub fn build_chain(base: Box<dyn Player>, features: &[PlayerFeature]) -> Box<dyn Player> {
    let mut ordered = features.to_vec();
    ordered.sort();
    ordered.dedup();

    ordered
        .into_iter()
        .fold(base, |player, feature| feature.wrap(player))
}

/// Decorator-pattern controller.
pub struct MediaController {
    player: Box<dyn Player>,
}

impl MediaController {
    pub fn new(player: Box<dyn Player>) -> Self {
        Self { player }
    }

    pub fn start_play(&self, out: &mut dyn Write) -> Result<()> {
        debug!("Decorator demo");
        write_banner(out, "Decorator")?;
        self.player.play(out)?;
        Ok(())
    }
}
