//! Renderers and the bridge player.
//!
//! [`AdvancedMediaPlayer`] is the abstraction side of the bridge and
//! [`Renderer`] the implementor side. The player only ever talks to the trait,
//! so renderers can be swapped (even at runtime) without touching it.

use std::io::Write;
use std::sync::Arc;

use bridge_traits::error::Result as BridgeResult;
use bridge_traits::{write_banner, Renderer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Rendering technique chosen for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// GPU-accelerated rendering
    Hardware,
    /// CPU rendering
    #[default]
    Software,
}

impl RendererKind {
    pub fn from_hardware_choice(use_hardware: bool) -> Self {
        if use_hardware {
            RendererKind::Hardware
        } else {
            RendererKind::Software
        }
    }

    /// Instantiate a shareable renderer of this kind.
    pub fn into_renderer(self) -> Arc<dyn Renderer> {
        match self {
            RendererKind::Hardware => Arc::new(HardwareRenderer),
            RendererKind::Software => Arc::new(SoftwareRenderer),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HardwareRenderer;

impl Renderer for HardwareRenderer {
    fn render(&self, media_name: &str, out: &mut dyn Write) -> BridgeResult<()> {
        writeln!(out, "Rendering {} with hardware acceleration.", media_name)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareRenderer;

impl Renderer for SoftwareRenderer {
    fn render(&self, media_name: &str, out: &mut dyn Write) -> BridgeResult<()> {
        writeln!(out, "Rendering {} using software rendering.", media_name)?;
        Ok(())
    }
}

/// Bridge-pattern player: renders through whatever renderer it holds, then
/// announces playback.
pub struct AdvancedMediaPlayer {
    renderer: Arc<dyn Renderer>,
}

impl AdvancedMediaPlayer {
    pub fn new(renderer: Arc<dyn Renderer>) -> Self {
        Self { renderer }
    }

    /// Replace the renderer; the player logic is unaffected.
    pub fn set_renderer(&mut self, renderer: Arc<dyn Renderer>) {
        self.renderer = renderer;
    }

    pub fn renderer(&self) -> &Arc<dyn Renderer> {
        &self.renderer
    }

    pub fn play(&self, name: &str, out: &mut dyn Write) -> Result<()> {
        debug!(media = name, "Bridge demo");
        write_banner(out, "Bridge")?;
        self.renderer.render(name, out)?;
        writeln!(out, "Playing: {}", name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_with(kind: RendererKind) -> String {
        let player = AdvancedMediaPlayer::new(kind.into_renderer());
        let mut out: Vec<u8> = Vec::new();
        player.play("song.mp3", &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_hardware_bridge() {
        assert_eq!(
            play_with(RendererKind::Hardware),
            "\n[Bridge Pattern]\nRendering song.mp3 with hardware acceleration.\nPlaying: song.mp3\n"
        );
    }

    #[test]
    fn test_software_bridge() {
        assert_eq!(
            play_with(RendererKind::Software),
            "\n[Bridge Pattern]\nRendering song.mp3 using software rendering.\nPlaying: song.mp3\n"
        );
    }

    #[test]
    fn test_swap_renderer_at_runtime() {
        let mut player = AdvancedMediaPlayer::new(RendererKind::Software.into_renderer());
        player.set_renderer(RendererKind::Hardware.into_renderer());

        let mut out: Vec<u8> = Vec::new();
        player.play("clip", &mut out).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("Rendering clip with hardware acceleration."));
    }

    #[test]
    fn test_kind_from_choice() {
        assert_eq!(RendererKind::from_hardware_choice(true), RendererKind::Hardware);
        assert_eq!(RendererKind::from_hardware_choice(false), RendererKind::Software);
        assert_eq!(RendererKind::default(), RendererKind::Software);
    }
}
