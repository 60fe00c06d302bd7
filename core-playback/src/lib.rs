//! # Playback Variants Module
//!
//! Concrete variants for every media capability, plus the thin controllers
//! that label each demonstration.
//!
//! ## Overview
//!
//! | Module       | Role      | Variants                                   | Controller            |
//! |--------------|-----------|--------------------------------------------|-----------------------|
//! | [`source`]   | Adapter   | Local, Stream, Api                         | `MediaApp`            |
//! | [`render`]   | Bridge    | Hardware, Software                         | `AdvancedMediaPlayer` |
//! | [`player`]   | Decorator | Base + Subtitle, Equalizer, Watermark      | `MediaController`     |
//! | [`playlist`] | Composite | Track, Playlist                            | `PlaylistManager`     |
//! | [`remote`]   | Proxy     | RealRemoteMedia, RemoteMediaProxy          | `StreamController`    |
//!
//! Controllers write a section banner such as `[Adapter Pattern]` (preceded by
//! a blank line) and forward a single call to the capability they own.

pub mod error;
pub mod player;
pub mod playlist;
pub mod remote;
pub mod render;
pub mod source;

pub use error::{PlaybackError, Result};
pub use player::{
    build_chain, BaseMediaPlayer, EqualizerDecorator, MediaController, PlayerFeature,
    SubtitleDecorator, WatermarkDecorator,
};
pub use playlist::{Playlist, PlaylistManager, Track};
pub use remote::{CacheSlot, RealRemoteMedia, RemoteMediaProxy, StreamController};
pub use render::{AdvancedMediaPlayer, HardwareRenderer, RendererKind, SoftwareRenderer};
pub use source::{ApiSource, LocalSource, MediaApp, SourceKind, StreamSource};
