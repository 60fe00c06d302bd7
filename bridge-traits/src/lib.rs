//! # Media Capability Traits
//!
//! Capability contracts shared by the media suite crates.
//!
//! ## Overview
//!
//! Each trait represents one capability with several interchangeable
//! variants. Concrete variants live in `core-playback`; this crate only
//! defines the seams so that abstractions (players, controllers) and their
//! implementations (sources, renderers, remote endpoints) can vary
//! independently.
//!
//! ## Traits
//!
//! - [`Source`](media::Source) - Connect to a media asset
//! - [`Renderer`](media::Renderer) - Render a media asset
//! - [`Player`](media::Player) - Play, optionally decorated
//! - [`MediaItem`](media::MediaItem) - Playlist tree node
//! - [`RemoteMedia`](media::RemoteMedia) - Remote streaming endpoint
//!
//! ## Error Handling
//!
//! All traits use [`BridgeError`](error::BridgeError). Variants only ever fail
//! when their output sink fails, which surfaces as `BridgeError::Io`.
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` so hosts can move capability handles
//! freely, although the suite itself runs on a single thread.

pub mod error;
pub mod media;

pub use error::BridgeError;
pub use media::{write_banner, MediaItem, Player, RemoteMedia, Renderer, Source};
