//! Nested playlists (composite role).
//!
//! A [`Playlist`] exclusively owns its children, so the structure is always a
//! tree. Showing a node walks it depth-first in pre-order, children in
//! insertion order.

use std::io::Write;

use bridge_traits::error::Result as BridgeResult;
use bridge_traits::{write_banner, MediaItem};
use tracing::debug;

use crate::error::Result;

/// Leaf node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    title: String,
}

impl Track {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl MediaItem for Track {
    fn title(&self) -> &str {
        &self.title
    }

    fn show_info(&self, out: &mut dyn Write) -> BridgeResult<()> {
        writeln!(out, "Track: {}", self.title)?;
        Ok(())
    }
}

/// Composite node holding an ordered list of children.
pub struct Playlist {
    title: String,
    items: Vec<Box<dyn MediaItem>>,
}

impl Playlist {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Append `item` after the existing children. Duplicates are allowed.
    pub fn add(&mut self, item: impl MediaItem + 'static) {
        self.items.push(Box::new(item));
    }

    /// Builder-style [`add`](Self::add).
    pub fn with(mut self, item: impl MediaItem + 'static) -> Self {
        self.add(item);
        self
    }

    /// Direct children, in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &dyn MediaItem> {
        self.items.iter().map(|item| &**item)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl MediaItem for Playlist {
    fn title(&self) -> &str {
        &self.title
    }

    fn show_info(&self, out: &mut dyn Write) -> BridgeResult<()> {
        writeln!(out, "Playlist: {}", self.title)?;
        for item in &self.items {
            item.show_info(out)?;
        }
        Ok(())
    }

    fn track_count(&self) -> usize {
        self.items.iter().map(|item| item.track_count()).sum()
    }
}

/// Composite-pattern controller.
pub struct PlaylistManager {
    root: Box<dyn MediaItem>,
}

impl PlaylistManager {
    pub fn new(root: Box<dyn MediaItem>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &dyn MediaItem {
        &*self.root
    }

    pub fn show_all(&self, out: &mut dyn Write) -> Result<()> {
        debug!(
            playlist = self.root.title(),
            tracks = self.root.track_count(),
            "Composite demo"
        );
        write_banner(out, "Composite")?;
        self.root.show_info(out)?;
        Ok(())
    }
}
