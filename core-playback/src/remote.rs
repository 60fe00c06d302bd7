//! Remote streaming with a single-slot caching proxy.
//!
//! [`RemoteMediaProxy`] memoizes the last requested file name together with
//! the [`RealRemoteMedia`] handle opened for it. A repeated request reuses the
//! handle; any other request evicts the slot and opens a new one.

use std::io::Write;

use bridge_traits::error::Result as BridgeResult;
use bridge_traits::{write_banner, RemoteMedia};
use tracing::{debug, trace};

use crate::error::Result;

/// Handle to the real remote endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RealRemoteMedia {
    handle_id: u64,
}

impl RealRemoteMedia {
    pub fn new(handle_id: u64) -> Self {
        Self { handle_id }
    }

    /// Sequence number of this handle within its proxy (first is 1).
    pub fn handle_id(&self) -> u64 {
        self.handle_id
    }
}

impl RemoteMedia for RealRemoteMedia {
    fn play_stream(&mut self, file_name: &str, out: &mut dyn Write) -> BridgeResult<()> {
        writeln!(out, "Streaming remote media: {}", file_name)?;
        Ok(())
    }
}

/// Proxy cache state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CacheSlot {
    #[default]
    Empty,
    Cached {
        name: String,
        handle: RealRemoteMedia,
    },
}

impl CacheSlot {
    fn holds(&self, request: &str) -> bool {
        matches!(self, CacheSlot::Cached { name, .. } if name == request)
    }
}

/// Caching proxy in front of [`RealRemoteMedia`].
#[derive(Debug, Default)]
pub struct RemoteMediaProxy {
    slot: CacheSlot,
    handles_opened: u64,
}

impl RemoteMediaProxy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name currently held in the cache slot.
    pub fn cached_name(&self) -> Option<&str> {
        match &self.slot {
            CacheSlot::Empty => None,
            CacheSlot::Cached { name, .. } => Some(name),
        }
    }

    /// Total number of real handles this proxy has opened.
    pub fn handles_opened(&self) -> u64 {
        self.handles_opened
    }

    pub fn slot(&self) -> &CacheSlot {
        &self.slot
    }

    fn open_handle(&mut self) -> RealRemoteMedia {
        self.handles_opened += 1;
        RealRemoteMedia::new(self.handles_opened)
    }
}

impl RemoteMedia for RemoteMediaProxy {
    fn play_stream(&mut self, file_name: &str, out: &mut dyn Write) -> BridgeResult<()> {
        if self.slot.holds(file_name) {
            trace!(file = file_name, "Proxy cache hit");
            writeln!(out, "Using cached version for: {}", file_name)?;
        } else {
            trace!(file = file_name, evicted = ?self.cached_name(), "Proxy cache miss");
            writeln!(out, "Caching remote stream for: {}", file_name)?;
            let handle = self.open_handle();
            self.slot = CacheSlot::Cached {
                name: file_name.to_string(),
                handle,
            };
        }

        if let CacheSlot::Cached { handle, .. } = &mut self.slot {
            handle.play_stream(file_name, out)?;
        }
        Ok(())
    }
}

/// Proxy-pattern controller.
pub struct StreamController {
    stream: Box<dyn RemoteMedia>,
}

impl StreamController {
    pub fn new(stream: Box<dyn RemoteMedia>) -> Self {
        Self { stream }
    }

    pub fn play_stream(&mut self, name: &str, out: &mut dyn Write) -> Result<()> {
        debug!(media = name, "Proxy demo");
        write_banner(out, "Proxy")?;
        self.stream.play_stream(name, out)?;
        Ok(())
    }
}
