//! # Playback Error Types
//!
//! Variants and controllers never fail on their own; the only failures are
//! those of the output sink they describe themselves to.

use bridge_traits::BridgeError;
use thiserror::Error;

/// Errors that can occur during playback operations.
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// A capability variant failed to write its description.
    #[error("Capability error: {0}")]
    Bridge(#[from] BridgeError),

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PlaybackError {
    /// Returns `true` if the output sink was closed by the reader
    /// (e.g. stdout piped into `head`).
    pub fn is_broken_pipe(&self) -> bool {
        let io = match self {
            PlaybackError::Bridge(BridgeError::Io(err)) | PlaybackError::IoError(err) => err,
            PlaybackError::Bridge(_) => return false,
        };
        io.kind() == std::io::ErrorKind::BrokenPipe
    }
}

/// Result type for playback operations.
pub type Result<T> = std::result::Result<T, PlaybackError>;
