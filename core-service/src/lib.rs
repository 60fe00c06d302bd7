//! Interactive session for the media suite.
//!
//! Reads the user's choices from a line-oriented input, builds the matching
//! capability variants from `core-playback`, and writes every demonstration
//! to a single output sink. The binary drives [`MediaSuite`] over stdin and
//! stdout; tests drive it over in-memory buffers.

pub mod demo;
pub mod error;
pub mod prompt;
pub mod selection;
pub mod session;

pub use error::{Result, SessionError};
pub use prompt::PromptReader;
pub use session::{MediaSuite, SessionReport};
