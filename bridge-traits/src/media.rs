//! Media capability traits.
//!
//! Each trait is a single-operation contract with several interchangeable
//! variants. Variants never print directly to the process stdout: every
//! operation receives the output sink it must describe itself to, which keeps
//! the transcript observable by hosts and tests alike.
//!
//! | Capability      | Operation        | Variants (in `core-playback`)        |
//! |-----------------|------------------|--------------------------------------|
//! | [`Source`]      | `connect`        | Local, Stream, Api                   |
//! | [`Renderer`]    | `render`         | Hardware, Software                   |
//! | [`Player`]      | `play`           | Base + Subtitle/Equalizer/Watermark  |
//! | [`MediaItem`]   | `show_info`      | Track, Playlist                      |
//! | [`RemoteMedia`] | `play_stream`    | RealRemoteMedia, RemoteMediaProxy    |

use std::io::Write;

use crate::error::Result;

/// Access method for a media asset (local file, HLS stream, remote API).
pub trait Source: Send + Sync {
    /// Describe how `media_name` is reached.
    fn connect(&self, media_name: &str, out: &mut dyn Write) -> Result<()>;
}

/// Rendering technique used for a media asset.
///
/// This is the implementor side of the bridge: player abstractions hold a
/// `Renderer` and delegate to it without knowing which variant it is.
pub trait Renderer: Send + Sync {
    fn render(&self, media_name: &str, out: &mut dyn Write) -> Result<()>;
}

/// Something that can be played. Decorators wrap another `Player`.
pub trait Player: Send + Sync {
    fn play(&self, out: &mut dyn Write) -> Result<()>;
}

/// Node of a playlist tree.
pub trait MediaItem: Send + Sync {
    /// Display title of the node.
    fn title(&self) -> &str;

    /// Describe this node and, for composites, all descendants in pre-order.
    fn show_info(&self, out: &mut dyn Write) -> Result<()>;

    /// Number of leaf tracks at or below this node.
    fn track_count(&self) -> usize {
        1
    }
}

/// Remote streaming endpoint.
///
/// Takes `&mut self` so caching implementations can update their state.
pub trait RemoteMedia: Send + Sync {
    fn play_stream(&mut self, file_name: &str, out: &mut dyn Write) -> Result<()>;
}

/// Write a pattern banner preceded by a blank line, e.g. `\n[Bridge Pattern]`.
pub fn write_banner(out: &mut dyn Write, pattern: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "[{} Pattern]", pattern)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf;

    impl MediaItem for Leaf {
        fn title(&self) -> &str {
            "leaf"
        }

        fn show_info(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "leaf")?;
            Ok(())
        }
    }

    #[test]
    fn test_write_banner() {
        let mut out: Vec<u8> = Vec::new();
        write_banner(&mut out, "Adapter").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\n[Adapter Pattern]\n");
    }

    #[test]
    fn test_default_track_count() {
        assert_eq!(Leaf.track_count(), 1);
    }
}
