//! Media sources (adapter role).
//!
//! One uniform `connect` call adapted to three access methods.

use bridge_traits::error::Result as BridgeResult;
use bridge_traits::{write_banner, Source};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::debug;

use crate::error::Result;

/// Access method chosen for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// File on local storage
    #[default]
    Local,
    /// HLS stream
    Stream,
    /// Remote media API
    Api,
}

impl SourceKind {
    /// Case-insensitive exact match of `stream` / `api`; anything else,
    /// including unknown text, is `Local`.
    pub fn from_input(text: &str) -> Self {
        match text.to_lowercase().as_str() {
            "stream" => SourceKind::Stream,
            "api" => SourceKind::Api,
            _ => SourceKind::Local,
        }
    }

    /// Instantiate the matching variant.
    pub fn into_source(self) -> Box<dyn Source> {
        match self {
            SourceKind::Local => Box::new(LocalSource),
            SourceKind::Stream => Box::new(StreamSource),
            SourceKind::Api => Box::new(ApiSource),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Local => "local",
            SourceKind::Stream => "stream",
            SourceKind::Api => "api",
        }
    }
}

/// Opens a file from local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSource;

impl Source for LocalSource {
    fn connect(&self, media_name: &str, out: &mut dyn Write) -> BridgeResult<()> {
        writeln!(out, "Opening local file: {}", media_name)?;
        Ok(())
    }
}

/// Attaches to an HLS stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamSource;

impl Source for StreamSource {
    fn connect(&self, media_name: &str, out: &mut dyn Write) -> BridgeResult<()> {
        writeln!(out, "Accessing HLS stream: {}", media_name)?;
        Ok(())
    }
}

/// Requests media from a remote API.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiSource;

impl Source for ApiSource {
    fn connect(&self, media_name: &str, out: &mut dyn Write) -> BridgeResult<()> {
        writeln!(out, "Requesting media from remote API: {}", media_name)?;
        Ok(())
    }
}

/// Adapter-pattern controller: labels the section and forwards to its source.
pub struct MediaApp {
    source: Box<dyn Source>,
}

impl MediaApp {
    pub fn new(source: Box<dyn Source>) -> Self {
        Self { source }
    }

    pub fn play_media(&self, name: &str, out: &mut dyn Write) -> Result<()> {
        debug!(media = name, "Adapter demo");
        write_banner(out, "Adapter")?;
        self.source.connect(name, out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connect_line(kind: SourceKind) -> String {
        let mut out: Vec<u8> = Vec::new();
        kind.into_source().connect("clip.mp4", &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_from_input_recognized_tokens() {
        assert_eq!(SourceKind::from_input("stream"), SourceKind::Stream);
        assert_eq!(SourceKind::from_input("STREAM"), SourceKind::Stream);
        assert_eq!(SourceKind::from_input("api"), SourceKind::Api);
        assert_eq!(SourceKind::from_input("Api"), SourceKind::Api);
        assert_eq!(SourceKind::from_input("local"), SourceKind::Local);
        assert_eq!(SourceKind::from_input("LoCaL"), SourceKind::Local);
    }

    #[test]
    fn test_from_input_falls_back_to_local() {
        for text in ["xyz", "", "LOCAL ", " api", "stream\t", "apis"] {
            assert_eq!(SourceKind::from_input(text), SourceKind::Local, "{:?}", text);
        }
    }

    #[test]
    fn test_variant_lines() {
        assert_eq!(connect_line(SourceKind::Local), "Opening local file: clip.mp4\n");
        assert_eq!(connect_line(SourceKind::Stream), "Accessing HLS stream: clip.mp4\n");
        assert_eq!(
            connect_line(SourceKind::Api),
            "Requesting media from remote API: clip.mp4\n"
        );
    }

    #[test]
    fn test_media_app_prints_banner_first() {
        let app = MediaApp::new(Box::new(StreamSource));
        let mut out: Vec<u8> = Vec::new();
        app.play_media("live.m3u8", &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n[Adapter Pattern]\nAccessing HLS stream: live.m3u8\n"
        );
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SourceKind::Api).unwrap(), "\"api\"");
        assert_eq!(SourceKind::Stream.as_str(), "stream");
    }
}
