//! # Interactive Session
//!
//! Runs the scripted walkthrough: six prompts, five demonstrations, one
//! shared renderer.
//!
//! ## Order
//!
//! 1. Title line, source prompt, name prompt
//! 2. Adapter demo with the chosen source
//! 3. Hardware prompt, Bridge demo with the chosen renderer
//! 4. Three feature prompts, Decorator demo with the same renderer
//! 5. Proxy demo, only when the source answer is `api` in any case
//! 6. Composite demo with the fixed playlist
//!
//! Prompts are written without a newline and flushed before each read.

use std::io::{BufRead, Write};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use core_playback::{
    build_chain, AdvancedMediaPlayer, BaseMediaPlayer, MediaApp, MediaController, PlayerFeature,
    PlaylistManager, RemoteMediaProxy, RendererKind, SourceKind, StreamController,
};
use core_runtime::config::{EndOfInputPolicy, SuiteConfig};
use serde::Serialize;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::demo::demo_playlist;
use crate::error::{Result, SessionError};
use crate::prompt::PromptReader;
use crate::selection::{
    feature_prompt, is_affirmative, renderer_choice, requests_proxy, source_choice, HARDWARE_PROMPT,
    NAME_PROMPT, SOURCE_PROMPT,
};

/// What a finished session chose and did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub source: SourceKind,
    pub media_name: String,
    pub renderer: RendererKind,
    pub features: Vec<PlayerFeature>,
    pub proxy_ran: bool,
    /// Prompts answered with the default because input had ended.
    pub defaulted_prompts: usize,
}

/// Entry point for one interactive walkthrough.
///
/// ```
/// use core_runtime::config::SuiteConfig;
/// use core_service::MediaSuite;
///
/// let suite = MediaSuite::new(SuiteConfig::default()).unwrap();
/// let mut out: Vec<u8> = Vec::new();
/// let report = suite
///     .run(&b"local\nsong.mp3\nno\nno\nno\nno\n"[..], &mut out)
///     .unwrap();
/// assert!(!report.proxy_ran);
/// ```
#[derive(Debug, Clone)]
pub struct MediaSuite {
    config: SuiteConfig,
}

impl MediaSuite {
    pub fn new(config: SuiteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Run the whole session against `input` and `output`.
    ///
    /// Each call is independent; no state carries over between runs.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<SessionReport> {
        let session_id = Uuid::new_v4();
        let started_at = Utc::now();
        let span = info_span!("session", id = %session_id);
        let _guard = span.enter();
        info!("Session started");

        let out: &mut dyn Write = &mut output;
        let mut prompts = Prompts::new(input, self.config.end_of_input);

        writeln!(out, "{}", self.config.title)?;

        let source_answer = prompts.ask(out, SOURCE_PROMPT)?;
        let source = source_choice(&source_answer);
        let media_name = prompts.ask(out, NAME_PROMPT)?;
        debug!(source = source.as_str(), media = %media_name, "Source selected");

        MediaApp::new(source.into_source()).play_media(&media_name, out)?;

        let renderer_kind = renderer_choice(&prompts.ask(out, HARDWARE_PROMPT)?);
        let renderer = renderer_kind.into_renderer();
        debug!(renderer = ?renderer_kind, "Renderer selected");

        AdvancedMediaPlayer::new(Arc::clone(&renderer)).play(&media_name, out)?;

        let mut features = Vec::new();
        for feature in PlayerFeature::ALL {
            if is_affirmative(&prompts.ask(out, feature_prompt(feature))?) {
                features.push(feature);
            }
        }
        debug!(?features, "Features selected");

        let base = Box::new(BaseMediaPlayer::new(media_name.as_str(), renderer));
        MediaController::new(build_chain(base, &features)).start_play(out)?;

        let proxy_ran = requests_proxy(&source_answer);
        if proxy_ran {
            StreamController::new(Box::new(RemoteMediaProxy::new()))
                .play_stream(&media_name, out)?;
        }

        let playlist = demo_playlist(&media_name, &self.config.playlist);
        PlaylistManager::new(Box::new(playlist)).show_all(out)?;
        out.flush()?;

        let report = SessionReport {
            session_id,
            started_at,
            finished_at: Utc::now(),
            source,
            media_name,
            renderer: renderer_kind,
            features,
            proxy_ran,
            defaulted_prompts: prompts.defaulted,
        };

        match serde_json::to_string(&report) {
            Ok(json) => info!(report = %json, "Session finished"),
            Err(e) => warn!(error = %e, "Session finished; report not serializable"),
        }

        Ok(report)
    }
}

/// Applies the end-of-input policy on top of [`PromptReader`].
struct Prompts<R> {
    reader: PromptReader<R>,
    policy: EndOfInputPolicy,
    defaulted: usize,
}

impl<R: BufRead> Prompts<R> {
    fn new(input: R, policy: EndOfInputPolicy) -> Self {
        Self {
            reader: PromptReader::new(input),
            policy,
            defaulted: 0,
        }
    }

    fn ask(&mut self, out: &mut dyn Write, prompt: &str) -> Result<String> {
        if let Some(answer) = self.reader.ask(out, prompt)? {
            return Ok(answer);
        }

        match self.policy {
            EndOfInputPolicy::Strict => Err(SessionError::InputExhausted {
                prompt: prompt.trim_end_matches([':', ' ']).to_string(),
            }),
            EndOfInputPolicy::UseDefault => {
                warn!(prompt, "Input ended; using the default answer");
                self.defaulted += 1;
                Ok(String::new())
            }
        }
    }
}
