use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Input ended before the prompt was answered: {prompt}")]
    InputExhausted { prompt: String },

    #[error("Playback error: {0}")]
    Playback(#[from] core_playback::PlaybackError),

    #[error("Configuration error: {0}")]
    Config(#[from] core_runtime::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Returns `true` if stdout was closed by the reader.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            SessionError::Playback(err) => err.is_broken_pipe(),
            SessionError::Io(err) => err.kind() == std::io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
