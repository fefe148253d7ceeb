use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddsubsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported language code: {0}")]
    UnsupportedLanguage(String),

    #[error("mismatched file counts: {videos} video files but {subtitles} subtitle files")]
    CountMismatch { videos: usize, subtitles: usize },

    #[error("cancelled by user")]
    Cancelled,

    #[error("Muxing error: {0}")]
    Muxer(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AddsubsError {
    /// Process exit code reported for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            AddsubsError::UnsupportedLanguage(_) => 1,
            AddsubsError::CountMismatch { .. } => 2,
            AddsubsError::Cancelled => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AddsubsError>;
