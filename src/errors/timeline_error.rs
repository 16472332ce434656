use std::path::PathBuf;

use thiserror::Error;

#[doc = r#"
    Every failure the chart builder and the notifier can report.

    Nothing recovers locally: each variant aborts the running binary with a non-zero exit,
    and the external scheduler decides whether the run is attempted again.
"#]
#[derive(Debug, Error)]
pub enum TimelineError {
    /// Missing or invalid input data or credentials.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("i/o error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The SMTP server rejected the login.
    #[error("smtp authentication rejected: {0}")]
    Authentication(String),

    /// Network, TLS or any other transport level failure.
    #[error("smtp connection failed: {0}")]
    Connection(String),

    #[error("chart rendering failed: {0}")]
    Render(String),
}

impl TimelineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TimelineError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, TimelineError::Configuration(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, TimelineError::Io { .. })
    }
}
