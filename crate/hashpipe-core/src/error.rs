use hashpipe_types::UnsupportedEncodingError;
use std::path::PathBuf;

/// Error returned by digest operations in this crate.
///
/// Nothing here is retried internally; hash engine state cannot be
/// rewound, so a failed digest operation must be restarted from scratch
/// by the caller.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    /// The byte source failed mid-stream. The returned future reports
    /// this instead of hanging.
    #[error("byte source failed: {0}")]
    Source(#[from] std::io::Error),

    /// The file could not be opened. Reported before any pipeline is
    /// constructed.
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    UnsupportedEncoding(#[from] UnsupportedEncodingError),

    /// Misuse: the digest was requested while the source still had
    /// bytes to deliver.
    #[error("digest requested before the source was fully consumed")]
    StillStreaming,

    /// Misuse: the digest was already extracted from this pipeline.
    #[error("digest already extracted from this pipeline")]
    AlreadyFinalized,
}
