//! Media load/playback errors.

use std::path::PathBuf;

/// Why a playback element gave up on its source.
///
/// Variants mirror the error codes a host media element reports. The
/// controller treats them all the same way; the cause only ends up in logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("Fetching the media was aborted")]
    Aborted,

    #[error("Network error while fetching media: {message}")]
    Network { message: String },

    #[error("Media could not be decoded: {message}")]
    Decode { message: String },

    #[error("Media source not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Media source not supported: {path}")]
    SourceNotSupported { path: PathBuf },
}
