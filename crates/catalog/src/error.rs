//! Error types for catalog access.

use thiserror::Error;

use crate::types::{ChannelId, VideoId};

/// Errors a catalog provider can surface.
///
/// The engine treats every variant the same way at fetch sites: log a
/// warning and contribute an empty result. The distinction matters to
/// providers and their callers, not to the ranking core.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The backing service could not be reached or answered abnormally.
    #[error("catalog backend unavailable: {0}")]
    Unavailable(String),

    /// Channel listing was requested for a channel the catalog doesn't know.
    #[error("unknown channel: {0}")]
    UnknownChannel(ChannelId),

    /// Related-video listing was requested for an unknown video.
    #[error("unknown video: {0}")]
    UnknownVideo(VideoId),

    /// A catalog snapshot file could not be read.
    #[error("failed to read catalog snapshot: {path}")]
    SnapshotRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A catalog snapshot file did not contain valid snapshot JSON.
    #[error("malformed catalog snapshot: {0}")]
    SnapshotFormat(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
