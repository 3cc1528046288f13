//! Value types handed across the catalog boundary.
//!
//! These are externally-owned values: the engine never mutates them and
//! never persists them. Numeric fields (views, upload age, duration) arrive
//! as display text and are parsed leniently by the [`crate::parser`] module.

use serde::{Deserialize, Serialize};

/// Opaque catalog video id.
pub type VideoId = String;

/// Opaque catalog channel id.
pub type ChannelId = String;

/// A video as returned by the catalog provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateVideo {
    pub id: VideoId,
    pub title: String,
    pub channel_id: ChannelId,
    pub channel_name: String,

    /// Description snippet; may be empty.
    #[serde(default)]
    pub description: String,

    /// Raw view-count text, e.g. `"1.2M views"` or `"12,345 回視聴"`.
    #[serde(default)]
    pub view_count_text: String,

    /// Raw upload-age text, e.g. `"3 weeks ago"`.
    #[serde(default)]
    pub published_text: String,

    /// Raw duration text, e.g. `"12:34"`.
    #[serde(default)]
    pub duration_text: String,
}

/// One entry of the viewer's watch history, most-recent-first on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchRecord {
    pub video_id: VideoId,
    pub title: String,
    pub channel_id: ChannelId,
    pub channel_name: String,
}

/// A channel the viewer is subscribed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub channel_id: ChannelId,
    pub channel_name: String,
}

impl CandidateVideo {
    /// Convenience constructor used heavily in tests and fixtures.
    pub fn new(
        id: impl Into<VideoId>,
        title: impl Into<String>,
        channel_id: impl Into<ChannelId>,
        channel_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            channel_id: channel_id.into(),
            channel_name: channel_name.into(),
            description: String::new(),
            view_count_text: String::new(),
            published_text: String::new(),
            duration_text: String::new(),
        }
    }
}
