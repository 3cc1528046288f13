//! The catalog access contract consumed by the recommendation engine.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CandidateVideo, ChannelId, VideoId};

/// Read-only access to the video catalog.
///
/// The engine issues every fetch through this trait and treats the catalog
/// as opaque: ordering of returned lists is the provider's choice, timeouts
/// and retries are the provider's responsibility, and any error is degraded
/// to an empty contribution at the call site.
///
/// Implementations must be `Send + Sync` so one provider can serve the
/// concurrent per-pool fan-out of a request.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Keyword search, paged from 0.
    async fn search(&self, query: &str, page: u32) -> Result<Vec<CandidateVideo>>;

    /// Most recent videos of one channel.
    async fn channel_videos(&self, channel_id: &ChannelId) -> Result<Vec<CandidateVideo>>;

    /// Global trending listing.
    async fn trending(&self) -> Result<Vec<CandidateVideo>>;

    /// Generic recommended listing, used for later pages and as fallback.
    async fn recommended(&self) -> Result<Vec<CandidateVideo>>;

    /// Videos related to the given video.
    async fn related_videos(&self, video_id: &VideoId) -> Result<Vec<CandidateVideo>>;
}
