//! # Sources Crate
//!
//! This crate implements candidate sourcing for the personalized feed.
//!
//! ## Components
//!
//! ### Discovery Source
//! Novelty and trend exposure:
//! - profile-keyword OR-group searches, bounded in call count
//! - trending listing on the first page, recommended listing on later pages
//!
//! ### Comfort Source
//! Direct history and subscription affinity:
//! - related videos of one randomly picked recent watch
//! - recent uploads of a random sample of subscribed channels
//!
//! All fetches of one pool run concurrently and are joined before pool
//! assembly; a failing fetch contributes an empty result and never aborts
//! its siblings. Pools are deduplicated by id, and an id present in both
//! pools stays in Discovery only.

pub mod comfort;
pub mod discovery;

use std::collections::HashSet;
use std::sync::Arc;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use catalog::{CandidateVideo, CatalogProvider, ChannelId, Subscription, VideoId, WatchRecord};
use profile::UserProfile;

// Re-export the sources
pub use comfort::ComfortSource;
pub use discovery::DiscoverySource;

/// Which pool a ranked sequence belongs to; also selects the scoring mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    Discovery,
    Comfort,
}

/// The two raw candidate pools of one request, already deduplicated and
/// overlap-resolved.
#[derive(Debug, Clone, Default)]
pub struct CandidatePools {
    pub discovery: Vec<CandidateVideo>,
    pub comfort: Vec<CandidateVideo>,
}

/// Everything the caller supplies for one recommendation request.
/// Histories are ordered most-recent-first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedRequest {
    #[serde(default)]
    pub search_history: Vec<String>,
    #[serde(default)]
    pub watch_history: Vec<WatchRecord>,
    #[serde(default)]
    pub subscribed_channels: Vec<Subscription>,
    #[serde(default)]
    pub preferred_genres: Vec<String>,
    #[serde(default)]
    pub preferred_channels: Vec<ChannelId>,
    #[serde(default)]
    pub page: u32,
}

/// Drives both sources against one catalog provider and resolves the
/// cross-pool overlap.
pub struct CandidateSourcer {
    provider: Arc<dyn CatalogProvider>,
    discovery: DiscoverySource,
    comfort: ComfortSource,
}

impl CandidateSourcer {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self {
            discovery: DiscoverySource::new(provider.clone()),
            comfort: ComfortSource::new(provider.clone()),
            provider,
        }
    }

    /// Gather both pools for one request.
    ///
    /// Falls back to the generic recommended listing when the profile and
    /// preferences yield no discovery queries and there is no history or
    /// subscription to comfort-source from.
    #[instrument(skip_all, fields(page = request.page))]
    pub async fn gather(
        &self,
        user_profile: &UserProfile,
        request: &FeedRequest,
        rng: &mut StdRng,
    ) -> CandidatePools {
        let queries = self
            .discovery
            .build_queries(user_profile, &request.preferred_genres);
        let has_comfort_signal =
            !request.watch_history.is_empty() || !request.subscribed_channels.is_empty();

        if queries.is_empty() && !has_comfort_signal {
            debug!("no interest signals at all, falling back to recommended listing");
            let fallback = match self.provider.recommended().await {
                Ok(videos) => videos,
                Err(err) => {
                    warn!(%err, "fallback recommended fetch failed");
                    Vec::new()
                }
            };
            return CandidatePools {
                discovery: dedup_by_id(fallback),
                comfort: Vec::new(),
            };
        }

        let (discovery, comfort) = tokio::join!(
            self.discovery.gather(&queries, request.page),
            self.comfort.gather(
                &request.watch_history,
                &request.subscribed_channels,
                &request.preferred_channels,
                rng,
            ),
        );

        // Discovery has precedence on id collisions: freshness wins ties.
        let discovery_ids: HashSet<&VideoId> = discovery.iter().map(|v| &v.id).collect();
        let comfort: Vec<CandidateVideo> = comfort
            .into_iter()
            .filter(|v| !discovery_ids.contains(&v.id))
            .collect();

        debug!(
            discovery = discovery.len(),
            comfort = comfort.len(),
            "assembled candidate pools"
        );
        CandidatePools { discovery, comfort }
    }
}

/// Deduplicate by video id, keeping the first occurrence in order.
pub fn dedup_by_id(videos: Vec<CandidateVideo>) -> Vec<CandidateVideo> {
    let mut seen: HashSet<VideoId> = HashSet::new();
    videos
        .into_iter()
        .filter(|video| seen.insert(video.id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use rand::SeedableRng;

    use catalog::CatalogError;
    use profile::{ProfileSignals, build_profile};

    /// Provider where one id is reachable through search and through a
    /// channel listing, so both pools would claim it.
    struct OverlappingProvider;

    fn upload(id: &str, title: &str) -> CandidateVideo {
        CandidateVideo::new(id, title, "chB", "Bread Lab")
    }

    #[async_trait]
    impl CatalogProvider for OverlappingProvider {
        async fn search(&self, _query: &str, _page: u32) -> catalog::Result<Vec<CandidateVideo>> {
            Ok(vec![upload("shared", "sourdough starter deep dive")])
        }

        async fn channel_videos(&self, _channel: &ChannelId) -> catalog::Result<Vec<CandidateVideo>> {
            Ok(vec![
                upload("shared", "sourdough starter deep dive"),
                upload("channel-only", "weekly bakery vlog"),
            ])
        }

        async fn trending(&self) -> catalog::Result<Vec<CandidateVideo>> {
            Ok(Vec::new())
        }

        async fn recommended(&self) -> catalog::Result<Vec<CandidateVideo>> {
            Ok(Vec::new())
        }

        async fn related_videos(&self, video_id: &VideoId) -> catalog::Result<Vec<CandidateVideo>> {
            Err(CatalogError::UnknownVideo(video_id.clone()))
        }
    }

    #[tokio::test]
    async fn test_gather_keeps_cross_pool_overlap_in_discovery_only() {
        let sourcer = CandidateSourcer::new(Arc::new(OverlappingProvider));
        let searches = vec!["sourdough".to_string()];
        let user_profile = build_profile(&ProfileSignals {
            search_history: &searches,
            watch_history: &[],
            subscribed_channels: &[],
        });
        let request = FeedRequest {
            search_history: searches.clone(),
            subscribed_channels: vec![Subscription {
                channel_id: "chB".to_string(),
                channel_name: "Bread Lab".to_string(),
            }],
            ..Default::default()
        };
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);

        let pools = sourcer.gather(&user_profile, &request, &mut rng).await;

        let discovery_ids: Vec<&str> = pools.discovery.iter().map(|v| v.id.as_str()).collect();
        let comfort_ids: Vec<&str> = pools.comfort.iter().map(|v| v.id.as_str()).collect();
        assert!(discovery_ids.contains(&"shared"));
        assert!(!comfort_ids.contains(&"shared"), "discovery precedence on id ties");
        assert!(comfort_ids.contains(&"channel-only"));
    }

    #[test]
    fn test_dedup_by_id_keeps_first_occurrence() {
        let videos = vec![
            CandidateVideo::new("a", "first", "ch1", "one"),
            CandidateVideo::new("b", "second", "ch2", "two"),
            CandidateVideo::new("a", "duplicate", "ch3", "three"),
        ];

        let deduped = dedup_by_id(videos);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].title, "first");
        assert_eq!(deduped[1].id, "b");
    }

    #[test]
    fn test_dedup_by_id_empty() {
        assert!(dedup_by_id(Vec::new()).is_empty());
    }
}
