//! Comfort Source - History and Subscription Affinity
//!
//! Builds the in-comfort candidate pool:
//! - the related-video listing of one video drawn at random from the most
//!   recent watch-history window
//! - the recent uploads of a random sample of subscribed (or explicitly
//!   preferred) channels, capped per channel
//!
//! Sampling is resolved synchronously through the injected rng before any
//! fetch starts, then all fetches run concurrently. A failing fetch
//! contributes an empty result.

use std::sync::Arc;

use futures::future::join_all;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument, warn};

use catalog::{CandidateVideo, CatalogProvider, ChannelId, Subscription, VideoId, WatchRecord};

use crate::dedup_by_id;

/// How far back into watch history the related-video seed may come from.
const HISTORY_WINDOW: usize = 20;

/// Channel sample bounds per request.
const MIN_CHANNEL_SAMPLE: usize = 2;
const MAX_CHANNEL_SAMPLE: usize = 5;

/// Most recent uploads kept per sampled channel.
const PER_CHANNEL_CAP: usize = 10;

/// Comfort source generates affinity candidates from history and
/// subscriptions.
pub struct ComfortSource {
    provider: Arc<dyn CatalogProvider>,
}

impl ComfortSource {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    /// Fetch the comfort pool for one request.
    #[instrument(skip_all, fields(history = watch_history.len(), subscriptions = subscriptions.len()))]
    pub async fn gather(
        &self,
        watch_history: &[WatchRecord],
        subscriptions: &[Subscription],
        preferred_channels: &[ChannelId],
        rng: &mut StdRng,
    ) -> Vec<CandidateVideo> {
        let related_seed = pick_related_seed(watch_history, rng);
        let sampled_channels = sample_channels(subscriptions, preferred_channels, rng);

        let related = async {
            match &related_seed {
                Some(video_id) => self.fetch_related(video_id).await,
                None => Vec::new(),
            }
        };
        let channels = join_all(
            sampled_channels
                .iter()
                .map(|channel_id| self.fetch_channel(channel_id)),
        );
        let (related, channel_batches) = tokio::join!(related, channels);

        let mut merged = related;
        for mut batch in channel_batches {
            batch.truncate(PER_CHANNEL_CAP);
            merged.extend(batch);
        }
        let pool = dedup_by_id(merged);
        debug!(candidates = pool.len(), "gathered comfort pool");
        pool
    }

    async fn fetch_related(&self, video_id: &VideoId) -> Vec<CandidateVideo> {
        match self.provider.related_videos(video_id).await {
            Ok(videos) => videos,
            Err(err) => {
                warn!(video_id, %err, "related fetch failed, contributing nothing");
                Vec::new()
            }
        }
    }

    async fn fetch_channel(&self, channel_id: &ChannelId) -> Vec<CandidateVideo> {
        match self.provider.channel_videos(channel_id).await {
            Ok(videos) => videos,
            Err(err) => {
                warn!(channel_id, %err, "channel fetch failed, contributing nothing");
                Vec::new()
            }
        }
    }
}

fn pick_related_seed(watch_history: &[WatchRecord], rng: &mut StdRng) -> Option<VideoId> {
    let window: Vec<&WatchRecord> = watch_history.iter().take(HISTORY_WINDOW).collect();
    window.choose(rng).map(|record| record.video_id.clone())
}

fn sample_channels(
    subscriptions: &[Subscription],
    preferred_channels: &[ChannelId],
    rng: &mut StdRng,
) -> Vec<ChannelId> {
    let mut pool: Vec<ChannelId> = subscriptions
        .iter()
        .map(|s| s.channel_id.clone())
        .collect();
    for channel_id in preferred_channels {
        if !pool.contains(channel_id) {
            pool.push(channel_id.clone());
        }
    }

    let sample_size = if pool.len() <= MIN_CHANNEL_SAMPLE {
        pool.len()
    } else {
        rng.random_range(MIN_CHANNEL_SAMPLE..=MAX_CHANNEL_SAMPLE.min(pool.len()))
    };
    pool.choose_multiple(rng, sample_size).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::StaticCatalog;
    use rand::SeedableRng;

    fn channel_upload(id: &str, channel: &str, age: &str) -> CandidateVideo {
        let mut video = CandidateVideo::new(id, format!("upload {id}"), channel, channel);
        video.published_text = age.to_string();
        video.view_count_text = "1,000 views".to_string();
        video
    }

    fn watch(video_id: &str, channel: &str) -> WatchRecord {
        WatchRecord {
            video_id: video_id.to_string(),
            title: format!("watched {video_id}"),
            channel_id: channel.to_string(),
            channel_name: channel.to_string(),
        }
    }

    fn subscription(channel: &str) -> Subscription {
        Subscription {
            channel_id: channel.to_string(),
            channel_name: channel.to_string(),
        }
    }

    #[test]
    fn test_sample_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let subscriptions: Vec<Subscription> =
            (0..10).map(|i| subscription(&format!("ch{i}"))).collect();

        for _ in 0..50 {
            let sampled = sample_channels(&subscriptions, &[], &mut rng);
            assert!(sampled.len() >= MIN_CHANNEL_SAMPLE);
            assert!(sampled.len() <= MAX_CHANNEL_SAMPLE);
        }
    }

    #[test]
    fn test_small_pools_sampled_whole() {
        let mut rng = StdRng::seed_from_u64(7);
        let subscriptions = vec![subscription("only")];
        let sampled = sample_channels(&subscriptions, &[], &mut rng);
        assert_eq!(sampled, vec!["only".to_string()]);
    }

    #[test]
    fn test_preferred_channels_join_the_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let preferred = vec!["favorite".to_string()];
        let sampled = sample_channels(&[], &preferred, &mut rng);
        assert_eq!(sampled, vec!["favorite".to_string()]);
    }

    #[test]
    fn test_related_seed_stays_within_window() {
        let mut rng = StdRng::seed_from_u64(7);
        let history: Vec<WatchRecord> = (0..40)
            .map(|i| watch(&format!("v{i}"), "ch"))
            .collect();

        for _ in 0..50 {
            let seed = pick_related_seed(&history, &mut rng).unwrap();
            let index: usize = seed.trim_start_matches('v').parse().unwrap();
            assert!(index < HISTORY_WINDOW);
        }
    }

    #[tokio::test]
    async fn test_gather_merges_related_and_channel_uploads() {
        let mut watched = channel_upload("seed", "chA", "2 weeks ago");
        watched.title = "climbing granite highball".to_string();
        let mut related = channel_upload("rel", "chA", "1 week ago");
        related.title = "climbing limestone".to_string();
        let upload = channel_upload("up1", "chB", "1 day ago");

        let catalog = StaticCatalog::new(vec![watched, related, upload]);
        let source = ComfortSource::new(Arc::new(catalog));
        let mut rng = StdRng::seed_from_u64(3);

        let history = vec![watch("seed", "chA")];
        let subscriptions = vec![subscription("chB")];
        let pool = source.gather(&history, &subscriptions, &[], &mut rng).await;

        let ids: Vec<&str> = pool.iter().map(|v| v.id.as_str()).collect();
        assert!(ids.contains(&"rel"), "related video expected in pool");
        assert!(ids.contains(&"up1"), "channel upload expected in pool");
    }

    #[tokio::test]
    async fn test_failing_related_fetch_degrades_to_channel_uploads() {
        // seed id is unknown to the catalog so related_videos errors
        let upload = channel_upload("up1", "chB", "1 day ago");
        let catalog = StaticCatalog::new(vec![upload]);
        let source = ComfortSource::new(Arc::new(catalog));
        let mut rng = StdRng::seed_from_u64(3);

        let history = vec![watch("gone", "chA")];
        let subscriptions = vec![subscription("chB")];
        let pool = source.gather(&history, &subscriptions, &[], &mut rng).await;

        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].id, "up1");
    }
}
