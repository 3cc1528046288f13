//! End-to-end orchestration of one recommendation request.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};

use catalog::{CandidateVideo, CatalogProvider, PreferenceSnapshot};
use profile::{ProfileSignals, build_profile};
use ranking::{Ranker, ScoringContext};
use sources::{CandidateSourcer, FeedRequest, PoolKind};

use crate::config::FeedConfig;
use crate::mixer::mix_feed;

/// Runs the full pipeline: profile, source, rank, mix.
///
/// Holds no per-request state, so one orchestrator can serve many
/// concurrent requests over the same provider.
pub struct FeedOrchestrator {
    sourcer: CandidateSourcer,
    ranker: Ranker,
    config: FeedConfig,
}

impl FeedOrchestrator {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self::with_config(provider, FeedConfig::default())
    }

    pub fn with_config(provider: Arc<dyn CatalogProvider>, config: FeedConfig) -> Self {
        Self {
            sourcer: CandidateSourcer::new(provider),
            ranker: Ranker::new(),
            config: config.sanitized(),
        }
    }

    /// Produce one personalized feed page.
    ///
    /// Catalog failures inside the sources degrade to smaller pools rather
    /// than failing the request; the only hard errors here come from the
    /// filter stage.
    #[instrument(skip_all, fields(page = request.page))]
    pub async fn recommend(
        &self,
        request: &FeedRequest,
        prefs: &PreferenceSnapshot,
    ) -> Result<Vec<CandidateVideo>> {
        let started = Instant::now();

        let profile = build_profile(&ProfileSignals {
            search_history: &request.search_history,
            watch_history: &request.watch_history,
            subscribed_channels: &request.subscribed_channels,
        });
        info!(keywords = profile.keywords.len(), "built user profile");

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let pools = self.sourcer.gather(&profile, request, &mut rng).await;
        let ctx = ScoringContext::new(&profile, prefs, &request.watch_history);

        let discovery = self
            .ranker
            .rank(pools.discovery, PoolKind::Discovery, &ctx, &mut rng)?;
        let comfort = self
            .ranker
            .rank(pools.comfort, PoolKind::Comfort, &ctx, &mut rng)?;

        let feed = mix_feed(
            discovery,
            comfort,
            self.config.discovery_ratio,
            self.config.max_feed_len,
        );

        info!(
            feed_len = feed.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "assembled feed"
        );
        Ok(feed)
    }
}
