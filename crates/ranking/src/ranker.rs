//! The Ranker: filter, score, sort, diversify one pool.

use anyhow::Result;
use rand::rngs::StdRng;
use rayon::prelude::*;
use tracing::{debug, instrument};

use catalog::CandidateVideo;
use sources::PoolKind;

use crate::context::ScoringContext;
use crate::diversity::{COMFORT_CHANNEL_CAP, DISCOVERY_CHANNEL_CAP, apply_channel_cap};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{HiddenVideoFilter, NgChannelFilter, NgKeywordFilter};
use crate::score::{apply_jitter, score_candidate};

/// Ranks one candidate pool. Score components are computed in parallel;
/// jitter draws run sequentially over the injected rng so a fixed seed
/// reproduces the exact output order.
pub struct Ranker {
    filters: FilterPipeline,
    discovery_channel_cap: usize,
    comfort_channel_cap: usize,
}

impl Ranker {
    pub fn new() -> Self {
        Self {
            filters: FilterPipeline::new()
                .add_filter(NgKeywordFilter)
                .add_filter(NgChannelFilter)
                .add_filter(HiddenVideoFilter),
            discovery_channel_cap: DISCOVERY_CHANNEL_CAP,
            comfort_channel_cap: COMFORT_CHANNEL_CAP,
        }
    }

    /// Configure the discovery-mode per-channel cap.
    pub fn with_discovery_channel_cap(mut self, cap: usize) -> Self {
        self.discovery_channel_cap = cap;
        self
    }

    /// Configure the comfort-mode per-channel cap.
    pub fn with_comfort_channel_cap(mut self, cap: usize) -> Self {
        self.comfort_channel_cap = cap;
        self
    }

    /// Filter, score, sort descending, and diversity-cap one pool.
    #[instrument(skip_all, fields(mode = ?mode, input = pool.len()))]
    pub fn rank(
        &self,
        pool: Vec<CandidateVideo>,
        mode: PoolKind,
        ctx: &ScoringContext<'_>,
        rng: &mut StdRng,
    ) -> Result<Vec<CandidateVideo>> {
        let surviving = self.filters.apply(pool, ctx)?;

        let mut scored: Vec<(CandidateVideo, f64)> = surviving
            .into_par_iter()
            .map(|video| {
                let score = score_candidate(&video, mode, ctx);
                (video, score)
            })
            .collect();

        for entry in &mut scored {
            entry.1 = apply_jitter(entry.1, rng);
        }

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let cap = match mode {
            PoolKind::Discovery => self.discovery_channel_cap,
            PoolKind::Comfort => self.comfort_channel_cap,
        };
        let ranked = apply_channel_cap(scored.into_iter().map(|(v, _)| v).collect(), cap);
        debug!(output = ranked.len(), "ranked pool");
        Ok(ranked)
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}
