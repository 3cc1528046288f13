//! The FilterPipeline chains hard filters in order.
//!
//! ## Usage
//! ```ignore
//! let pipeline = FilterPipeline::new()
//!     .add_filter(NgKeywordFilter)
//!     .add_filter(NgChannelFilter)
//!     .add_filter(HiddenVideoFilter);
//!
//! let surviving = pipeline.apply(pool, &ctx)?;
//! ```

use anyhow::Result;
use tracing::debug;

use catalog::CandidateVideo;

use crate::context::ScoringContext;
use crate::traits::Filter;

pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence.
    pub fn apply(
        &self,
        candidates: Vec<CandidateVideo>,
        ctx: &ScoringContext<'_>,
    ) -> Result<Vec<CandidateVideo>> {
        let mut current = candidates;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, ctx)?;
            debug!(
                filter = filter.name(),
                before,
                after = current.len(),
                "applied hard filter"
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{NgChannelFilter, NgKeywordFilter};
    use catalog::PreferenceSnapshot;
    use profile::UserProfile;

    #[test]
    fn test_empty_pipeline_passes_everything() {
        let profile = UserProfile::default();
        let ctx = ScoringContext::new(&profile, &PreferenceSnapshot::default(), &[]);
        let pipeline = FilterPipeline::new();

        let candidates = vec![
            CandidateVideo::new("v1", "one", "ch1", "one"),
            CandidateVideo::new("v2", "two", "ch2", "two"),
        ];
        let surviving = pipeline.apply(candidates, &ctx).unwrap();
        assert_eq!(surviving.len(), 2);
    }

    #[test]
    fn test_filters_compound() {
        let profile = UserProfile::default();
        let prefs = PreferenceSnapshot {
            ng_keywords: vec!["spoiler".to_string()],
            ng_channels: ["ch2".to_string()].into(),
            ..Default::default()
        };
        let ctx = ScoringContext::new(&profile, &prefs, &[]);

        let pipeline = FilterPipeline::new()
            .add_filter(NgKeywordFilter)
            .add_filter(NgChannelFilter);

        let candidates = vec![
            CandidateVideo::new("v1", "finale SPOILER recap", "ch1", "one"),
            CandidateVideo::new("v2", "fine title", "ch2", "two"),
            CandidateVideo::new("v3", "also fine", "ch3", "three"),
        ];
        let surviving = pipeline.apply(candidates, &ctx).unwrap();
        assert_eq!(surviving.len(), 1);
        assert_eq!(surviving[0].id, "v3");
    }
}
