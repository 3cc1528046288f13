//! Filter excluding individually hidden videos.

use anyhow::Result;

use catalog::CandidateVideo;

use crate::context::ScoringContext;
use crate::traits::Filter;

pub struct HiddenVideoFilter;

impl Filter for HiddenVideoFilter {
    fn name(&self) -> &str {
        "HiddenVideoFilter"
    }

    fn apply(
        &self,
        candidates: Vec<CandidateVideo>,
        ctx: &ScoringContext<'_>,
    ) -> Result<Vec<CandidateVideo>> {
        let filtered = candidates
            .into_iter()
            .filter(|video| !ctx.hidden_videos.contains(&video.id))
            .collect();
        Ok(filtered)
    }
}
