//! Core trait for the hard-filter pipeline.
//!
//! Hard filters run before scoring: an excluded candidate is never scored
//! at all, so NG content cannot surface on any score.

use anyhow::Result;

use catalog::CandidateVideo;

use crate::context::ScoringContext;

/// A composable hard filter over a candidate pool.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across concurrent requests
/// - Filters take ownership of the pool and return the surviving subset,
///   avoiding per-candidate cloning
pub trait Filter: Send + Sync {
    /// Name used in pipeline logging.
    fn name(&self) -> &str;

    /// Apply this filter, returning the candidates that survive.
    fn apply(
        &self,
        candidates: Vec<CandidateVideo>,
        ctx: &ScoringContext<'_>,
    ) -> Result<Vec<CandidateVideo>>;
}
