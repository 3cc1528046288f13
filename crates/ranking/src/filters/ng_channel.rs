//! Filter excluding candidates from blocked channels.

use anyhow::Result;

use catalog::CandidateVideo;

use crate::context::ScoringContext;
use crate::traits::Filter;

pub struct NgChannelFilter;

impl Filter for NgChannelFilter {
    fn name(&self) -> &str {
        "NgChannelFilter"
    }

    fn apply(
        &self,
        candidates: Vec<CandidateVideo>,
        ctx: &ScoringContext<'_>,
    ) -> Result<Vec<CandidateVideo>> {
        let filtered = candidates
            .into_iter()
            .filter(|video| !ctx.ng_channels.contains(&video.channel_id))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::PreferenceSnapshot;
    use profile::UserProfile;

    #[test]
    fn test_blocked_channel_excluded() {
        let profile = UserProfile::default();
        let prefs = PreferenceSnapshot {
            ng_channels: ["ch1".to_string()].into(),
            ..Default::default()
        };
        let ctx = ScoringContext::new(&profile, &prefs, &[]);

        let candidates = vec![
            CandidateVideo::new("v1", "blocked upload", "ch1", "one"),
            CandidateVideo::new("v2", "fine upload", "ch2", "two"),
        ];

        let surviving = NgChannelFilter.apply(candidates, &ctx).unwrap();
        assert_eq!(surviving.len(), 1);
        assert_eq!(surviving[0].id, "v2");
    }
}
