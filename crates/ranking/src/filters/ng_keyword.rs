//! Filter excluding candidates whose text contains an NG keyword.
//!
//! The match is case-insensitive substring over title, channel name, and
//! description combined, so "mukbang" blocks "MUKBANG marathon" as well as
//! a channel called "mukbangdaily".

use anyhow::Result;

use catalog::CandidateVideo;

use crate::context::ScoringContext;
use crate::traits::Filter;

pub struct NgKeywordFilter;

impl Filter for NgKeywordFilter {
    fn name(&self) -> &str {
        "NgKeywordFilter"
    }

    fn apply(
        &self,
        candidates: Vec<CandidateVideo>,
        ctx: &ScoringContext<'_>,
    ) -> Result<Vec<CandidateVideo>> {
        if ctx.ng_keywords.is_empty() {
            return Ok(candidates);
        }
        let filtered = candidates
            .into_iter()
            .filter(|video| {
                let haystack = format!(
                    "{} {} {}",
                    video.title, video.channel_name, video.description
                )
                .to_lowercase();
                !ctx.ng_keywords.iter().any(|kw| haystack.contains(kw))
            })
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
    fn test_ng_keyword_excludes_on_any_text_field() {
        let profile = UserProfile::default();
        let prefs = PreferenceSnapshot {
            ng_keywords: vec!["mukbang".to_string()],
            ..Default::default()
        };
        let ctx = ScoringContext::new(&profile, &prefs, &[]);

        let mut in_description = CandidateVideo::new("v3", "quiet dinner", "ch3", "three");
        in_description.description = "a cozy MUKBANG session".to_string();

        let candidates = vec![
            CandidateVideo::new("v1", "MUKBANG marathon", "ch1", "one"),
            CandidateVideo::new("v2", "pasta tutorial", "ch2", "two"),
            in_description,
        ];

        let filter = NgKeywordFilter;
        let surviving = filter.apply(candidates, &ctx).unwrap();

        assert_eq!(surviving.len(), 1);
        assert_eq!(surviving[0].id, "v2");
    }

    #[test]
    fn test_no_keywords_is_a_no_op() {
        let profile = UserProfile::default();
        let ctx = ScoringContext::new(&profile, &PreferenceSnapshot::default(), &[]);

        let candidates = vec![CandidateVideo::new("v1", "anything", "ch1", "one")];
        let surviving = NgKeywordFilter.apply(candidates, &ctx).unwrap();
        assert_eq!(surviving.len(), 1);
    }
}
