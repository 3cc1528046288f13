//! Score components and their per-mode combination.
//!
//! All "vector" scoring here is deterministic heuristic arithmetic over the
//! interest profile; there is no model. Relevance is normalized cosine
//! similarity between the profile vector and the candidate's unit-weighted
//! token set.

use std::collections::HashSet;

use rand::Rng;
use rand::rngs::StdRng;

use catalog::CandidateVideo;
use catalog::parser::{parse_upload_age_days, parse_view_count};
use profile::{UserProfile, tokenize};
use sources::PoolKind;

use crate::context::ScoringContext;

/// Below this relevance, a discovery candidate's pre-jitter score is capped
/// at [`FLOOR_SCORE_CAP`] no matter how viral it is.
pub const RELEVANCE_FLOOR: f64 = 0.05;
pub const FLOOR_SCORE_CAP: f64 = 0.8;

/// Candidates younger than this many days get the freshness multiplier.
pub const FRESH_BOOST_DAYS: f64 = 2.0;
pub const FRESH_BOOST: f64 = 1.3;

/// Multiplicative history penalties: near-total in discovery mode, mild in
/// comfort mode.
pub const DISCOVERY_WATCHED_PENALTY: f64 = 0.05;
pub const COMFORT_WATCHED_PENALTY: f64 = 0.6;

/// Comfort bonus for channels already present in recent watch history.
pub const CHANNEL_AFFINITY_BOOST: f64 = 1.35;

/// Bounded jitter fraction applied to final scores.
pub const JITTER_FRACTION: f64 = 0.08;

/// Velocity denominator floor, roughly one hour in days.
const MIN_AGE_DAYS: f64 = 0.04;

/// Per-hit damping for keywords under negative feedback.
const NEG_KEYWORD_DAMP: f64 = 0.8;
const NEG_KEYWORD_MAX_HITS: u32 = 3;

/// Cosine similarity between the profile vector and a unit-weighted token
/// set. Always in `[0, 1]` for non-negative weights; 0 when either side has
/// zero magnitude.
pub fn cosine_relevance(user_profile: &UserProfile, tokens: &HashSet<String>) -> f64 {
    if user_profile.magnitude == 0.0 || tokens.is_empty() {
        return 0.0;
    }
    let dot: f64 = tokens
        .iter()
        .filter_map(|token| user_profile.keywords.get(token))
        .sum();
    let token_magnitude = (tokens.len() as f64).sqrt();
    dot / (user_profile.magnitude * token_magnitude)
}

/// Compute the pre-jitter score of one surviving candidate.
pub fn score_candidate(
    video: &CandidateVideo,
    mode: PoolKind,
    ctx: &ScoringContext<'_>,
) -> f64 {
    let tokens = tokenize(&format!(
        "{} {} {}",
        video.title, video.channel_name, video.description
    ));
    let relevance = cosine_relevance(ctx.profile, &tokens);

    let views = parse_view_count(&video.view_count_text) as f64;
    let popularity = (views + 1.0).log10();

    let days_ago = parse_upload_age_days(&video.published_text);
    let velocity = views / days_ago.max(MIN_AGE_DAYS);
    let velocity_score = (velocity + 1.0).log10();

    let mut score = match mode {
        PoolKind::Discovery => {
            let mut s = relevance + 1.2 * velocity_score + 0.4 * popularity;
            if days_ago < FRESH_BOOST_DAYS {
                s *= FRESH_BOOST;
            }
            if relevance < RELEVANCE_FLOOR {
                s = s.min(FLOOR_SCORE_CAP);
            }
            s
        }
        PoolKind::Comfort => {
            let mut s = 2.2 * relevance + 0.3 * popularity + 0.2 * velocity_score;
            if ctx.recent_channels.contains(&video.channel_id) {
                s *= CHANNEL_AFFINITY_BOOST;
            }
            s
        }
    };

    if ctx.recent_watch_ids.contains(&video.id) {
        score *= match mode {
            PoolKind::Discovery => DISCOVERY_WATCHED_PENALTY,
            PoolKind::Comfort => COMFORT_WATCHED_PENALTY,
        };
    }

    // soft suppression from hide feedback, damped per accumulated hit
    for token in &tokens {
        if let Some(&count) = ctx.negative_keywords.get(token) {
            score *= NEG_KEYWORD_DAMP.powi(count.min(NEG_KEYWORD_MAX_HITS) as i32);
        }
    }

    score
}

/// Perturb a final score by at most ±[`JITTER_FRACTION`] so repeated
/// identical calls do not always reproduce an identical order.
pub fn apply_jitter(score: f64, rng: &mut StdRng) -> f64 {
    score * (1.0 + rng.random_range(-JITTER_FRACTION..=JITTER_FRACTION))
}
