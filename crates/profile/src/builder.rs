//! Recency-weighted interest-vector construction.
//!
//! Signal priority at rank 0 is strictly search > watched video >
//! subscription, decaying toward a shared baseline as rank grows. The
//! constants below keep that ordering for any inputs: 9.0 > 4.5 (6.75 for a
//! watched channel name) > 3.5, and exponential decay never lifts a later
//! rank above an earlier one.

use std::collections::HashMap;

use tracing::debug;

use catalog::{Subscription, WatchRecord};

use crate::tokenizer::tokenize;

/// Weight of the most recent search term.
pub const SEARCH_WEIGHT: f64 = 9.0;
/// Search decay constant (ranks until weight falls to 1/e).
pub const SEARCH_DECAY: f64 = 6.0;
const SEARCH_LIMIT: usize = 30;

/// Weight of the most recently watched video's title tokens.
pub const WATCH_WEIGHT: f64 = 4.5;
/// Watch-history decay constant.
pub const WATCH_DECAY: f64 = 20.0;
const WATCH_LIMIT: usize = 100;
/// Channel-name tokens of a watched video count this much more than its
/// title tokens.
const WATCH_CHANNEL_FACTOR: f64 = 1.5;

/// Flat weight of every subscribed channel's name tokens.
pub const SUBSCRIPTION_WEIGHT: f64 = 3.5;

/// The viewer's inferred interest vector.
///
/// Built once per recommendation request and read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct UserProfile {
    /// Normalized token to accumulated non-negative weight.
    pub keywords: HashMap<String, f64>,
    /// Euclidean norm of the weight values, precomputed for cosine scoring.
    pub magnitude: f64,
}

impl UserProfile {
    /// The `n` heaviest keywords, weight-descending. Ties break on the
    /// token itself so the result is deterministic across map iteration
    /// orders.
    pub fn top_keywords(&self, n: usize) -> Vec<String> {
        let mut ranked: Vec<(&String, f64)> =
            self.keywords.iter().map(|(k, &w)| (k, w)).collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        ranked.into_iter().take(n).map(|(k, _)| k.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Raw interest signals for one request. Histories are most-recent-first;
/// subscriptions are unordered.
#[derive(Debug, Clone, Copy)]
pub struct ProfileSignals<'a> {
    pub search_history: &'a [String],
    pub watch_history: &'a [WatchRecord],
    pub subscribed_channels: &'a [Subscription],
}

/// Build the interest vector. Pure function of its inputs; no I/O.
pub fn build_profile(signals: &ProfileSignals<'_>) -> UserProfile {
    let mut keywords: HashMap<String, f64> = HashMap::new();

    for (rank, term) in signals.search_history.iter().take(SEARCH_LIMIT).enumerate() {
        let weight = SEARCH_WEIGHT * (-(rank as f64) / SEARCH_DECAY).exp();
        add_tokens(&mut keywords, term, weight);
    }

    for (rank, record) in signals.watch_history.iter().take(WATCH_LIMIT).enumerate() {
        let weight = WATCH_WEIGHT * (-(rank as f64) / WATCH_DECAY).exp();
        add_tokens(&mut keywords, &record.title, weight);
        add_tokens(&mut keywords, &record.channel_name, weight * WATCH_CHANNEL_FACTOR);
    }

    for subscription in signals.subscribed_channels {
        add_tokens(&mut keywords, &subscription.channel_name, SUBSCRIPTION_WEIGHT);
    }

    let magnitude = keywords.values().map(|w| w * w).sum::<f64>().sqrt();
    debug!(
        keywords = keywords.len(),
        magnitude, "built interest profile"
    );
    UserProfile { keywords, magnitude }
}

fn add_tokens(into: &mut HashMap<String, f64>, text: &str, weight: f64) {
    for token in tokenize(text) {
        *into.entry(token).or_insert(0.0) += weight;
    }
}
