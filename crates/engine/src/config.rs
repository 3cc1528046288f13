//! Engine configuration.

use serde::Deserialize;

/// Default share of the final feed drawn from the Discovery pool.
pub const DEFAULT_DISCOVERY_RATIO: f64 = 0.65;

/// Default final feed cap, with the range a cap may be configured within.
pub const DEFAULT_MAX_FEED_LEN: usize = 120;
pub const MIN_FEED_LEN: usize = 100;
pub const MAX_FEED_LEN: usize = 150;

/// Tunables for one orchestrator instance. Deserializable so the CLI can
/// load overrides from a JSON file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Target Discovery share of the final feed, in (0, 1).
    pub discovery_ratio: f64,

    /// Maximum final feed length.
    pub max_feed_len: usize,

    /// Fixed rng seed; `None` seeds from OS entropy per request.
    pub seed: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            discovery_ratio: DEFAULT_DISCOVERY_RATIO,
            max_feed_len: DEFAULT_MAX_FEED_LEN,
            seed: None,
        }
    }
}

impl FeedConfig {
    /// Clamp out-of-range values instead of failing: a config file with a
    /// ratio of 1.7 gets the nearest sane value.
    pub fn sanitized(mut self) -> Self {
        if !self.discovery_ratio.is_finite() {
            self.discovery_ratio = DEFAULT_DISCOVERY_RATIO;
        }
        self.discovery_ratio = self.discovery_ratio.clamp(0.05, 0.95);
        self.max_feed_len = self.max_feed_len.clamp(MIN_FEED_LEN, MAX_FEED_LEN);
        self
    }
}
