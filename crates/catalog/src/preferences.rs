//! Preference-store values consumed by the engine.
//!
//! The preference subsystem (persistence, import/export, UI) lives outside
//! this workspace. What crosses the boundary is a read-only
//! [`PreferenceSnapshot`] taken at request start. The engine never writes
//! preference state; [`NegativeFeedback`] carries the canonical
//! increment/decrement semantics so every owner of that state agrees on
//! them.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::{ChannelId, VideoId};

/// Read-only view of the viewer's explicit preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceSnapshot {
    /// Keywords that hard-exclude a candidate on substring match.
    #[serde(default)]
    pub ng_keywords: Vec<String>,

    /// Channels that hard-exclude a candidate.
    #[serde(default)]
    pub ng_channels: HashSet<ChannelId>,

    /// Individually hidden videos.
    #[serde(default)]
    pub hidden_videos: HashSet<VideoId>,

    /// Suppression counts accumulated from hide actions, keyed by keyword.
    #[serde(default)]
    pub negative_keywords: HashMap<String, u32>,
}

impl PreferenceSnapshot {
    /// Fold accumulated hide feedback into this snapshot's suppression
    /// counts. Counts add onto whatever the snapshot already carries.
    pub fn absorb_feedback(&mut self, feedback: &NegativeFeedback) {
        for (keyword, &count) in feedback.as_map() {
            *self.negative_keywords.entry(keyword.clone()).or_insert(0) += count;
        }
    }
}

/// Keyword suppression counts built up by hide/unhide actions.
///
/// Hiding a video increments the count of each of its keywords; unhiding
/// decrements with a floor at zero. Entries that reach zero are dropped so
/// the map only holds live suppressions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NegativeFeedback {
    counts: HashMap<String, u32>,
}

impl NegativeFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hide action over the given keywords.
    pub fn record_hide<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            let key = keyword.as_ref().to_lowercase();
            if key.is_empty() {
                continue;
            }
            *self.counts.entry(key).or_insert(0) += 1;
        }
    }

    /// Record an unhide action; counts never go below zero.
    pub fn record_unhide<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            let key = keyword.as_ref().to_lowercase();
            if let Some(count) = self.counts.get_mut(&key) {
                *count = count.saturating_sub(1);
                if *count == 0 {
                    self.counts.remove(&key);
                }
            }
        }
    }

    /// Current suppression count for one keyword.
    pub fn suppression_of(&self, keyword: &str) -> u32 {
        self.counts.get(&keyword.to_lowercase()).copied().unwrap_or(0)
    }

    /// The full suppression map, as consumed by scoring.
    pub fn as_map(&self) -> &HashMap<String, u32> {
        &self.counts
    }
}
