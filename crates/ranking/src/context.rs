//! Per-request scoring context.

use std::collections::{HashMap, HashSet};

use catalog::{ChannelId, PreferenceSnapshot, VideoId, WatchRecord};
use profile::UserProfile;

/// Watch-history entries considered "recently watched" for the history
/// penalty.
const RECENT_WATCH_WINDOW: usize = 50;

/// Watch-history entries whose channels count as familiar for the comfort
/// affinity bonus.
const RECENT_CHANNEL_WINDOW: usize = 20;

/// Everything the ranker needs besides the pool itself. Built once per
/// request from the profile, the preference snapshot, and watch history;
/// read-only during ranking.
pub struct ScoringContext<'a> {
    pub profile: &'a UserProfile,

    /// NG keywords, lower-cased once for substring matching.
    pub ng_keywords: Vec<String>,
    pub ng_channels: HashSet<ChannelId>,
    pub hidden_videos: HashSet<VideoId>,

    /// Soft suppression counts from hide feedback (read-only; owned by the
    /// preference subsystem).
    pub negative_keywords: HashMap<String, u32>,

    pub recent_watch_ids: HashSet<VideoId>,
    pub recent_channels: HashSet<ChannelId>,
}

impl<'a> ScoringContext<'a> {
    pub fn new(
        profile: &'a UserProfile,
        prefs: &PreferenceSnapshot,
        watch_history: &[WatchRecord],
    ) -> Self {
        Self {
            profile,
            ng_keywords: prefs
                .ng_keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            ng_channels: prefs.ng_channels.clone(),
            hidden_videos: prefs.hidden_videos.clone(),
            negative_keywords: prefs
                .negative_keywords
                .iter()
                .map(|(k, &count)| (k.to_lowercase(), count))
                .collect(),
            recent_watch_ids: watch_history
                .iter()
                .take(RECENT_WATCH_WINDOW)
                .map(|r| r.video_id.clone())
                .collect(),
            recent_channels: watch_history
                .iter()
                .take(RECENT_CHANNEL_WINDOW)
                .map(|r| r.channel_id.clone())
                .collect(),
        }
    }
}
