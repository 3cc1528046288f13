//! Per-channel diversity capping.

use std::collections::HashMap;

use catalog::{CandidateVideo, ChannelId};

/// Per-channel admission cap for discovery output.
pub const DISCOVERY_CHANNEL_CAP: usize = 2;
/// Per-channel admission cap for comfort output. Looser than discovery:
/// repeated channels are the point of that pool.
pub const COMFORT_CHANNEL_CAP: usize = 3;

/// Walk a score-sorted sequence once, admitting a candidate only while its
/// channel's admitted count is below `cap`. Relative order among admitted
/// items is preserved.
pub fn apply_channel_cap(candidates: Vec<CandidateVideo>, cap: usize) -> Vec<CandidateVideo> {
    let mut admitted: HashMap<ChannelId, usize> = HashMap::new();
    candidates
        .into_iter()
        .filter(|video| {
            let count = admitted.entry(video.channel_id.clone()).or_insert(0);
            if *count < cap {
                *count += 1;
                true
            } else {
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_channel(id: &str, channel: &str) -> CandidateVideo {
        CandidateVideo::new(id, format!("video {id}"), channel, channel)
    }

    #[test]
    fn test_cap_enforced_per_channel() {
        let candidates = vec![
            from_channel("a1", "chA"),
            from_channel("a2", "chA"),
            from_channel("b1", "chB"),
            from_channel("a3", "chA"),
            from_channel("b2", "chB"),
        ];

        let capped = apply_channel_cap(candidates, 2);
        let ids: Vec<&str> = capped.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2", "b1", "b2"]);
    }

    #[test]
    fn test_order_preserved() {
        let candidates = vec![
            from_channel("x1", "chX"),
            from_channel("y1", "chY"),
            from_channel("x2", "chX"),
        ];
        let capped = apply_channel_cap(candidates, 1);
        let ids: Vec<&str> = capped.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["x1", "y1"]);
    }

    #[test]
    fn test_zero_cap_empties_everything() {
        let candidates = vec![from_channel("a", "chA")];
        assert!(apply_channel_cap(candidates, 0).is_empty());
    }
}
