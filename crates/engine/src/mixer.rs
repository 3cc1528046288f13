//! Ratio-preserving interleave of the two ranked pools.

use std::collections::HashSet;

use catalog::{CandidateVideo, VideoId};

/// Greedy ratio-matching interleave.
///
/// Tracks how many Discovery items have been emitted; while both pools
/// still hold items, emits from Discovery whenever
/// `discovery_emitted / (emitted + 1) < ratio`, otherwise from Comfort.
/// Once one pool runs dry the other is drained. A candidate whose id was
/// already emitted is skipped without consuming from the opposite pool.
///
/// The running ratio converges toward `ratio` without requiring evenly
/// divisible pool sizes, and either pool may be empty. Deterministic: all
/// randomness is resolved upstream in the ranker.
pub fn mix_feed(
    discovery: Vec<CandidateVideo>,
    comfort: Vec<CandidateVideo>,
    ratio: f64,
    cap: usize,
) -> Vec<CandidateVideo> {
    let mut feed: Vec<CandidateVideo> = Vec::new();
    let mut seen: HashSet<VideoId> = HashSet::new();
    let mut discovery = discovery.into_iter().peekable();
    let mut comfort = comfort.into_iter().peekable();
    let mut discovery_emitted = 0usize;

    while feed.len() < cap {
        // drop already-emitted heads without consuming from the other pool
        while discovery.peek().is_some_and(|v| seen.contains(&v.id)) {
            discovery.next();
        }
        while comfort.peek().is_some_and(|v| seen.contains(&v.id)) {
            comfort.next();
        }

        let take_discovery = match (discovery.peek().is_some(), comfort.peek().is_some()) {
            (true, true) => (discovery_emitted as f64) / ((feed.len() + 1) as f64) < ratio,
            (true, false) => true,
            (false, true) => false,
            (false, false) => break,
        };

        let video = if take_discovery {
            discovery_emitted += 1;
            discovery.next()
        } else {
            comfort.next()
        };
        if let Some(video) = video {
            seen.insert(video.id.clone());
            feed.push(video);
        }
    }
    feed
}
