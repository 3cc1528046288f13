//! # Engine Crate
//!
//! Coordinates one recommendation request end to end:
//! 1. Build the interest profile from raw signals
//! 2. Gather Discovery and Comfort pools (concurrent fan-out per pool)
//! 3. Rank each pool independently under its mode
//! 4. Interleave the ranked pools at the target discovery ratio
//! 5. Return the deduplicated, capped feed
//!
//! The engine is stateless across calls: everything derived for one request
//! (profile, pools, scores, rng) is local to that call, so concurrent
//! requests need no locking. An empty feed means "no recommendations
//! currently available", never an error.

pub mod config;
pub mod mixer;
pub mod orchestrator;

// Re-export main types
pub use config::FeedConfig;
pub use mixer::mix_feed;
pub use orchestrator::FeedOrchestrator;
