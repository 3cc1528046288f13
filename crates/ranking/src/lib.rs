//! Ranking of one candidate pool against the viewer's interest profile.
//!
//! This crate provides:
//! - Filter trait and hard-filter implementations (NG keywords, NG
//!   channels, hidden videos)
//! - FilterPipeline for composing filters
//! - score components (relevance, popularity, velocity, penalties, jitter)
//! - per-channel diversity capping
//! - the Ranker tying it all together per pool
//!
//! ## Architecture
//! A pool moves through stages:
//! 1. Hard filters exclude candidates outright; excluded items are never
//!    scored
//! 2. Score components combine per the pool's mode (discovery favors
//!    freshness and velocity under a relevance floor; comfort favors
//!    relevance and channel affinity)
//! 3. Bounded jitter from the injected rng perturbs final scores
//! 4. Sort descending, then cap per-channel admissions
//!
//! Malformed numeric fields degrade to zero or sentinel values; nothing in
//! here raises for bad candidate data.

pub mod context;
pub mod diversity;
pub mod filter_pipeline;
pub mod filters;
pub mod ranker;
pub mod score;
pub mod traits;

// Re-export main types
pub use context::ScoringContext;
pub use filter_pipeline::FilterPipeline;
pub use ranker::Ranker;
pub use traits::Filter;
