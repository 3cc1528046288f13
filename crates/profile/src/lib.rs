//! # Profile Crate
//!
//! Turns a viewer's raw interest signals into a weighted-keyword interest
//! vector.
//!
//! ## Components
//!
//! ### Tokenizer
//! Text normalization shared by profile building and candidate scoring:
//! - lower-cased word segments (locale-aware behind the `segmentation`
//!   feature, symbol-split fallback otherwise)
//! - hashtag and bracketed-span extraction as high-signal tokens
//! - stop-word and noise-token removal
//!
//! ### Profile Builder
//! Recency-weighted accumulation of search history, watch history, and
//! subscriptions into a single [`UserProfile`]:
//! - search terms decay fastest and start heaviest
//! - watch history decays slowly; channel names count 1.5x their titles
//! - subscriptions contribute a flat baseline weight
//!
//! Both are pure functions of their inputs; no I/O, no shared state.

pub mod builder;
pub mod tokenizer;

// Re-export commonly used items
pub use builder::{ProfileSignals, UserProfile, build_profile};
pub use tokenizer::tokenize;
