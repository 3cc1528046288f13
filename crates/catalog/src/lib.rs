//! # Catalog Crate
//!
//! Types and access contract for the video catalog consumed by the
//! recommendation engine.
//!
//! ## Components
//!
//! - [`types`]: externally-owned values (`CandidateVideo`, watch records,
//!   subscriptions) and id aliases
//! - [`provider`]: the `CatalogProvider` async trait the engine fetches
//!   candidates through (search / channel listing / trending / related)
//! - [`parser`]: lenient parsers for the raw text fields a catalog hands
//!   back (view counts, upload age, duration)
//! - [`preferences`]: read-only preference snapshot plus the
//!   negative-feedback suppression map
//! - [`static_catalog`]: in-memory provider over a JSON snapshot, used by
//!   the demo CLI and tests
//!
//! The engine owns no wire format or storage layout; everything here is
//! either a value type or a trait boundary. Timeouts and retries are the
//! provider's responsibility.

pub mod error;
pub mod parser;
pub mod preferences;
pub mod provider;
pub mod static_catalog;
pub mod types;

// Re-export commonly used types
pub use error::{CatalogError, Result};
pub use preferences::{NegativeFeedback, PreferenceSnapshot};
pub use provider::CatalogProvider;
pub use static_catalog::{CatalogSnapshot, StaticCatalog};
pub use types::{CandidateVideo, ChannelId, Subscription, VideoId, WatchRecord};
