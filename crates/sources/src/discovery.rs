//! Discovery Source - Novelty and Trend Exposure
//!
//! Builds the out-of-comfort candidate pool:
//! - the profile's heaviest keywords merged with explicit preferred genres,
//!   chunked into OR-groups so the search call count stays bounded
//! - one broad fetch per page: trending on page 0, the generic recommended
//!   listing on later pages
//!
//! ## Algorithm
//! 1. Take the top [`MAX_PROFILE_KEYWORDS`] weighted profile keywords
//! 2. Append preferred genres not already present
//! 3. Chunk into OR-groups of up to [`QUERY_CHUNK`] terms, one search each
//! 4. Run every fetch concurrently; a failed fetch contributes nothing
//! 5. Flatten in call order and deduplicate by id

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, instrument, warn};

use catalog::{CandidateVideo, CatalogProvider};
use profile::UserProfile;

use crate::dedup_by_id;

/// How many profile keywords feed the search queries.
pub const MAX_PROFILE_KEYWORDS: usize = 12;

/// Terms per OR-group search query.
const QUERY_CHUNK: usize = 3;

/// Discovery source generates novelty candidates through keyword search and
/// broad listings.
pub struct DiscoverySource {
    provider: Arc<dyn CatalogProvider>,
}

impl DiscoverySource {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    /// Build the OR-group search queries for one request.
    pub fn build_queries(&self, user_profile: &UserProfile, preferred_genres: &[String]) -> Vec<String> {
        let mut terms = user_profile.top_keywords(MAX_PROFILE_KEYWORDS);
        for genre in preferred_genres {
            let genre = genre.trim().to_lowercase();
            if !genre.is_empty() && !terms.contains(&genre) {
                terms.push(genre);
            }
        }
        terms
            .chunks(QUERY_CHUNK)
            .map(|chunk| chunk.join(" OR "))
            .collect()
    }

    /// Fetch the discovery pool: all queries plus the broad listing, joined
    /// concurrently.
    #[instrument(skip(self, queries), fields(queries = queries.len(), page))]
    pub async fn gather(&self, queries: &[String], page: u32) -> Vec<CandidateVideo> {
        let searches = join_all(queries.iter().map(|query| self.fetch_search(query, page)));
        let broad = self.fetch_broad(page);
        let (batches, broad) = tokio::join!(searches, broad);

        let mut merged: Vec<CandidateVideo> = batches.into_iter().flatten().collect();
        merged.extend(broad);
        let pool = dedup_by_id(merged);
        debug!(candidates = pool.len(), "gathered discovery pool");
        pool
    }

    async fn fetch_search(&self, query: &str, page: u32) -> Vec<CandidateVideo> {
        match self.provider.search(query, page).await {
            Ok(videos) => videos,
            Err(err) => {
                warn!(query, %err, "search fetch failed, contributing nothing");
                Vec::new()
            }
        }
    }

    /// Trending supplements the first page; later pages substitute the
    /// generic recommended listing.
    async fn fetch_broad(&self, page: u32) -> Vec<CandidateVideo> {
        let result = if page == 0 {
            self.provider.trending().await
        } else {
            self.provider.recommended().await
        };
        match result {
            Ok(videos) => videos,
            Err(err) => {
                warn!(page, %err, "broad fetch failed, contributing nothing");
                Vec::new()
            }
        }
    }
}
