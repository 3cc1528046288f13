//! In-memory catalog provider backed by a JSON snapshot.
//!
//! The real catalog access layer (HTTP scraping, API clients, caching) is
//! an external collaborator. `StaticCatalog` exists so the demo CLI and the
//! engine's tests have a provider that honors the [`CatalogProvider`]
//! contract without any network: search is OR-of-substring matching,
//! trending is velocity-ordered, related is same-channel plus title-token
//! overlap.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::parser::{parse_upload_age_days, parse_view_count};
use crate::provider::CatalogProvider;
use crate::types::{CandidateVideo, ChannelId, VideoId};

/// Videos per search result page.
const PAGE_SIZE: usize = 20;

/// Length of the trending / recommended / related listings.
const LISTING_SIZE: usize = 40;

/// On-disk snapshot format: a flat list of videos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub videos: Vec<CandidateVideo>,
}

/// An immutable in-memory catalog.
pub struct StaticCatalog {
    videos: Vec<CandidateVideo>,
    by_id: HashMap<VideoId, usize>,
    by_channel: HashMap<ChannelId, Vec<usize>>,
}

impl StaticCatalog {
    pub fn new(videos: Vec<CandidateVideo>) -> Self {
        let mut by_id = HashMap::new();
        let mut by_channel: HashMap<ChannelId, Vec<usize>> = HashMap::new();
        for (index, video) in videos.iter().enumerate() {
            by_id.entry(video.id.clone()).or_insert(index);
            by_channel
                .entry(video.channel_id.clone())
                .or_default()
                .push(index);
        }
        Self {
            videos,
            by_id,
            by_channel,
        }
    }

    /// Load a snapshot file produced by `CatalogSnapshot` serialization.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::SnapshotRead {
            path: path.display().to_string(),
            source,
        })?;
        let snapshot: CatalogSnapshot = serde_json::from_str(&raw)?;
        Ok(Self::new(snapshot.videos))
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    fn sorted_desc_by<F>(&self, key: F) -> Vec<&CandidateVideo>
    where
        F: Fn(&CandidateVideo) -> f64,
    {
        let mut ordered: Vec<&CandidateVideo> = self.videos.iter().collect();
        ordered.sort_by(|a, b| {
            key(b)
                .partial_cmp(&key(a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ordered
    }
}

fn views(video: &CandidateVideo) -> f64 {
    parse_view_count(&video.view_count_text) as f64
}

fn views_per_day(video: &CandidateVideo) -> f64 {
    views(video) / parse_upload_age_days(&video.published_text).max(1.0)
}

/// Title tokens used for the related-video heuristic. Deliberately cruder
/// than the engine's tokenizer; a catalog would not share that code.
fn title_words(title: &str) -> Vec<String> {
    title
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() >= 4)
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn search(&self, query: &str, page: u32) -> Result<Vec<CandidateVideo>> {
        let terms: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .filter(|t| *t != "or" && *t != "|")
            .map(str::to_string)
            .collect();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let matches = self
            .sorted_desc_by(views)
            .into_iter()
            .filter(|video| {
                let haystack = format!(
                    "{} {} {}",
                    video.title, video.channel_name, video.description
                )
                .to_lowercase();
                terms.iter().any(|term| haystack.contains(term))
            })
            .skip(page as usize * PAGE_SIZE)
            .take(PAGE_SIZE)
            .cloned()
            .collect();
        Ok(matches)
    }

    async fn channel_videos(&self, channel_id: &ChannelId) -> Result<Vec<CandidateVideo>> {
        let indices = self
            .by_channel
            .get(channel_id)
            .ok_or_else(|| CatalogError::UnknownChannel(channel_id.clone()))?;
        let mut listing: Vec<CandidateVideo> =
            indices.iter().map(|&i| self.videos[i].clone()).collect();
        // newest first
        listing.sort_by(|a, b| {
            parse_upload_age_days(&a.published_text)
                .partial_cmp(&parse_upload_age_days(&b.published_text))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(listing)
    }

    async fn trending(&self) -> Result<Vec<CandidateVideo>> {
        Ok(self
            .sorted_desc_by(views_per_day)
            .into_iter()
            .take(LISTING_SIZE)
            .cloned()
            .collect())
    }

    async fn recommended(&self) -> Result<Vec<CandidateVideo>> {
        Ok(self
            .sorted_desc_by(views)
            .into_iter()
            .take(LISTING_SIZE)
            .cloned()
            .collect())
    }

    async fn related_videos(&self, video_id: &VideoId) -> Result<Vec<CandidateVideo>> {
        let &index = self
            .by_id
            .get(video_id)
            .ok_or_else(|| CatalogError::UnknownVideo(video_id.clone()))?;
        let seed = &self.videos[index];
        let seed_words = title_words(&seed.title);

        let related = self
            .sorted_desc_by(views)
            .into_iter()
            .filter(|video| {
                if video.id == seed.id {
                    return false;
                }
                video.channel_id == seed.channel_id
                    || title_words(&video.title)
                        .iter()
                        .any(|w| seed_words.contains(w))
            })
            .take(LISTING_SIZE)
            .cloned()
            .collect();
        Ok(related)
    }
}
