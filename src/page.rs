use serde::Deserialize;
use serde_with::{serde_as, DefaultOnNull};

use super::{photo::Photo, video::Video};

/// One page of results, as returned by the search and feed endpoints.
///
/// Items are kept in the order the API returned them.
#[serde_as]
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SearchResult<T> {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub page: u32,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub per_page: u32,

    /// Not reported by every endpoint; `0` when absent.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub total_results: u64,

    /// URL of the next page, empty on the last page.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub next_page: String,

    /// URL of the previous page, empty on the first page.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub prev_page: String,

    /// Feed URL, only given by the popular videos listing.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub url: String,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default = "Vec::new", alias = "photos", alias = "videos")]
    pub items: Vec<T>,
}

impl<T> SearchResult<T> {
    /// Whether the API advertised a page after this one.
    pub fn has_next_page(&self) -> bool {
        !self.next_page.is_empty()
    }
}

/// Page of [`Photo`]s.
pub type PhotoPage = SearchResult<Photo>;

/// Page of [`Video`]s.
pub type VideoPage = SearchResult<Video>;
