use super::{
    client::Client,
    error::{Error, MediaKind, Result as PexelsResult},
    page::PhotoPage,
};

use serde::Deserialize;
use serde_with::{serde_as, DefaultOnNull};

use std::{fmt, str::FromStr};

/// Named size a [`Photo`] is available in.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum PhotoSize {
    Original,
    Large,
    Large2x,
    Medium,
    Small,
    Portrait,
    Square,
    Landscape,
    Tiny,
}

impl PhotoSize {
    /// Every size, in the order the API lists them.
    pub const ALL: [PhotoSize; 9] = [
        PhotoSize::Original,
        PhotoSize::Large,
        PhotoSize::Large2x,
        PhotoSize::Medium,
        PhotoSize::Small,
        PhotoSize::Portrait,
        PhotoSize::Square,
        PhotoSize::Landscape,
        PhotoSize::Tiny,
    ];

    /// Key of the size in the `src` object.
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoSize::Original => "original",
            PhotoSize::Large => "large",
            PhotoSize::Large2x => "large2x",
            PhotoSize::Medium => "medium",
            PhotoSize::Small => "small",
            PhotoSize::Portrait => "portrait",
            PhotoSize::Square => "square",
            PhotoSize::Landscape => "landscape",
            PhotoSize::Tiny => "tiny",
        }
    }
}

impl fmt::Display for PhotoSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhotoSize {
    type Err = ParsePhotoSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhotoSize::ALL
            .iter()
            .copied()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ParsePhotoSizeError(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown photo size {0:?}")]
pub struct ParsePhotoSizeError(String);

/// Image URLs of a [`Photo`], one per [`PhotoSize`]. Sizes the API didn't give are empty.
#[serde_as]
#[derive(Debug, PartialEq, Eq, Default, Clone, Deserialize)]
#[serde(default)]
pub struct PhotoSources {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub original: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub large: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub large2x: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub medium: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub small: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub portrait: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub square: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub landscape: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub tiny: String,
}

impl PhotoSources {
    /// URL of the photo at the given size.
    pub fn get(&self, size: PhotoSize) -> &str {
        match size {
            PhotoSize::Original => &self.original,
            PhotoSize::Large => &self.large,
            PhotoSize::Large2x => &self.large2x,
            PhotoSize::Medium => &self.medium,
            PhotoSize::Small => &self.small,
            PhotoSize::Portrait => &self.portrait,
            PhotoSize::Square => &self.square,
            PhotoSize::Landscape => &self.landscape,
            PhotoSize::Tiny => &self.tiny,
        }
    }

    /// Every size along with its URL, including the empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (PhotoSize, &str)> + '_ {
        let sizes: &'static [PhotoSize] = &PhotoSize::ALL;

        sizes.iter().map(move |size| (*size, self.get(*size)))
    }
}

/// Structure representing a photo.
#[serde_as]
#[derive(Debug, PartialEq, Eq, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Photo {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub width: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub height: u32,
    /// Page of the photo on the website.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(rename = "url")]
    pub page_url: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(rename = "photographer")]
    pub photographer_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub photographer_url: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(rename = "src")]
    pub sources: PhotoSources,
}

impl Client {
    /// Search for photos matching `query`.
    ///
    /// The query is put in the URL as-is: if it contains reserved characters, encode it first
    /// with [`encode_query`](crate::encode_query).
    ///
    /// ```no_run
    /// # use pexels::client::Client;
    /// # fn main() -> pexels::error::Result<()> {
    /// let client = Client::new("my-api-key")?;
    /// let result = client.search_photos("nature", 15, 1)?;
    ///
    /// for photo in result.items {
    ///     println!("#{} by {}", photo.id, photo.photographer_name);
    /// }
    /// # Ok(()) }
    /// ```
    pub fn search_photos(&self, query: &str, per_page: u32, page: u32) -> PexelsResult<PhotoPage> {
        self.get_json_endpoint(&self.photo_endpoint(&format!(
            "search?query={}&per_page={}&page={}",
            query, per_page, page
        )))
    }

    /// Returns a page of the curated photos feed. This feed doesn't report
    /// [`total_results`](crate::page::SearchResult::total_results).
    pub fn curated_photos(&self, per_page: u32, page: u32) -> PexelsResult<PhotoPage> {
        self.get_json_endpoint(
            &self.photo_endpoint(&format!("curated?per_page={}&page={}", per_page, page)),
        )
    }

    /// Returns the photo with the given ID.
    ///
    /// ```no_run
    /// # use pexels::client::Client;
    /// # fn main() -> pexels::error::Result<()> {
    /// let client = Client::new("my-api-key")?;
    /// let photo = client.get_photo(2014422)?;
    ///
    /// assert_eq!(photo.id, 2014422);
    /// # Ok(()) }
    /// ```
    pub fn get_photo(&self, id: u64) -> PexelsResult<Photo> {
        self.get_json_endpoint(&self.photo_endpoint(&format!("photos/{}", id)))
    }

    /// Returns the only photo of a random page of the curated feed.
    ///
    /// Fails with [`Error::EmptyResult`] if the picked page has no photo.
    pub fn random_photo(&self) -> PexelsResult<Photo> {
        let page = self.select_random_page();
        log::debug!("picking a random photo from curated page {}", page);

        self.curated_photos(1, page)?
            .items
            .into_iter()
            .next()
            .ok_or(Error::EmptyResult(MediaKind::Photo))
    }
}
