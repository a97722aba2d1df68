use super::{
    client::Client,
    error::{Error, MediaKind, Result as PexelsResult},
    page::VideoPage,
};

use serde::Deserialize;
use serde_json::Value as JsonValue;
use serde_with::{serde_as, DefaultOnNull};

/// One encoded variant of a [`Video`].
#[serde_as]
#[derive(Debug, PartialEq, Eq, Default, Clone, Deserialize)]
#[serde(default)]
pub struct VideoRendition {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: u64,
    /// Quality label, e.g. `hd` or `sd`. The API sometimes leaves it out.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub quality: String,
    /// MIME type of the file.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub file_type: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub width: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub height: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(rename = "link")]
    pub download_url: String,
}

/// Preview picture of a [`Video`].
#[serde_as]
#[derive(Debug, PartialEq, Eq, Default, Clone, Deserialize)]
#[serde(default)]
pub struct VideoThumbnail {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(rename = "picture")]
    pub image_url: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(rename = "nr")]
    pub sequence_number: u32,
}

/// Structure representing a video.
#[serde_as]
#[derive(Debug, PartialEq, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Video {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: u64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub width: u32,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub height: u32,
    /// Page of the video on the website.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(rename = "url")]
    pub page_url: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(rename = "image")]
    pub preview_image_url: String,
    /// Undocumented by the API, kept exactly as received. `None` when absent or `null`.
    pub full_res: Option<JsonValue>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(rename = "duration")]
    pub duration_seconds: f64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(rename = "video_files")]
    pub files: Vec<VideoRendition>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(rename = "video_pictures")]
    pub preview_pictures: Vec<VideoThumbnail>,
}

impl Video {
    /// The rendition with the most pixels, if any.
    pub fn best_rendition(&self) -> Option<&VideoRendition> {
        self.files
            .iter()
            .max_by_key(|f| u64::from(f.width) * u64::from(f.height))
    }
}

impl Client {
    /// Search for videos matching `query`.
    ///
    /// The query is put in the URL as-is: if it contains reserved characters, encode it first
    /// with [`encode_query`](crate::encode_query).
    ///
    /// ```no_run
    /// # use pexels::client::Client;
    /// # fn main() -> pexels::error::Result<()> {
    /// let client = Client::new("my-api-key")?;
    ///
    /// for video in client.search_videos("nature", 15, 1)?.items {
    ///     println!("#{}: {}s", video.id, video.duration_seconds);
    /// }
    /// # Ok(()) }
    /// ```
    pub fn search_videos(&self, query: &str, per_page: u32, page: u32) -> PexelsResult<VideoPage> {
        self.get_json_endpoint(&self.video_endpoint(&format!(
            "search?query={}&per_page={}&page={}",
            query, per_page, page
        )))
    }

    /// Returns a page of the popular videos feed.
    pub fn popular_videos(&self, per_page: u32, page: u32) -> PexelsResult<VideoPage> {
        self.get_json_endpoint(
            &self.video_endpoint(&format!("popular?per_page={}&page={}", per_page, page)),
        )
    }

    /// Returns the only video of a random page of the popular feed.
    ///
    /// Fails with [`Error::EmptyResult`] if the picked page has no video.
    pub fn random_video(&self) -> PexelsResult<Video> {
        let page = self.select_random_page();
        log::debug!("picking a random video from popular page {}", page);

        self.popular_videos(1, page)?
            .items
            .into_iter()
            .next()
            .ok_or(Error::EmptyResult(MediaKind::Video))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;
    use mockito::{Matcher, Server};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const SEARCH_RESPONSE: &str = r#"{
        "page": 1,
        "per_page": 1,
        "total_results": 20475,
        "url": "https://www.pexels.com/videos/",
        "videos": [
            {
                "id": 1448735,
                "width": 4096,
                "height": 2160,
                "url": "https://www.pexels.com/video/video-of-forest-1448735/",
                "image": "https://images.pexels.com/videos/1448735/free-video-1448735.jpg",
                "full_res": null,
                "tags": [],
                "duration": 32,
                "user": { "id": 574687, "name": "Ruvim Miksanskiy" },
                "video_files": [
                    {
                        "id": 58649,
                        "quality": "sd",
                        "file_type": "video/mp4",
                        "width": 640,
                        "height": 338,
                        "link": "https://player.vimeo.com/external/291648067.sd.mp4"
                    },
                    {
                        "id": 58650,
                        "quality": "hd",
                        "file_type": "video/mp4",
                        "width": 4096,
                        "height": 2160,
                        "link": "https://player.vimeo.com/external/291648067.hd.mp4"
                    },
                    {
                        "id": 58651,
                        "quality": null,
                        "file_type": "video/mp4",
                        "width": null,
                        "height": null,
                        "link": "https://player.vimeo.com/external/291648067.m3u8"
                    }
                ],
                "video_pictures": [
                    { "id": 133236, "picture": "https://static-videos.pexels.com/videos/1448735/pictures/preview-0.jpg", "nr": 0 },
                    { "id": 133237, "picture": "https://static-videos.pexels.com/videos/1448735/pictures/preview-1.jpg", "nr": 1 }
                ]
            }
        ]
    }"#;

    fn mocked_client(server: &Server) -> Client {
        Client::builder("unit-test-token")
            .video_api(format!("{}/videos/", server.url()))
            .build()
            .unwrap()
    }

    #[test]
    fn video_page_from_json() {
        let page: VideoPage = serde_json::from_str(SEARCH_RESPONSE).unwrap();

        assert_eq!(page.total_results, 20475);
        assert_eq!(page.items.len(), 1);

        let video = &page.items[0];
        assert_eq!(video.id, 1448735);
        assert_eq!(video.duration_seconds, 32.0);
        assert_eq!(video.full_res, None);
        assert_eq!(
            video.preview_image_url,
            "https://images.pexels.com/videos/1448735/free-video-1448735.jpg"
        );

        assert_eq!(video.files.len(), 3);
        assert_eq!(video.files[0].quality, "sd");
        assert_eq!(video.files[1].download_url, "https://player.vimeo.com/external/291648067.hd.mp4");
        assert_eq!(video.files[2].quality, "");
        assert_eq!(video.files[2].width, 0);

        assert_eq!(
            video
                .preview_pictures
                .iter()
                .map(|p| p.sequence_number)
                .collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn full_res_kept_verbatim() {
        let video: Video = serde_json::from_str(
            r#"{"id":1,"full_res":{"width":8192,"link":"https://example.com/full.mp4"}}"#,
        )
        .unwrap();

        assert_eq!(
            video.full_res,
            Some(serde_json::json!({"width": 8192, "link": "https://example.com/full.mp4"}))
        );
    }

    #[test]
    fn fractional_duration() {
        let video: Video = serde_json::from_str(r#"{"duration":12.5}"#).unwrap();

        assert_eq!(video.duration_seconds, 12.5);
        assert!(video.files.is_empty());
        assert!(video.preview_pictures.is_empty());
    }

    #[test]
    fn best_rendition_by_pixels() {
        let page: VideoPage = serde_json::from_str(SEARCH_RESPONSE).unwrap();

        assert_eq!(page.items[0].best_rendition().map(|f| f.id), Some(58650));
        assert_eq!(Video::default().best_rendition(), None);
    }

    #[test]
    fn search_simple() {
        let mut server = Server::new();
        let client = mocked_client(&server);

        let m = server
            .mock("GET", "/videos/search?query=nature&per_page=1&page=1")
            .match_header("authorization", "unit-test-token")
            .with_header("x-ratelimit-remaining", "19998")
            .with_body(SEARCH_RESPONSE)
            .create();

        let result = client.search_videos("nature", 1, 1).unwrap();

        m.assert();
        assert_eq!(result, serde_json::from_str::<VideoPage>(SEARCH_RESPONSE).unwrap());
        assert_eq!(client.remaining_quota(), 19998);
    }

    #[test]
    fn popular_simple() {
        let mut server = Server::new();
        let client = mocked_client(&server);

        let _m = server
            .mock("GET", "/videos/popular?per_page=1&page=4")
            .with_header("x-ratelimit-remaining", "3")
            .with_body(SEARCH_RESPONSE)
            .create();

        let result = client.popular_videos(1, 4).unwrap();

        assert_eq!(result.url, "https://www.pexels.com/videos/");
        assert_eq!(result.items[0].id, 1448735);
    }

    #[test]
    fn popular_server_error() {
        let mut server = Server::new();
        let client = mocked_client(&server);

        let _m = server
            .mock("GET", "/videos/popular?per_page=1&page=4")
            .with_status(500)
            .create();

        assert!(matches!(
            client.popular_videos(1, 4),
            Err(Error::Protocol(ProtocolError::Status { code: 500, .. }))
        ));
    }

    #[test]
    fn random_video_is_reproducible() {
        let mut server = Server::new();
        let page = StdRng::seed_from_u64(8).gen_range(0..1000u32);

        let m = server
            .mock(
                "GET",
                Matcher::Exact(format!("/videos/popular?per_page=1&page={}", page)),
            )
            .with_header("x-ratelimit-remaining", "50")
            .with_body(SEARCH_RESPONSE)
            .expect(2)
            .create();

        for _ in 0..2 {
            let client = Client::builder("unit-test-token")
                .video_api(format!("{}/videos/", server.url()))
                .page_selector(StdRng::seed_from_u64(8))
                .build()
                .unwrap();

            assert_eq!(client.random_video().unwrap().id, 1448735);
        }

        m.assert();
    }

    #[test]
    fn random_video_on_empty_page() {
        let mut server = Server::new();
        let client = mocked_client(&server);

        let _m = server
            .mock(
                "GET",
                Matcher::Regex(r"^/videos/popular\?per_page=1&page=\d+$".to_string()),
            )
            .with_header("x-ratelimit-remaining", "50")
            .with_body(r#"{"page":1,"per_page":1,"videos":[]}"#)
            .create();

        assert!(matches!(
            client.random_video(),
            Err(Error::EmptyResult(MediaKind::Video))
        ));
    }

    #[test]
    fn random_video_propagates_quota_error() {
        let mut server = Server::new();
        let client = mocked_client(&server);

        let _m = server
            .mock(
                "GET",
                Matcher::Regex(r"^/videos/popular\?per_page=1&page=\d+$".to_string()),
            )
            .with_body(SEARCH_RESPONSE)
            .create();

        assert!(matches!(
            client.random_video(),
            Err(Error::Protocol(ProtocolError::MissingRateLimit))
        ));
    }
}
