use serde::{Deserialize, Serialize};

/// Metadata of one day's picture, as returned by the APOD API.
///
/// Missing fields are left empty, unknown ones are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Apod {
    pub copyright: Option<String>,
    /// `YYYY-MM-DD`
    pub date: String,
    pub explanation: String,
    #[serde(rename = "hdurl")]
    pub hd_url: Option<String>,
    /// Usually `image` or `video`
    pub media_type: String,
    pub service_version: String,
    pub title: String,
    pub url: String,
}

impl Apod {
    pub fn is_image(&self) -> bool {
        self.media_type == "image"
    }
}

#[derive(Debug, Clone)]
pub struct Fetched {
    pub apod: Apod,
    pub archive_url: String,
}

#[derive(Debug, Clone)]
pub struct HdImage {
    /// `YYYY-MM-DD`
    pub date: String,
    pub explanation: String,
    pub image: Vec<u8>,
    pub content_type: Option<String>,
    pub archive_url: String,
}
