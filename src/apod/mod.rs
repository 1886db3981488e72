pub mod types;

use std::env::consts;

use chrono::NaiveDate;
use reqwest::{header::CONTENT_TYPE, Request, StatusCode};
use tracing::{debug, info, warn};

use crate::{config::Config, Error, Result};

use self::types::{Apod, Fetched, HdImage};

const RATE_LIMIT_MARKER: &str = "OVER_RATE_LIMIT";
const SERVICE_VERSION: &str = "v1";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Client of the Astronomy Picture Of the Day API: <https://api.nasa.gov/#apod>
#[derive(Debug, Clone)]
pub struct ApodClient {
    client: reqwest::Client,
    config: Config,
}

impl Default for ApodClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApodClient {
    /// Takes the API key from the environment, see [`Config::from_env`].
    pub fn new() -> Self {
        info!("Making APOD client");

        Self::with_config(Config::from_env())
    }

    pub fn with_config(config: Config) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(format!(
                "{}/{} on {}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                consts::OS
            ))
            .build()
            .unwrap_or_else(|err| {
                warn!("Failed to build the HTTP client, using the default one: {err}");
                reqwest::Client::new()
            });

        Self { client, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn request(&self, date: Option<NaiveDate>, hd: bool) -> Result<Request> {
        let mut query = vec![("api_key", self.config.api_key.clone())];

        if let Some(date) = date {
            query.push(("date", date.format(DATE_FORMAT).to_string()));
        }

        if hd {
            query.push(("hd", "true".to_string()));
        }

        self.client
            .get(&self.config.api_url)
            .query(&query)
            .build()
            .map_err(Error::Transport)
    }

    /// Fetch the metadata of the picture of the given `date`, or of today's
    /// one if `date` is `None`. The `hd` flag asks for the high definition url.
    pub async fn fetch(&self, date: Option<NaiveDate>, hd: bool) -> Result<Fetched> {
        let request = self.request(date, hd)?;

        debug!(?date, hd, "Fetching APOD");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(Error::Transport)?;

        let bytes = response.bytes().await.map_err(Error::Transport)?;

        let apod = parse_apod(&bytes)?;

        if apod.service_version != SERVICE_VERSION {
            warn!(
                "Remote service version `{}` != `{SERVICE_VERSION}`",
                apod.service_version
            );
        }

        let archive_url = self.config.archive_page(&apod.date);

        Ok(Fetched { apod, archive_url })
    }

    pub async fn fetch_today(&self, hd: bool) -> Result<Fetched> {
        self.fetch(None, hd).await
    }

    /// Fetch today's picture in high definition along with its explanation.
    pub async fn fetch_hd(&self) -> Result<HdImage> {
        let Fetched { apod, archive_url } = self.fetch_today(true).await?;

        let (content_type, image) = self.load_image(&apod.url).await?;

        Ok(HdImage {
            date: apod.date,
            explanation: apod.explanation,
            image,
            content_type,
            archive_url,
        })
    }

    async fn load_image(&self, url: &str) -> Result<(Option<String>, Vec<u8>)> {
        debug!(url, "Loading image");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(Error::ImageTransport)?;

        let status = response.status();

        if status != StatusCode::OK {
            return Err(Error::ImageStatus { status });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await.map_err(Error::ImageTransport)?;

        Ok((content_type, bytes.to_vec()))
    }
}

/// The rate limited response isn't shaped like [`Apod`], so the marker
/// must be looked for before decoding.
fn parse_apod(bytes: &[u8]) -> Result<Apod> {
    let body = String::from_utf8_lossy(bytes);

    if body.contains(RATE_LIMIT_MARKER) {
        return Err(Error::RateLimited);
    }

    serde_json::from_slice(bytes).map_err(|source| Error::Decode {
        source,
        body: body.into_owned(),
    })
}
