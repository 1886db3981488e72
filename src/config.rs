use std::env::var;

pub const API_KEY_VAR: &str = "NASA_API_KEY";

/// Shared key usable without registration. Subject to much stricter rate limits.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

pub const APOD_API_URL: &str = "https://api.nasa.gov/planetary/apod";

// The archive page of a particular day is `<base>YYMMDD.html`
pub const APOD_ARCHIVE_URL: &str = "https://apod.nasa.gov/apod/ap";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub archive_url: String,
}

impl Config {
    /// Reads the key from `NASA_API_KEY`, falling back to [`DEMO_API_KEY`]
    /// when the variable is unset or empty.
    pub fn from_env() -> Self {
        let config = Self::with_api_key(api_key_or_demo(var(API_KEY_VAR).ok()));

        if config.is_demo_key() {
            tracing::debug!("{API_KEY_VAR} is not set, using `{DEMO_API_KEY}`");
        }

        config
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: APOD_API_URL.to_string(),
            archive_url: APOD_ARCHIVE_URL.to_string(),
        }
    }

    pub fn is_demo_key(&self) -> bool {
        self.api_key == DEMO_API_KEY
    }

    /// Archive page for the given `YYYY-MM-DD` date under the configured base.
    pub fn archive_page(&self, date: &str) -> String {
        archive_url(&self.archive_url, date)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn api_key_or_demo(key: Option<String>) -> String {
    key.filter(|key| !key.is_empty())
        .unwrap_or_else(|| DEMO_API_KEY.to_string())
}

/// `2021-07-04` becomes `<base>210704.html`.
///
/// The date isn't validated, a malformed one yields a malformed url.
pub fn archive_url(base: &str, date: &str) -> String {
    let short = date.get(2..).unwrap_or_default().replacen('-', "", 2);

    format!("{base}{short}.html")
}
