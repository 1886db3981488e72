use reqwest::StatusCode;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("APOD request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("APOD rate limit reached, wait or use a proper key instead of the default one")]
    RateLimited,

    #[error("Failed to parse APOD response: {source}\n{body}")]
    Decode {
        source: serde_json::Error,
        body: String,
    },

    #[error("Image request failed: {0}")]
    ImageTransport(#[source] reqwest::Error),

    #[error("Image request status: {status} != 200")]
    ImageStatus { status: StatusCode },
}
