use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported URL scheme `{0}` (expected http, https, ws or wss)")]
    UnsupportedScheme(String),

    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: tungstenite::Error,
    },

    #[error("feed transport error: {0}")]
    Transport(#[from] tungstenite::Error),

    #[error("config error: {0}")]
    Config(String),
}
