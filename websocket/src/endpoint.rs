//! Feed endpoint derivation.

use url::Url;

use crate::FeedError;

/// Path of the stats feed, relative to the page origin.
pub const DEFAULT_FEED_PATH: &str = "/api/stats/ws";

pub fn parse_page_url(page_url: &str) -> Result<Url, FeedError> {
    Url::parse(page_url).map_err(|e| FeedError::InvalidUrl {
        url: page_url.to_owned(),
        reason: e.to_string(),
    })
}

/// The feed URL for a page: `feed_path` resolved against the page, with
/// `http` mapped to `ws` and `https` to `wss`.
pub fn feed_url(page_url: &Url, feed_path: &str) -> Result<Url, FeedError> {
    let scheme = match page_url.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => return Err(FeedError::UnsupportedScheme(other.to_owned())),
    };
    let mut url = page_url.join(feed_path).map_err(|e| FeedError::InvalidUrl {
        url: feed_path.to_owned(),
        reason: e.to_string(),
    })?;
    url.set_scheme(scheme)
        .map_err(|()| FeedError::UnsupportedScheme(scheme.to_owned()))?;
    Ok(url)
}
