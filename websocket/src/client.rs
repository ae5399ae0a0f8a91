//! The stats feed subscription.

use futures_util::{Stream, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tracing::{debug, info, info_span, warn, Instrument};
use url::Url;

use heartbeat_page::{Page, PageRenderer, SlotMap};
use heartbeat_utils::DurationFormatter;

use crate::message::{decode, Frame};
use crate::{feed_url, parse_page_url, FeedError};

/// Counters for one subscription.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedSummary {
    /// Data frames read from the feed.
    pub received: u64,
    /// Snapshots written to the page.
    pub rendered: u64,
    /// Data frames that could not be decoded or rendered.
    pub skipped: u64,
}

/// A subscription to the stats feed that keeps one page up to date.
#[derive(Debug)]
pub struct StatsFeed {
    url: Url,
    renderer: PageRenderer,
}

impl StatsFeed {
    pub fn new(url: Url, renderer: PageRenderer) -> Self {
        Self { url, renderer }
    }

    /// Build the feed for a page URL: the page kind comes from its path and the
    /// endpoint from `feed_path` on the same origin.
    pub fn for_page(
        page_url: &str,
        feed_path: &str,
        slots: SlotMap,
        durations: DurationFormatter,
    ) -> Result<Self, FeedError> {
        let page_url = parse_page_url(page_url)?;
        let url = feed_url(&page_url, feed_path)?;
        let page = Page::from_path(page_url.path());
        Ok(Self::new(
            url,
            PageRenderer::new(page, slots).with_formatter(durations),
        ))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn renderer(&self) -> &PageRenderer {
        &self.renderer
    }

    /// Subscribe and render snapshots until the server closes the feed or
    /// shutdown is signalled. There is no reconnect.
    pub async fn run(&self, shutdown: broadcast::Receiver<()>) -> Result<FeedSummary, FeedError> {
        let span = info_span!("feed", url = %self.url, page = ?self.renderer.page());
        async {
            let (mut ws, _) =
                connect_async(self.url.as_str())
                    .await
                    .map_err(|source| FeedError::Connect {
                        url: self.url.to_string(),
                        source,
                    })?;
            info!("subscribed to stats feed");

            let summary = consume(&mut ws, &self.renderer, shutdown).await?;
            if let Err(e) = ws.close(None).await {
                debug!("close handshake failed: {e}");
            }
            info!(
                received = summary.received,
                rendered = summary.rendered,
                skipped = summary.skipped,
                "stats feed ended"
            );
            Ok::<_, FeedError>(summary)
        }
        .instrument(span)
        .await
    }
}

enum Step {
    Next(Option<Result<Message, WsError>>),
    Shutdown,
    ShutdownGone,
}

/// Read frames from `stream` and render each snapshot in arrival order.
///
/// Frames that fail to decode or render are logged and skipped. Ends on a
/// close frame, end of stream or shutdown; a transport error is returned.
pub async fn consume<S>(
    stream: &mut S,
    renderer: &PageRenderer,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<FeedSummary, FeedError>
where
    S: Stream<Item = Result<Message, WsError>> + Unpin,
{
    let mut summary = FeedSummary::default();
    let mut listening = true;

    loop {
        let step = tokio::select! {
            res = shutdown.recv(), if listening => match res {
                Ok(()) | Err(RecvError::Lagged(_)) => Step::Shutdown,
                Err(RecvError::Closed) => Step::ShutdownGone,
            },
            next = stream.next() => Step::Next(next),
        };

        let message = match step {
            Step::Shutdown => {
                info!("shutdown requested, leaving feed");
                break;
            }
            Step::ShutdownGone => {
                listening = false;
                continue;
            }
            Step::Next(None) => {
                debug!("feed stream ended");
                break;
            }
            Step::Next(Some(message)) => message?,
        };

        match decode(message) {
            Ok(Frame::Stats(stats)) => {
                summary.received += 1;
                match renderer.render(&stats) {
                    Ok(written) => {
                        summary.rendered += 1;
                        debug!(written, "snapshot rendered");
                    }
                    Err(e) => {
                        summary.skipped += 1;
                        warn!("skipping snapshot: {e}");
                    }
                }
            }
            Ok(Frame::Ignored) => {}
            Ok(Frame::Closed) => {
                info!("server closed the feed");
                break;
            }
            Err(e) => {
                summary.received += 1;
                summary.skipped += 1;
                warn!("skipping undecodable frame: {e}");
            }
        }
    }

    Ok(summary)
}
