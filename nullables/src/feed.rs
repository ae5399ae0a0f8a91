//! Nullable stats feed: a scripted stream of WebSocket frames.

use futures_util::stream::{self, Stream};
use heartbeat_types::Stats;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};

/// Frames to replay, in order, as if read from a live socket.
#[derive(Default)]
pub struct NullFeed {
    frames: Vec<Result<Message, WsError>>,
}

impl NullFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a raw text frame.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.frames.push(Ok(Message::Text(text.into())));
        self
    }

    /// Enqueue a text frame carrying `stats` as JSON.
    pub fn stats(self, stats: &Stats) -> Self {
        let json = serde_json::to_string(stats).expect("stats serialize to JSON");
        self.text(json)
    }

    pub fn binary(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.frames.push(Ok(Message::Binary(bytes.into())));
        self
    }

    pub fn ping(mut self) -> Self {
        self.frames.push(Ok(Message::Ping(Vec::new())));
        self
    }

    pub fn close(mut self) -> Self {
        self.frames.push(Ok(Message::Close(None)));
        self
    }

    /// Enqueue a transport error.
    pub fn error(mut self, err: WsError) -> Self {
        self.frames.push(Err(err));
        self
    }

    pub fn into_stream(self) -> impl Stream<Item = Result<Message, WsError>> + Unpin {
        stream::iter(self.frames)
    }
}
