//! Decoding of inbound feed frames.

use heartbeat_types::Stats;
use tokio_tungstenite::tungstenite::Message;

/// What one inbound frame means to the subscriber.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// A stats snapshot to render.
    Stats(Box<Stats>),
    /// Control traffic with no payload (ping, pong, raw frames).
    Ignored,
    /// The server closed the feed.
    Closed,
}

/// Decode one frame. Text and binary frames must carry a JSON snapshot.
pub fn decode(message: Message) -> Result<Frame, serde_json::Error> {
    match message {
        Message::Text(text) => serde_json::from_str(&text).map(|s| Frame::Stats(Box::new(s))),
        Message::Binary(bytes) => {
            serde_json::from_slice(&bytes).map(|s| Frame::Stats(Box::new(s)))
        }
        Message::Close(_) => Ok(Frame::Closed),
        Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => Ok(Frame::Ignored),
    }
}
