//! WebSocket client for the live stats feed.
//!
//! The client:
//! - derives the feed endpoint from the page URL (`http` -> `ws`, `https` -> `wss`)
//! - subscribes once, without reconnecting
//! - decodes every inbound frame as a stats snapshot and renders it into the
//!   page the URL points at
//! - stops on a close frame, end of stream or a shutdown signal

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod message;
pub mod shutdown;

pub use client::{consume, FeedSummary, StatsFeed};
pub use config::{SinkKind, WatchConfig};
pub use endpoint::{feed_url, parse_page_url, DEFAULT_FEED_PATH};
pub use error::FeedError;
pub use message::{decode, Frame};
pub use shutdown::ShutdownController;
