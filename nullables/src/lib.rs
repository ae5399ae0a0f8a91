//! Nullable infrastructure for deterministic testing.
//!
//! The page views and the feed client talk to the outside world through two
//! seams: display sinks and the WebSocket message stream. This crate provides
//! test-friendly implementations of both that:
//! - record every write so tests can assert on it
//! - replay a scripted sequence of frames
//! - never touch a terminal or the network

pub mod display;
pub mod feed;

pub use display::{NullDisplay, NullPage};
pub use feed::NullFeed;
