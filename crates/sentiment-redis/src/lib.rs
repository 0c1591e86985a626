//! Sentiment Redis Data Layer
//!
//! Async Redis persistence for analysis results.

pub mod client;
pub mod results;

pub use client::{connect, RedisError, RedisResult};
pub use results::{RedisResultStore, DEFAULT_TABLE};
