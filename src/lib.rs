//! Convert a selected piece of text between a Unix timestamp and a
//! `YYYY-MM-DD HH:mm:ss` date-time string.
//!
//! ```
//! use chrono::Utc;
//! use timeshift::{engine::ChronoEngine, transform_time_with};
//!
//! let utc = ChronoEngine::new(Utc);
//! assert_eq!(transform_time_with(&utc, "1609459200").unwrap(), "2021-01-01 00:00:00");
//! assert_eq!(transform_time_with(&utc, "2021-01-01 00:00:00").unwrap(), "1609459200000");
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod transform;

pub use transform::{
    detect_timestamp, string_to_timestamp, timestamp_to_string, transform_time,
    transform_time_with, TimestampInfo, TransformError, TransformOutcome, TransformResult,
};
