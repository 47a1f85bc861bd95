// src/transform/mod.rs
//! Selection → converted text.
//!
//! A selection that looks like an epoch timestamp becomes a
//! `YYYY-MM-DD HH:mm:ss` string; anything else is read as a date-time and
//! becomes epoch milliseconds.

use chrono::Local;
use tracing::debug;

use crate::engine::{ChronoEngine, DateEngine};

pub mod detect;
pub mod error;
pub mod outcome;
pub mod string;
pub mod timestamp;

pub use detect::{detect_timestamp, TimestampInfo};
pub use error::TransformError;
pub use outcome::TransformOutcome;
pub use string::{string_to_timestamp, string_to_timestamp_with};
pub use timestamp::{timestamp_to_string, timestamp_to_string_with};

/// Converted text on success, the reason it could not be converted otherwise.
pub type TransformResult = Result<String, TransformError>;

/// Convert a selection using the host's local zone.
pub fn transform_time(selected_text: &str) -> TransformResult {
    transform_time_with(&ChronoEngine::new(Local), selected_text)
}

#[tracing::instrument(level = "debug", skip(engine))]
pub fn transform_time_with<E>(engine: &E, selected_text: &str) -> TransformResult
where
    E: DateEngine + ?Sized,
{
    if selected_text.trim().is_empty() {
        return Err(TransformError::EmptySelection);
    }

    match detect_timestamp(selected_text) {
        Some(info) => {
            debug!(value = info.value, unit = info.unit().as_str(), "classified as timestamp");
            timestamp_to_string_with(engine, info)
        }
        None => {
            debug!("classified as date string");
            string_to_timestamp_with(engine, selected_text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Zone;
    use crate::engine::engine_for;
    use chrono::Utc;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,timeshift::transform=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn run(text: &str) -> TransformResult {
        transform_time_with(&ChronoEngine::new(Utc), text)
    }

    #[test]
    fn test_timestamp_to_string_path() {
        init_test_logging();
        assert_eq!(run("1609459200"), Ok("2021-01-01 00:00:00".to_string()));
        assert_eq!(run("1609459200000"), Ok("2021-01-01 00:00:00".to_string()));
    }

    #[test]
    fn test_string_to_timestamp_path() {
        init_test_logging();
        assert_eq!(run("2021-01-01 00:00:00"), Ok("1609459200000".to_string()));
    }

    #[test]
    fn test_empty_selection_takes_precedence() {
        assert_eq!(run(""), Err(TransformError::EmptySelection));
        assert_eq!(run("   \n\t"), Err(TransformError::EmptySelection));
    }

    #[test]
    fn test_failures() {
        init_test_logging();
        assert_eq!(run("invalid-input"), Err(TransformError::InvalidTimeFormat));
        assert_eq!(run("1969-01-01 00:00:00"), Err(TransformError::OutOfRange));
        // too many digits for a timestamp and not a date either
        assert_eq!(run("123456789012345"), Err(TransformError::InvalidTimeFormat));
    }

    #[test]
    fn test_window_edges() {
        for text in ["2147483647", "946684800000", "2147483647000", "0946684800"] {
            assert!(run(text).is_ok(), "{text}");
        }
        assert_eq!(run("2147483647"), Ok("2038-01-19 03:14:07".to_string()));
    }

    #[test]
    fn test_various_date_layouts() {
        for text in [
            "2021-01-01",
            "2021/01/01",
            "2021-01-01 12:30:45",
            "2021/01/01 12:30:45",
            "2021-01-01T12:30:45.123Z",
            "2021-01-01T00:00Z",
            "2021-01-01T00:00:00+0800",
        ] {
            assert!(run(text).is_ok(), "layout {text} should convert");
        }
    }

    #[test]
    fn test_iso_offsets_convert_to_instant() {
        assert_eq!(run("2021-01-01T00:00Z"), Ok("1609459200000".to_string()));
        assert_eq!(
            run("2021-01-01T00:00:00+0800"),
            Ok("1609430400000".to_string())
        );
    }

    #[test]
    fn test_round_trip_seconds() {
        let engine = ChronoEngine::new(Utc);
        let step = (detect::MAX_EPOCH_SECONDS - detect::MIN_EPOCH_SECONDS) / 53;
        let mut t = detect::MIN_EPOCH_SECONDS;
        while t <= detect::MAX_EPOCH_SECONDS {
            let text = timestamp_to_string_with(&engine, TimestampInfo::seconds(t)).unwrap();
            assert_eq!(
                string_to_timestamp_with(&engine, &text),
                Ok((t * 1000).to_string()),
                "round trip of {t} via {text}"
            );
            t += step;
        }
    }

    #[test]
    fn test_round_trip_in_fixed_zone() {
        let engine = engine_for("-03:30".parse::<Zone>().unwrap());
        let text = transform_time_with(&engine, "1609459200").unwrap();
        assert_eq!(text, "2020-12-31 20:30:00");
        assert_eq!(
            transform_time_with(&engine, &text),
            Ok("1609459200000".to_string())
        );
    }

    #[test]
    fn test_local_entry_point_round_trips() {
        // host zone is unknown here, so only check self-consistency
        let text = transform_time("1609459200").unwrap();
        assert_eq!(transform_time(&text), Ok("1609459200000".to_string()));
        assert_eq!(transform_time(" "), Err(TransformError::EmptySelection));
    }
}
