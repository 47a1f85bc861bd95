use chrono::{Datelike, Local};
use tracing::{debug, error, warn};

use super::{TransformError, TransformResult};
use crate::engine::{ChronoEngine, DateEngine};

pub const MIN_YEAR: i32 = 1970;
pub const MAX_YEAR: i32 = 2038;

/// Parse a date-time string (read in the host zone unless it carries an
/// offset) and return its epoch milliseconds as plain decimal text.
pub fn string_to_timestamp(text: &str) -> TransformResult {
    string_to_timestamp_with(&ChronoEngine::new(Local), text)
}

pub fn string_to_timestamp_with<E>(engine: &E, text: &str) -> TransformResult
where
    E: DateEngine + ?Sized,
{
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TransformError::EmptyTimeString);
    }

    let dt = match engine.parse(trimmed) {
        Ok(Some(dt)) => dt,
        Ok(None) => {
            warn!(text = trimmed, "invalid time format");
            return Err(TransformError::InvalidTimeFormat);
        }
        Err(e) => {
            error!(text = trimmed, error = ?e, "parsing time string failed");
            return Err(TransformError::TimeStringConversionFailed);
        }
    };

    let year = dt.year();
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        warn!(text = trimmed, year, "time out of supported range");
        return Err(TransformError::OutOfRange);
    }

    let millis = dt.timestamp_millis();
    debug!(text = trimmed, millis, "string → timestamp");
    Ok(millis.to_string())
}
