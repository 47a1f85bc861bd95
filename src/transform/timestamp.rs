use chrono::Local;
use tracing::{debug, error, warn};

use super::{TimestampInfo, TransformError, TransformResult};
use crate::engine::{ChronoEngine, DateEngine};

/// Render a classified timestamp as `YYYY-MM-DD HH:mm:ss` in the host zone.
pub fn timestamp_to_string(info: TimestampInfo) -> TransformResult {
    timestamp_to_string_with(&ChronoEngine::new(Local), info)
}

pub fn timestamp_to_string_with<E>(engine: &E, info: TimestampInfo) -> TransformResult
where
    E: DateEngine + ?Sized,
{
    let dt = match engine.from_epoch(info.value, info.unit()) {
        Ok(Some(dt)) => dt,
        Ok(None) => {
            warn!(value = info.value, unit = info.unit().as_str(), "invalid timestamp");
            return Err(TransformError::InvalidTimestamp);
        }
        Err(e) => {
            error!(value = info.value, error = ?e, "building date-time failed");
            return Err(TransformError::TimestampConversionFailed);
        }
    };

    let formatted = engine.format(&dt).map_err(|e| {
        error!(value = info.value, error = ?e, "formatting date-time failed");
        TransformError::TimestampConversionFailed
    })?;
    debug!(value = info.value, %formatted, "timestamp → string");
    Ok(formatted)
}
