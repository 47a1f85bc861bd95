//! Conversion failures reported back to the caller.

/// Why a selection could not be converted. `Display` is the user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TransformError {
    /// Nothing but whitespace was selected.
    #[error("please select text to convert")]
    EmptySelection,

    /// The date-string path was handed blank text.
    #[error("time string must not be empty")]
    EmptyTimeString,

    /// A classified timestamp has no calendar date.
    #[error("invalid timestamp")]
    InvalidTimestamp,

    /// The date engine faulted while building or formatting a timestamp.
    #[error("timestamp conversion failed")]
    TimestampConversionFailed,

    /// The text is neither a timestamp nor a date-time the parser accepts.
    #[error("invalid time format")]
    InvalidTimeFormat,

    /// Parsed date falls outside 1970..=2038.
    #[error("time out of supported range (1970-2038)")]
    OutOfRange,

    /// The date engine faulted while parsing a date string.
    #[error("time string conversion failed")]
    TimeStringConversionFailed,
}

impl TransformError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            TransformError::EmptySelection => "empty_selection",
            TransformError::EmptyTimeString => "empty_time_string",
            TransformError::InvalidTimestamp => "invalid_timestamp",
            TransformError::TimestampConversionFailed => "timestamp_conversion_failed",
            TransformError::InvalidTimeFormat => "invalid_time_format",
            TransformError::OutOfRange => "out_of_range",
            TransformError::TimeStringConversionFailed => "time_string_conversion_failed",
        }
    }
}
