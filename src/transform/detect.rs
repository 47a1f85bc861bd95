use tracing::trace;

use crate::engine::EpochUnit;

/// 2000-01-01T00:00:00Z
pub const MIN_EPOCH_SECONDS: i64 = 946_684_800;
/// 2038-01-19T03:14:07Z, the 32-bit signed rollover.
pub const MAX_EPOCH_SECONDS: i64 = 2_147_483_647;
pub const MIN_EPOCH_MILLIS: i64 = MIN_EPOCH_SECONDS * 1000;
pub const MAX_EPOCH_MILLIS: i64 = MAX_EPOCH_SECONDS * 1000;

/// An epoch value recognised in the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimestampInfo {
    pub value: i64,
    pub is_seconds: bool,
}

impl TimestampInfo {
    pub fn seconds(value: i64) -> Self {
        Self {
            value,
            is_seconds: true,
        }
    }

    pub fn millis(value: i64) -> Self {
        Self {
            value,
            is_seconds: false,
        }
    }

    pub fn unit(&self) -> EpochUnit {
        if self.is_seconds {
            EpochUnit::Seconds
        } else {
            EpochUnit::Milliseconds
        }
    }
}

/// Classify `text` as a 10-digit seconds or 13-digit milliseconds timestamp
/// between 2000-01-01 and 2038-01-19. Length is judged on the trimmed text,
/// so leading zeros count.
pub fn detect_timestamp(text: &str) -> Option<TimestampInfo> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let value: i64 = trimmed.parse().ok()?;
    if value <= 0 {
        return None;
    }

    let info = match trimmed.len() {
        10 if (MIN_EPOCH_SECONDS..=MAX_EPOCH_SECONDS).contains(&value) => {
            TimestampInfo::seconds(value)
        }
        13 if (MIN_EPOCH_MILLIS..=MAX_EPOCH_MILLIS).contains(&value) => {
            TimestampInfo::millis(value)
        }
        len => {
            trace!(len, value, "digits outside timestamp window");
            return None;
        }
    };
    Some(info)
}
