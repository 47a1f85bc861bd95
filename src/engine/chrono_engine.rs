// src/engine/chrono_engine.rs
use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone};
use once_cell::sync::OnceCell;
use regex::{Captures, Regex};
use std::fmt::Write;
use tracing::{debug, trace};

use super::{DateEngine, EpochUnit, DISPLAY_FORMAT};

/// `YYYY[-/]MM[-/]DD[T ]HH:mm:ss.fff` with every separator optional and every
/// component after the year optional. Never matches a trailing `Z`, so UTC
/// strings fall through to the RFC 3339 parser.
const LOOSE_PATTERN: &str = r"(?i)^([0-9]{4})[-/]?([0-9]{1,2})?[-/]?([0-9]{0,2})[T\s]*([0-9]{1,2})?:?([0-9]{1,2})?:?([0-9]{1,2})?[.:]?([0-9]+)?$";

/// ISO-8601 shapes RFC 3339 refuses: no seconds, basic `+hhmm` offsets,
/// hour-only offsets. `%#z` also takes `Z`.
const ISO_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%dT%H:%M:%S%#z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
];

fn loose_regex() -> Result<&'static Regex> {
    static LOOSE: OnceCell<Regex> = OnceCell::new();
    LOOSE
        .get_or_try_init(|| Regex::new(LOOSE_PATTERN))
        .context("compiling loose date-time pattern")
}

/// `DateEngine` over any chrono time zone.
#[derive(Clone, Debug)]
pub struct ChronoEngine<Tz: TimeZone> {
    tz: Tz,
}

impl<Tz: TimeZone> ChronoEngine<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    fn to_fixed(dt: DateTime<Tz>) -> DateTime<FixedOffset> {
        let offset = dt.offset().fix();
        dt.with_timezone(&offset)
    }

    /// Reads a loose local date-time. Out-of-range components reject the input
    /// rather than rolling over into the next month or day.
    fn parse_loose(&self, text: &str) -> Result<Option<DateTime<FixedOffset>>> {
        let Some(caps) = loose_regex()?.captures(text) else {
            return Ok(None);
        };
        let Some(naive) = naive_from_captures(&caps) else {
            debug!(text, "loose date-time has out-of-range components");
            return Ok(None);
        };
        // DST gaps have no instant; overlaps resolve to the earlier one.
        Ok(self
            .tz
            .from_local_datetime(&naive)
            .earliest()
            .map(Self::to_fixed))
    }

    fn shift(&self, dt: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        Self::to_fixed(dt.with_timezone(&self.tz))
    }
}

fn naive_from_captures(caps: &Captures<'_>) -> Option<NaiveDateTime> {
    let num = |i: usize, default: u32| -> Option<u32> {
        match caps.get(i).map(|m| m.as_str()) {
            None | Some("") => Some(default),
            Some(s) => s.parse().ok(),
        }
    };

    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month = num(2, 1)?;
    let day = num(3, 1)?;
    let hour = num(4, 0)?;
    let min = num(5, 0)?;
    let sec = num(6, 0)?;
    // fraction digits beyond milliseconds are dropped, short ones right-padded
    let millis = match caps.get(7) {
        Some(m) => {
            let digits: String = m.as_str().chars().chain("00".chars()).take(3).collect();
            digits.parse().ok()?
        }
        None => 0,
    };

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_milli_opt(hour, min, sec, millis)
}

impl<Tz: TimeZone> DateEngine for ChronoEngine<Tz> {
    fn parse(&self, text: &str) -> Result<Option<DateTime<FixedOffset>>> {
        let text = text.trim();

        if let Some(dt) = self.parse_loose(text)? {
            trace!(text, "parsed as loose local date-time");
            return Ok(Some(dt));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            trace!(text, "parsed as RFC 3339");
            return Ok(Some(self.shift(dt)));
        }
        if let Some(dt) = ISO_LAYOUTS
            .iter()
            .find_map(|layout| DateTime::parse_from_str(text, layout).ok())
        {
            trace!(text, "parsed as ISO-8601 with offset");
            return Ok(Some(self.shift(dt)));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
            trace!(text, "parsed as RFC 2822");
            return Ok(Some(self.shift(dt)));
        }

        debug!(text, "no date-time layout matched");
        Ok(None)
    }

    fn format(&self, dt: &DateTime<FixedOffset>) -> Result<String> {
        let mut out = String::with_capacity(DISPLAY_FORMAT.len() + 2);
        write!(out, "{}", self.shift(*dt).format(DISPLAY_FORMAT))
            .with_context(|| format!("formatting {dt:?}"))?;
        Ok(out)
    }

    fn from_epoch(&self, value: i64, unit: EpochUnit) -> Result<Option<DateTime<FixedOffset>>> {
        let dt = match unit {
            EpochUnit::Seconds => self.tz.timestamp_opt(value, 0).single(),
            EpochUnit::Milliseconds => self.tz.timestamp_millis_opt(value).single(),
        };
        if dt.is_none() {
            debug!(value, unit = unit.as_str(), "epoch value has no calendar date");
        }
        Ok(dt.map(Self::to_fixed))
    }
}
