// src/engine/mod.rs
//! The date-time backend the converters talk to.
//!
//! Everything that touches a calendar goes through [`DateEngine`], so the
//! classification and range rules in `transform` never depend on how a
//! particular date library parses or renders values.

use anyhow::Result;
use chrono::{DateTime, FixedOffset, Local, Utc};

use crate::config::Zone;

pub mod chrono_engine;

pub use chrono_engine::ChronoEngine;

/// Output layout for converted timestamps: `YYYY-MM-DD HH:mm:ss`, 24-hour clock.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How an epoch value should be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EpochUnit {
    Seconds,
    Milliseconds,
}

impl EpochUnit {
    pub fn as_str(&self) -> &str {
        match self {
            EpochUnit::Seconds => "seconds",
            EpochUnit::Milliseconds => "milliseconds",
        }
    }
}

/// Parse, render and construct date-times in a single zone.
///
/// `Ok(None)` means the input does not describe a real date-time.
/// `Err` is reserved for faults inside the engine itself.
pub trait DateEngine {
    fn parse(&self, text: &str) -> Result<Option<DateTime<FixedOffset>>>;

    fn format(&self, dt: &DateTime<FixedOffset>) -> Result<String>;

    fn from_epoch(&self, value: i64, unit: EpochUnit) -> Result<Option<DateTime<FixedOffset>>>;
}

impl<E: DateEngine + ?Sized> DateEngine for Box<E> {
    fn parse(&self, text: &str) -> Result<Option<DateTime<FixedOffset>>> {
        (**self).parse(text)
    }

    fn format(&self, dt: &DateTime<FixedOffset>) -> Result<String> {
        (**self).format(dt)
    }

    fn from_epoch(&self, value: i64, unit: EpochUnit) -> Result<Option<DateTime<FixedOffset>>> {
        (**self).from_epoch(value, unit)
    }
}

/// Build the chrono-backed engine for a configured zone.
pub fn engine_for(zone: Zone) -> Box<dyn DateEngine + Send + Sync> {
    match zone {
        Zone::Local => Box::new(ChronoEngine::new(Local)),
        Zone::Utc => Box::new(ChronoEngine::new(Utc)),
        Zone::Fixed(offset) => Box::new(ChronoEngine::new(offset)),
    }
}
