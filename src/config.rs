// src/config.rs
use anyhow::{anyhow, bail, Context, Result};
use chrono::FixedOffset;
use once_cell::sync::Lazy;
use regex::Regex;
use std::{env, fmt, str::FromStr};

pub const ZONE_VAR: &str = "TIMESHIFT_ZONE";
pub const LOG_VAR: &str = "TIMESHIFT_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// `+08:00`, `-0530`, `+8`
static OFFSET_RE: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^([+-])([0-9]{1,2})(?::?([0-9]{2}))?$"));

/// Which zone timestamps are rendered in and date strings are read in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Zone {
    /// The host process's local zone.
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl FromStr for Zone {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "local" => return Ok(Zone::Local),
            "utc" | "z" => return Ok(Zone::Utc),
            _ => {}
        }

        let re = OFFSET_RE
            .as_ref()
            .map_err(|e| anyhow!("compiling offset pattern: {e}"))?;
        let caps = re
            .captures(s)
            .ok_or_else(|| anyhow!("unrecognised zone {s:?} (expected local, utc or ±HH:MM)"))?;

        let hours: i32 = caps[2].parse()?;
        let minutes: i32 = caps.get(3).map_or(Ok(0), |m| m.as_str().parse())?;
        if hours > 23 || minutes > 59 {
            bail!("zone offset {s:?} out of range");
        }
        let mut secs = hours * 3600 + minutes * 60;
        if &caps[1] == "-" {
            secs = -secs;
        }
        let offset =
            FixedOffset::east_opt(secs).ok_or_else(|| anyhow!("zone offset {s:?} out of range"))?;
        Ok(Zone::Fixed(offset))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => f.write_str("local"),
            Zone::Utc => f.write_str("utc"),
            Zone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

/// Runtime settings, read from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub zone: Zone,
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zone: Zone::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// `zone_override` (the `--zone` flag) wins over `TIMESHIFT_ZONE`, which
    /// is then not read at all.
    pub fn from_env(zone_override: Option<Zone>) -> Result<Self> {
        Self::from_lookup(zone_override, |key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup<F>(zone_override: Option<Zone>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(zone) = zone_override {
            cfg.zone = zone;
        } else if let Some(zone) = get(ZONE_VAR) {
            cfg.zone = zone
                .parse()
                .with_context(|| format!("invalid {ZONE_VAR}"))?;
        }
        if let Some(filter) = get(LOG_VAR) {
            cfg.log_filter = filter.trim().to_string();
        }
        Ok(cfg)
    }
}
