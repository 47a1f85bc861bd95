use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;

use crate::config::Zone;

#[derive(Parser, Debug)]
#[command(
    name = "timeshift",
    version,
    about = "Convert between Unix timestamps and date-time strings"
)]
pub struct Cli {
    /// Text to convert; words are joined with spaces. Reads stdin when omitted.
    pub text: Vec<String>,

    #[arg(
        long,
        value_name = "ZONE",
        allow_hyphen_values = true,
        help = "Zone to render and read date-times in: local, utc or ±HH:MM (default: $TIMESHIFT_ZONE or local)"
    )]
    pub zone: Option<Zone>,

    #[arg(long, help = "Print the outcome as JSON")]
    pub json: bool,
}

impl Cli {
    /// The selection to convert: positional words, or everything on `input`.
    pub fn selection(&self, mut input: impl Read) -> Result<String> {
        if !self.text.is_empty() {
            return Ok(self.text.join(" "));
        }
        let mut buf = String::new();
        input
            .read_to_string(&mut buf)
            .context("reading selection from stdin")?;
        Ok(buf)
    }
}
