use anyhow::Result;
use clap::Parser;
use std::{io, process::ExitCode};
use timeshift::{
    cli::Cli,
    config::Config,
    engine::engine_for,
    transform::{transform_time_with, TransformOutcome},
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let cfg = Config::from_env(cli.zone)?;

    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_filter.as_str()));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    // ─── 2) resolve zone + selection ─────────────────────────────────
    let zone = cfg.zone;
    let engine = engine_for(zone);
    let selection = cli.selection(io::stdin().lock())?;
    debug!(%zone, len = selection.len(), "converting selection");

    // ─── 3) convert + report ─────────────────────────────────────────
    let result = transform_time_with(&engine, &selection);
    let code = if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };

    if cli.json {
        let outcome = TransformOutcome::from(result);
        println!("{}", serde_json::to_string(&outcome)?);
    } else {
        match result {
            Ok(text) => println!("{text}"),
            Err(err) => {
                info!(code = err.code(), "conversion failed");
                eprintln!("{err}");
            }
        }
    }
    Ok(code)
}
