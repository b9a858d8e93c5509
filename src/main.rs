//! logtrack — feed access-log lines in, get track-event JSON out.
//!
//! Reads lines from stdin (or a file argument), runs each through the
//! [`logtrack_core::LineTransformer`], and writes one JSON event per line on
//! stdout. Skips and per-line errors are reported via `tracing` on stderr;
//! outcome policy lives entirely here, the transformer itself never logs.

use std::io::{BufRead, Write};

use clap::Parser;
use logtrack_core::{Config, LineTransformer, Outcome, TransformError};

#[derive(Parser)]
#[command(name = "logtrack", about = "Turn nginx access-log lines into analytics track events")]
struct Cli {
    /// Input log file; reads stdin when omitted.
    input: Option<std::path::PathBuf>,

    /// Override the config file location (default ~/.config/logtrack/config.toml).
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

/// Per-outcome counters for one run.
#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    emitted: u64,
    skipped: u64,
    dropped: u64,
}

/// Pump every line from `reader` through the transformer, writing one JSON
/// event per emitted line to `out`.
///
/// Per-line conditions — transform errors and unreadable (non-UTF-8) lines —
/// are logged and counted, never fatal. Only output failures abort the run:
/// a broken stdout means nobody is consuming the events.
fn pump(
    reader: impl BufRead,
    out: &mut impl Write,
    transformer: &LineTransformer,
) -> anyhow::Result<Tally> {
    let mut tally = Tally::default();

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(%err, "unreadable line dropped");
                tally.dropped += 1;
                continue;
            }
        };
        match transformer.transform(&line) {
            Ok(Outcome::Event(event)) => {
                serde_json::to_writer(&mut *out, &event)?;
                out.write_all(b"\n")?;
                tally.emitted += 1;
            }
            Ok(Outcome::Skipped(reason)) => {
                tracing::debug!(%reason, "line skipped");
                tally.skipped += 1;
            }
            Err(TransformError::EmptyInput) => {
                tracing::debug!("empty line skipped");
                tally.skipped += 1;
            }
            Err(err) => {
                tracing::warn!(%err, "line dropped");
                tally.dropped += 1;
            }
        }
    }
    out.flush()?;

    Ok(tally)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::load(cli.config)?;
    let transformer = LineTransformer::new(config.transform);

    let stdin = std::io::stdin();
    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(std::io::BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(stdin.lock()),
    };

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());

    let tally = pump(reader, &mut out, &transformer)?;

    tracing::info!(
        emitted = tally.emitted,
        skipped = tally.skipped,
        dropped = tally.dropped,
        "input exhausted"
    );
    Ok(())
}
