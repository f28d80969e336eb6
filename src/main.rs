use anyhow::Result;
use csvmax::scan;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// The input location is fixed relative to the working directory; there is
/// no CLI surface.
const INPUT_PATH: &str = "data/example_messy.csv";

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();

    // ─── 2) scan the document ────────────────────────────────────────
    // Fatal errors bubble out here: nothing is printed to stdout and the
    // process exits non-zero with the diagnostic on stderr.
    let outcome = scan::run(INPUT_PATH)?;
    info!(
        scanned = outcome.rows_scanned,
        skipped = outcome.rows_skipped,
        "scan complete"
    );

    // ─── 3) report the maximum ───────────────────────────────────────
    println!("{}", outcome.max);
    Ok(())
}
