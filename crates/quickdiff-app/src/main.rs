use std::process::ExitCode;

use clap::Parser;
use quickdiff_app::cli::Args;
use quickdiff_app::{execute, EXIT_ERROR};

// ──────────────────────────────────────────────
// Entry point
// ──────────────────────────────────────────────

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match execute(&args, &mut out) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            log::error!("quickdiff failed: {}", e);
            eprintln!("quickdiff: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
