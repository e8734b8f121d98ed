// quickdiff-app: command-line front end over the diff engine.

pub mod cli;
pub mod input;
pub mod output;
pub mod settings;

use std::io::{self, IsTerminal, Write};

use quickdiff_engine::DiffSession;

use crate::cli::Args;
use crate::settings::{load_settings, save_settings, settings_path, ColorChoice};

/// How a comparison turned out, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Identical,
    Different,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Identical => 0,
            Outcome::Different => 1,
        }
    }
}

/// Exit status for usage and I/O failures.
pub const EXIT_ERROR: u8 = 2;

fn use_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    }
}

/// Load settings and inputs, compare, and write the result to `out`.
pub fn execute<W: Write>(args: &Args, out: &mut W) -> io::Result<Outcome> {
    let settings = args.apply(load_settings(args.settings.as_deref()));

    if args.save_settings {
        let path = args
            .settings
            .clone()
            .or_else(settings_path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory"))?;
        save_settings(&path, &settings)?;
    }

    let (before, after) = input::read_pair(&args.before_source(), &args.after_source())?;

    let mut session = DiffSession::with_texts(before, after, settings.mode);
    if args.swap {
        session.swap();
    }
    let result = session.compare();

    let color = use_color(settings.color);
    if color {
        colored::control::set_override(true);
    }
    output::write_result(out, result, &settings, color, args.stats_only)?;

    Ok(if result.has_changes() {
        Outcome::Different
    } else {
        Outcome::Identical
    })
}
