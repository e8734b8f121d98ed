// Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use quickdiff_core::DiffMode;

use crate::input::InputSource;
use crate::settings::{ColorChoice, OutputFormat, Settings};

/// Compare two texts line by line or word by word.
///
/// Exit status is 0 when the inputs are identical, 1 when they differ and 2
/// on error.
#[derive(Debug, Clone, Parser)]
#[command(name = "quickdiff", version)]
pub struct Args {
    /// Original text: a file path, or `-` for stdin.
    pub before: String,

    /// Modified text: a file path, or `-` for stdin.
    pub after: String,

    /// Compare `line`s or `word`s.
    #[arg(short, long)]
    pub mode: Option<DiffMode>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Treat BEFORE and AFTER as literal text instead of paths.
    #[arg(short, long)]
    pub text: bool,

    /// Swap BEFORE and AFTER before comparing.
    #[arg(short, long)]
    pub swap: bool,

    /// Only print the `+added -removed =unchanged` summary.
    #[arg(long)]
    pub stats_only: bool,

    /// Total width for side-by-side output.
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Settings file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Store the effective mode/format/color/width as the new defaults.
    #[arg(long)]
    pub save_settings: bool,
}

impl Args {
    pub fn before_source(&self) -> InputSource {
        InputSource::from_arg(&self.before, self.text)
    }

    pub fn after_source(&self) -> InputSource {
        InputSource::from_arg(&self.after, self.text)
    }

    /// Flags given on the command line take precedence over `settings`.
    pub fn apply(&self, settings: Settings) -> Settings {
        Settings {
            mode: self.mode.unwrap_or(settings.mode),
            format: self.format.unwrap_or(settings.format),
            color: self.color.unwrap_or(settings.color),
            side_by_side_width: self.width.unwrap_or(settings.side_by_side_width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_settings() {
        let args = Args::try_parse_from(["quickdiff", "a", "b", "--mode", "word", "-w", "80"]).unwrap();
        let settings = Settings {
            format: OutputFormat::Json,
            ..Settings::default()
        };
        let effective = args.apply(settings);
        assert_eq!(effective.mode, DiffMode::Word);
        assert_eq!(effective.format, OutputFormat::Json);
        assert_eq!(effective.side_by_side_width, 80);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Args::try_parse_from(["quickdiff", "a", "b", "--mode", "char"]).is_err());
    }

    #[test]
    fn dash_reads_stdin_unless_literal() {
        let args = Args::try_parse_from(["quickdiff", "-", "b.txt"]).unwrap();
        assert_eq!(args.before_source(), InputSource::Stdin);
        assert_eq!(args.after_source(), InputSource::Path(PathBuf::from("b.txt")));

        let args = Args::try_parse_from(["quickdiff", "--text", "-", "b"]).unwrap();
        assert_eq!(args.before_source(), InputSource::Literal("-".into()));
    }
}
