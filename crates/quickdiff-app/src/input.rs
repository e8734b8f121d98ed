// Input loading: files, stdin, or literal text.

use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Path(PathBuf),
    Stdin,
    Literal(String),
}

impl InputSource {
    /// Interpret a positional argument. `-` means stdin unless `literal`.
    pub fn from_arg(arg: &str, literal: bool) -> Self {
        if literal {
            InputSource::Literal(arg.to_string())
        } else if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::Path(PathBuf::from(arg))
        }
    }
}

pub fn read_input(source: &InputSource) -> io::Result<String> {
    match source {
        InputSource::Path(path) => std::fs::read_to_string(path).map_err(|e| {
            io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
        }),
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        InputSource::Literal(text) => Ok(text.clone()),
    }
}

/// Load both sides. Stdin can only feed one of them.
pub fn read_pair(before: &InputSource, after: &InputSource) -> io::Result<(String, String)> {
    if *before == InputSource::Stdin && *after == InputSource::Stdin {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "stdin can only be used for one side",
        ));
    }
    Ok((read_input(before)?, read_input(after)?))
}
