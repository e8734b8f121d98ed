// Settings: default output preferences, overridden by command-line flags.
// Uses platform-native config dir: e.g. ~/Library/Application Support/quickdiff/settings.json
// on macOS, ~/.config/quickdiff/settings.json on Linux.

use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use quickdiff_core::DiffMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Line-numbered table (inline spans in word mode).
    #[default]
    Unified,
    /// Old and new columns next to each other.
    SideBySide,
    /// Machine-readable result.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub mode: DiffMode,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub color: ColorChoice,
    #[serde(default = "default_side_by_side_width")]
    pub side_by_side_width: usize,
}

fn default_side_by_side_width() -> usize {
    120
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: DiffMode::default(),
            format: OutputFormat::default(),
            color: ColorChoice::default(),
            side_by_side_width: default_side_by_side_width(),
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("quickdiff").join("settings.json"))
}

/// Load settings from `path`, or from the default location when `None`.
/// A missing file means defaults; an unreadable or invalid one is logged.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let path = match path.map(Path::to_path_buf).or_else(settings_path) {
        Some(p) => p,
        None => return Settings::default(),
    };

    match std::fs::read_to_string(&path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(settings) => {
                log::debug!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Failed to parse {}: {}", path.display(), e);
                Settings::default()
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => Settings::default(),
        Err(e) => {
            log::warn!("Failed to read {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

/// Write `settings` as pretty JSON, creating the parent directory if needed.
pub fn save_settings(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json)?;
    log::info!("Saved settings to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "mode": "word" }"#).unwrap();
        assert_eq!(settings.mode, DiffMode::Word);
        assert_eq!(settings.format, OutputFormat::Unified);
        assert_eq!(settings.color, ColorChoice::Auto);
        assert_eq!(settings.side_by_side_width, 120);
    }

    #[test]
    fn format_uses_kebab_case() {
        let settings: Settings = serde_json::from_str(r#"{ "format": "side-by-side" }"#).unwrap();
        assert_eq!(settings.format, OutputFormat::SideBySide);
    }
}
