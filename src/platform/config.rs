// VisitDesk - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::time_input;
use crate::util::constants;
use crate::util::error::ConfigError;
use chrono::NaiveDate;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for VisitDesk configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/visitdesk/ or %APPDATA%\VisitDesk\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[visits]` section.
    pub visits: VisitsSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[visits]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct VisitsSection {
    /// Start time pre-filled into new visit forms, `HH:MM`.
    pub default_start_time: Option<String>,
    /// "today", "" (blank), or a fixed `YYYY-MM-DD` date.
    pub default_visit_date: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// How the visit date field of a new form is pre-filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultVisitDate {
    #[default]
    Today,
    Blank,
    Fixed(NaiveDate),
}

impl DefaultVisitDate {
    /// Render the pre-filled text for the date field.
    pub fn resolve(&self) -> String {
        match self {
            Self::Today => chrono::Local::now()
                .date_naive()
                .format(constants::VISIT_DATE_FORMAT)
                .to_string(),
            Self::Blank => String::new(),
            Self::Fixed(date) => date.format(constants::VISIT_DATE_FORMAT).to_string(),
        }
    }
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,

    // -- Visits --
    /// Canonical start time pre-filled into new forms.
    pub default_start_time: String,
    /// Visit date pre-fill policy.
    pub default_visit_date: DefaultVisitDate,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            default_start_time: constants::DEFAULT_START_TIME.to_string(),
            default_visit_date: DefaultVisitDate::Today,
            log_level: None,
        }
    }
}

/// Path of config.toml inside `config_dir`.
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(constants::CONFIG_FILE_NAME)
}

/// Read and parse config.toml. `Ok(None)` when the file does not exist.
pub fn read_raw_config(path: &Path) -> Result<Option<RawConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let raw = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(Some(raw))
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file cannot be read or parsed, returns defaults with one warning;
/// the application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let path = config_path(config_dir);
    let mut warnings: Vec<String> = Vec::new();

    let raw = match read_raw_config(&path) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
            return (AppConfig::default(), warnings);
        }
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %path.display(), "Loaded config.toml");

    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

/// Validate each raw field, accumulating a warning per rejected value.
pub fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();
    let mut reject = |field: &str, value: String, expected: String| {
        let e = ConfigError::ValueOutOfRange {
            field: field.to_string(),
            value,
            expected,
        };
        warnings.push(format!("{e}. Using default."));
    };

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => reject(
                "[ui] theme",
                other.to_string(),
                "\"dark\" or \"light\"".to_string(),
            ),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            reject(
                "[ui] font_size",
                size.to_string(),
                format!("{}-{}", constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE),
            );
        }
    }

    // -- Visits: default_start_time --
    // Empty is allowed and means "leave the start time unset".
    if let Some(ref start) = raw.visits.default_start_time {
        if time_input::is_canonical(start) {
            config.default_start_time = start.clone();
        } else {
            reject(
                "[visits] default_start_time",
                start.clone(),
                "HH:MM between 00:00 and 23:59, or empty".to_string(),
            );
        }
    }

    // -- Visits: default_visit_date --
    if let Some(ref date) = raw.visits.default_visit_date {
        let trimmed = date.trim();
        if trimmed.eq_ignore_ascii_case("today") {
            config.default_visit_date = DefaultVisitDate::Today;
        } else if trimmed.is_empty() {
            config.default_visit_date = DefaultVisitDate::Blank;
        } else {
            match NaiveDate::parse_from_str(trimmed, constants::VISIT_DATE_FORMAT) {
                Ok(d) => config.default_visit_date = DefaultVisitDate::Fixed(d),
                Err(_) => reject(
                    "[visits] default_visit_date",
                    date.clone(),
                    "\"today\", empty, or YYYY-MM-DD".to_string(),
                ),
            }
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            reject(
                "[logging] level",
                level.clone(),
                "error, warn, info, debug, trace".to_string(),
            );
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) {
        std::fs::write(config_path(dir.path()), body).unwrap();
    }

    #[test]
    fn test_missing_file_gives_defaults_without_warnings() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert!(config.dark_mode);
        assert_eq!(config.default_start_time, constants::DEFAULT_START_TIME);
    }

    #[test]
    fn test_valid_config_applied() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
[ui]
theme = "light"
font_size = 16.0

[visits]
default_start_time = "08:30"
default_visit_date = "2025-02-01"

[logging]
level = "debug"

[unknown]
ignored = true
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert!(!config.dark_mode);
        assert_eq!(config.font_size, 16.0);
        assert_eq!(config.default_start_time, "08:30");
        assert_eq!(
            config.default_visit_date,
            DefaultVisitDate::Fixed(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap())
        );
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_values_fall_back_with_warnings() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
[ui]
theme = "sepia"
font_size = 99.0

[visits]
default_start_time = "7:5"
default_visit_date = "yesterday"

[logging]
level = "loud"
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 5, "warnings: {warnings:?}");
        assert!(config.dark_mode);
        assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
        assert_eq!(config.default_start_time, constants::DEFAULT_START_TIME);
        assert_eq!(config.default_visit_date, DefaultVisitDate::Today);
        assert!(config.log_level.is_none());
        assert!(warnings.iter().any(|w| w.contains("default_start_time")));
    }

    #[test]
    fn test_empty_start_time_and_blank_date_allowed() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            "[visits]\ndefault_start_time = \"\"\ndefault_visit_date = \"\"\n",
        );
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.default_start_time, "");
        assert_eq!(config.default_visit_date, DefaultVisitDate::Blank);
        assert_eq!(config.default_visit_date.resolve(), "");
    }

    #[test]
    fn test_malformed_toml_gives_single_warning() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[ui\ntheme = ");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
        assert!(config.dark_mode);
    }
}
