// VisitDesk - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "VisitDesk";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "VisitDesk";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package authors, shown in the About dialog.
pub const APP_AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

// =============================================================================
// Visit form limits
// =============================================================================

/// Maximum length of a patient name, in characters.
pub const MAX_PATIENT_NAME_LEN: usize = 120;

/// Maximum length of the free-text visit notes, in characters.
pub const MAX_NOTES_LEN: usize = 2_000;

/// Date format accepted by the visit date field.
pub const VISIT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Start time pre-filled into a fresh visit form when config sets none.
pub const DEFAULT_START_TIME: &str = "09:00";

// =============================================================================
// CPAP compliance
// =============================================================================

/// Minimum share of nights with qualifying use for a compliant patient.
pub const COMPLIANCE_MIN_USAGE_PERCENT: f32 = 70.0;

/// Minimum average nightly use, in hours, for a compliant patient.
pub const COMPLIANCE_MIN_HOURS_PER_NIGHT: f32 = 4.0;

/// Upper bound on the usage percentage field.
pub const MAX_USAGE_PERCENT: f32 = 100.0;

/// Upper bound on average hours of use per night.
pub const MAX_HOURS_PER_NIGHT: f32 = 24.0;

/// Upper bound on the apnea-hypopnea index (events per hour).
pub const MAX_AHI: f32 = 150.0;

/// Upper bound on the length of a compliance reporting window, in nights.
pub const MAX_REPORT_NIGHTS: u32 = 366;

// =============================================================================
// UI
// =============================================================================

/// Default body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum font size accepted from config.
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum font size accepted from config.
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Width of each time sub-field, in points.
pub const TIME_FIELD_WIDTH: f32 = 28.0;

// =============================================================================
// Logging
// =============================================================================

/// Log level used when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Files
// =============================================================================

/// Config file name, resolved next to the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_metadata_is_filled_in() {
        assert!(!APP_VERSION.is_empty());
        assert!(!APP_AUTHORS.is_empty());
    }
}
