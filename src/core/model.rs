// VisitDesk - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// Time-of-day fields on the draft are canonical "HH:MM" strings owned by
// the form; a recorded Visit carries parsed chrono values instead.

use crate::util::constants::{COMPLIANCE_MIN_HOURS_PER_NIGHT, COMPLIANCE_MIN_USAGE_PERCENT};
use chrono::{NaiveDate, NaiveTime};

// =============================================================================
// CPAP metrics
// =============================================================================

/// CPAP compliance metrics reported for a visit's review window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CpapMetrics {
    /// Share of nights with at least four hours of use, 0-100.
    pub usage_percent: f32,

    /// Average hours of device use per night.
    pub avg_hours_per_night: f32,

    /// Apnea-hypopnea index (residual events per hour).
    pub ahi: f32,

    /// Nights the device was used in the window.
    pub nights_used: u32,

    /// Nights in the review window.
    pub nights_total: u32,
}

impl CpapMetrics {
    /// Whether the patient meets the usual adherence threshold
    /// (>= 4 h/night on >= 70 % of nights).
    pub fn is_compliant(&self) -> bool {
        self.usage_percent >= COMPLIANCE_MIN_USAGE_PERCENT
            && self.avg_hours_per_night >= COMPLIANCE_MIN_HOURS_PER_NIGHT
    }

    /// Nights used over nights in the window, e.g. `"25/30"`.
    /// `"-"` when no window was reported.
    pub fn nights_label(&self) -> String {
        if self.nights_total == 0 {
            "-".to_string()
        } else {
            format!("{}/{}", self.nights_used, self.nights_total)
        }
    }
}

// =============================================================================
// Visit draft (form state)
// =============================================================================

/// Editable state behind the visit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisitDraft {
    /// Patient display name.
    pub patient: String,

    /// Visit date as typed, `YYYY-MM-DD`.
    pub date: String,

    /// Start time of day, canonical `HH:MM` or empty.
    pub start_time: String,

    /// End time of day, canonical `HH:MM` or empty (visit still open).
    pub end_time: String,

    /// Free-text clinical notes.
    pub notes: String,

    /// CPAP compliance metrics.
    pub metrics: CpapMetrics,
}

// =============================================================================
// Recorded visit
// =============================================================================

/// A validated visit, as listed in the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    /// Sequential id, unique within the session.
    pub id: u64,

    pub patient: String,

    pub date: NaiveDate,

    pub start: NaiveTime,

    /// `None` while the visit has no recorded end.
    pub end: Option<NaiveTime>,

    pub notes: String,

    pub metrics: CpapMetrics,
}

impl Visit {
    /// Visit length in whole minutes, when an end time is recorded.
    pub fn duration_minutes(&self) -> Option<i64> {
        self.end.map(|end| (end - self.start).num_minutes())
    }
}

/// Aggregate figures over the visits recorded in this session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisitSummary {
    pub total: usize,
    pub compliant: usize,
    /// Mean AHI across visits; `None` when no visits are recorded.
    pub mean_ahi: Option<f32>,
}

impl VisitSummary {
    /// Compute the summary for a set of visits.
    pub fn from_visits(visits: &[Visit]) -> Self {
        let total = visits.len();
        let compliant = visits.iter().filter(|v| v.metrics.is_compliant()).count();
        let mean_ahi = if total == 0 {
            None
        } else {
            Some(visits.iter().map(|v| v.metrics.ahi).sum::<f32>() / total as f32)
        };
        Self {
            total,
            compliant,
            mean_ahi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_visit(id: u64, end: Option<(u32, u32)>, metrics: CpapMetrics) -> Visit {
        Visit {
            id,
            patient: "Test Patient".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            start: NaiveTime::from_hms_opt(9, 15, 0).unwrap(),
            end: end.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()),
            notes: String::new(),
            metrics,
        }
    }

    #[test]
    fn test_compliance_threshold() {
        let mut m = CpapMetrics {
            usage_percent: 70.0,
            avg_hours_per_night: 4.0,
            ..Default::default()
        };
        assert!(m.is_compliant());
        m.usage_percent = 69.9;
        assert!(!m.is_compliant());
        m.usage_percent = 90.0;
        m.avg_hours_per_night = 3.5;
        assert!(!m.is_compliant());
    }

    #[test]
    fn test_nights_label() {
        let mut m = CpapMetrics::default();
        assert_eq!(m.nights_label(), "-");
        m.nights_used = 25;
        m.nights_total = 30;
        assert_eq!(m.nights_label(), "25/30");
        m.nights_used = 0;
        assert_eq!(m.nights_label(), "0/30");
    }

    #[test]
    fn test_duration() {
        let v = make_visit(1, Some((10, 0)), CpapMetrics::default());
        assert_eq!(v.duration_minutes(), Some(45));
        let open = make_visit(2, None, CpapMetrics::default());
        assert_eq!(open.duration_minutes(), None);
    }

    #[test]
    fn test_summary() {
        assert_eq!(VisitSummary::from_visits(&[]), VisitSummary::default());

        let good = CpapMetrics {
            usage_percent: 85.0,
            avg_hours_per_night: 6.0,
            ahi: 2.0,
            ..Default::default()
        };
        let poor = CpapMetrics {
            usage_percent: 40.0,
            avg_hours_per_night: 2.0,
            ahi: 6.0,
            ..Default::default()
        };
        let visits = vec![make_visit(1, None, good), make_visit(2, None, poor)];
        let s = VisitSummary::from_visits(&visits);
        assert_eq!(s.total, 2);
        assert_eq!(s.compliant, 1);
        assert_eq!(s.mean_ahi, Some(4.0));
    }
}
