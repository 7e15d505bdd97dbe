// VisitDesk - core/visit.rs
//
// Validation of a visit draft into a recorded Visit.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{CpapMetrics, Visit, VisitDraft};
use crate::core::time_input;
use crate::util::constants::{
    MAX_AHI, MAX_HOURS_PER_NIGHT, MAX_NOTES_LEN, MAX_PATIENT_NAME_LEN, MAX_REPORT_NIGHTS,
    MAX_USAGE_PERCENT, VISIT_DATE_FORMAT,
};
use crate::util::error::VisitError;
use chrono::NaiveDate;

impl VisitDraft {
    /// A fresh draft for the given date with a pre-filled start time.
    ///
    /// `start_time` is used only if it is canonical; otherwise the start
    /// field is left unset.
    pub fn new(date: &str, start_time: &str) -> Self {
        Self {
            date: date.to_string(),
            start_time: if time_input::is_canonical(start_time) {
                start_time.to_string()
            } else {
                String::new()
            },
            ..Default::default()
        }
    }

    /// Validate the draft and turn it into a `Visit` with the given id.
    ///
    /// Checks run in form order and stop at the first failure.
    pub fn validate(&self, id: u64) -> Result<Visit, VisitError> {
        let patient = self.patient.trim();
        if patient.is_empty() {
            return Err(VisitError::MissingPatient);
        }
        check_length("patient", patient, MAX_PATIENT_NAME_LEN)?;

        let date_input = self.date.trim();
        let date = NaiveDate::parse_from_str(date_input, VISIT_DATE_FORMAT).map_err(|e| {
            VisitError::InvalidDate {
                input: date_input.to_string(),
                source: e,
            }
        })?;

        if self.start_time.is_empty() {
            return Err(VisitError::MissingStartTime);
        }
        let start =
            time_input::to_naive_time(&self.start_time).ok_or_else(|| VisitError::InvalidTime {
                field: "start_time",
                value: self.start_time.clone(),
            })?;

        let end = if self.end_time.is_empty() {
            None
        } else {
            let end = time_input::to_naive_time(&self.end_time).ok_or_else(|| {
                VisitError::InvalidTime {
                    field: "end_time",
                    value: self.end_time.clone(),
                }
            })?;
            if end < start {
                return Err(VisitError::EndBeforeStart {
                    start: self.start_time.clone(),
                    end: self.end_time.clone(),
                });
            }
            Some(end)
        };

        check_metrics(&self.metrics)?;
        check_length("notes", &self.notes, MAX_NOTES_LEN)?;

        Ok(Visit {
            id,
            patient: patient.to_string(),
            date,
            start,
            end,
            notes: self.notes.trim().to_string(),
            metrics: self.metrics,
        })
    }
}

fn check_length(field: &'static str, value: &str, max_length: usize) -> Result<(), VisitError> {
    let length = value.chars().count();
    if length > max_length {
        return Err(VisitError::TooLong {
            field,
            length,
            max_length,
        });
    }
    Ok(())
}

fn check_range(metric: &'static str, value: f32, max: f32) -> Result<(), VisitError> {
    if !(0.0..=max).contains(&value) {
        return Err(VisitError::MetricOutOfRange {
            metric,
            value: value.to_string(),
            expected: format!("0-{max}"),
        });
    }
    Ok(())
}

fn check_metrics(m: &CpapMetrics) -> Result<(), VisitError> {
    check_range("usage_percent", m.usage_percent, MAX_USAGE_PERCENT)?;
    check_range("avg_hours_per_night", m.avg_hours_per_night, MAX_HOURS_PER_NIGHT)?;
    check_range("ahi", m.ahi, MAX_AHI)?;
    if m.nights_total > MAX_REPORT_NIGHTS {
        return Err(VisitError::MetricOutOfRange {
            metric: "nights_total",
            value: m.nights_total.to_string(),
            expected: format!("0-{MAX_REPORT_NIGHTS}"),
        });
    }
    if m.nights_used > m.nights_total {
        return Err(VisitError::MetricOutOfRange {
            metric: "nights_used",
            value: m.nights_used.to_string(),
            expected: format!("0-{} (nights in window)", m.nights_total),
        });
    }
    Ok(())
}
