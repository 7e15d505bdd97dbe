// VisitDesk - app/state.rs
//
// Application state management. Holds the visit form draft, the visits
// recorded in this session, and dialog/status state.
// Owned by the eframe::App implementation.

use crate::core::model::{Visit, VisitDraft, VisitSummary};
use crate::platform::config::AppConfig;
use crate::util::error::Result;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Validated configuration the app was started with.
    pub config: AppConfig,

    /// Current contents of the visit form.
    pub draft: VisitDraft,

    /// Visits recorded in this session, oldest first.
    pub visits: Vec<Visit>,

    /// Id assigned to the next recorded visit.
    pub next_id: u64,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings accumulated at startup (config validation).
    pub warnings: Vec<String>,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state from validated config.
    pub fn new(config: AppConfig, warnings: Vec<String>, debug_mode: bool) -> Self {
        let draft = VisitDraft::new(
            &config.default_visit_date.resolve(),
            &config.default_start_time,
        );
        let status_message = if warnings.is_empty() {
            "Ready. Fill in the form to record a visit.".to_string()
        } else {
            format!("Started with {} config warning(s).", warnings.len())
        };
        Self {
            config,
            draft,
            visits: Vec::new(),
            next_id: 1,
            status_message,
            warnings,
            show_about: false,
            debug_mode,
        }
    }

    /// Validate the current draft and record it.
    ///
    /// On success the form is reset (keeping the visit date) and the new
    /// visit id is returned. On failure the draft is left untouched so the
    /// user can correct it.
    pub fn submit_draft(&mut self) -> Result<u64> {
        match self.draft.validate(self.next_id) {
            Ok(visit) => {
                let id = visit.id;
                tracing::info!(
                    visit_id = id,
                    compliant = visit.metrics.is_compliant(),
                    "Visit recorded"
                );
                self.visits.push(visit);
                self.next_id += 1;
                self.reset_draft();
                self.status_message = format!("Recorded visit #{id}.");
                Ok(id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Visit draft rejected");
                self.status_message = format!("Cannot record visit: {e}");
                Err(e.into())
            }
        }
    }

    /// Record the draft from a UI action.
    ///
    /// The outcome is reported through `status_message` either way, so a
    /// rejection is only traced here.
    pub fn record_draft(&mut self) {
        if let Err(e) = self.submit_draft() {
            tracing::debug!(error = %e, "Record action left the draft in place");
        }
    }

    /// Clear the form, keeping the date and re-applying the default start.
    pub fn reset_draft(&mut self) {
        let date = std::mem::take(&mut self.draft.date);
        self.draft = VisitDraft::new(&date, &self.config.default_start_time);
    }

    /// Remove a recorded visit. Returns false if no visit has that id.
    pub fn remove_visit(&mut self, id: u64) -> bool {
        let before = self.visits.len();
        self.visits.retain(|v| v.id != id);
        let removed = self.visits.len() != before;
        if removed {
            tracing::debug!(visit_id = id, "Visit removed");
            self.status_message = format!("Removed visit #{id}.");
        }
        removed
    }

    /// Remove all recorded visits. Ids keep increasing.
    pub fn clear_visits(&mut self) {
        let count = self.visits.len();
        self.visits.clear();
        tracing::debug!(count, "Visits cleared");
        self.status_message = "Ready.".to_string();
    }

    /// Aggregate figures over the recorded visits.
    pub fn visit_summary(&self) -> VisitSummary {
        VisitSummary::from_visits(&self.visits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::config::DefaultVisitDate;
    use crate::util::error::{VisitDeskError, VisitError};
    use chrono::NaiveDate;

    fn make_state() -> AppState {
        let config = AppConfig {
            default_visit_date: DefaultVisitDate::Fixed(
                NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            ),
            default_start_time: "08:00".to_string(),
            ..Default::default()
        };
        AppState::new(config, Vec::new(), false)
    }

    fn fill(state: &mut AppState, patient: &str) {
        state.draft.patient = patient.to_string();
        state.draft.end_time = "08:20".to_string();
        state.draft.metrics.usage_percent = 75.0;
        state.draft.metrics.avg_hours_per_night = 5.0;
    }

    #[test]
    fn test_new_state_prefills_form() {
        let state = make_state();
        assert_eq!(state.draft.date, "2025-05-02");
        assert_eq!(state.draft.start_time, "08:00");
        assert!(state.visits.is_empty());
    }

    #[test]
    fn test_submit_records_and_resets() {
        let mut state = make_state();
        fill(&mut state, "Ion");
        state.draft.start_time = "08:05".to_string();
        let id = state.submit_draft().unwrap();
        assert_eq!(id, 1);
        assert_eq!(state.visits.len(), 1);
        assert_eq!(state.next_id, 2);
        assert!(state.draft.patient.is_empty());
        assert_eq!(state.draft.start_time, "08:00");
        assert_eq!(state.draft.date, "2025-05-02");
    }

    #[test]
    fn test_rejected_submit_keeps_draft() {
        let mut state = make_state();
        fill(&mut state, "");
        let err = state.submit_draft().unwrap_err();
        assert!(matches!(
            err,
            VisitDeskError::Visit(VisitError::MissingPatient)
        ));
        assert!(state.visits.is_empty());
        assert_eq!(state.draft.end_time, "08:20");
        assert!(state.status_message.contains("Patient name is required"));
    }

    #[test]
    fn test_record_draft_reports_through_status() {
        let mut state = make_state();
        fill(&mut state, "Elena");
        state.draft.end_time = "07:00".to_string();
        state.record_draft();
        assert!(state.visits.is_empty());
        assert!(state.status_message.starts_with("Cannot record visit:"));

        state.draft.end_time = "08:30".to_string();
        state.record_draft();
        assert_eq!(state.visits.len(), 1);
        assert_eq!(state.status_message, "Recorded visit #1.");
    }

    #[test]
    fn test_remove_and_clear() {
        let mut state = make_state();
        fill(&mut state, "A");
        state.submit_draft().unwrap();
        fill(&mut state, "B");
        state.submit_draft().unwrap();

        assert!(state.remove_visit(1));
        assert!(!state.remove_visit(1));
        assert_eq!(state.visits.len(), 1);
        assert_eq!(state.visits[0].id, 2);

        state.clear_visits();
        assert!(state.visits.is_empty());
        fill(&mut state, "C");
        assert_eq!(state.submit_draft().unwrap(), 3);
    }

    #[test]
    fn test_summary_counts_compliance() {
        let mut state = make_state();
        fill(&mut state, "A");
        state.submit_draft().unwrap();
        fill(&mut state, "B");
        state.draft.metrics.usage_percent = 10.0;
        state.submit_draft().unwrap();
        let summary = state.visit_summary();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.compliant, 1);
    }
}
