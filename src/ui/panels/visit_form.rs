// VisitDesk - ui/panels/visit_form.rs
//
// Visit entry form: patient, date, start/end time editors, CPAP metrics,
// notes. Recording validates through AppState::record_draft; errors are
// shown in the status bar and the form keeps its contents.

use crate::app::state::AppState;
use crate::core::time_input;
use crate::ui::theme;
use crate::ui::widgets::time_input::{FieldAttrs, TimeInput};
use crate::util::constants::{
    MAX_AHI, MAX_HOURS_PER_NIGHT, MAX_REPORT_NIGHTS, MAX_USAGE_PERCENT,
};

/// Render the visit form.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("New visit");
    ui.separator();

    egui::Grid::new("visit_form_grid")
        .num_columns(2)
        .min_col_width(theme::FORM_LABEL_WIDTH)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            let draft = &mut state.draft;

            ui.label("Patient:");
            ui.text_edit_singleline(&mut draft.patient);
            ui.end_row();

            ui.label("Date (YYYY-MM-DD):");
            ui.text_edit_singleline(&mut draft.date);
            ui.end_row();

            ui.label("Start time:");
            ui.add(TimeInput::new(&mut draft.start_time).id_salt("visit_start"));
            ui.end_row();

            ui.label("End time:");
            ui.horizontal(|ui| {
                ui.add(
                    TimeInput::new(&mut draft.end_time)
                        .id_salt("visit_end")
                        .attrs(FieldAttrs {
                            hover_text: Some("Leave empty while the visit is open".to_string()),
                            ..Default::default()
                        }),
                );
                if !draft.end_time.is_empty() && ui.small_button("Clear").clicked() {
                    draft.end_time.clear();
                }
            });
            ui.end_row();

            // Inline hint when the end time is already known to be too early.
            if let (Some(start), Some(end)) = (
                time_input::to_naive_time(&draft.start_time),
                time_input::to_naive_time(&draft.end_time),
            ) {
                if end < start {
                    ui.label("");
                    ui.colored_label(theme::WARNING_TEXT, "End time is before start time");
                    ui.end_row();
                }
            }
        });

    ui.add_space(8.0);
    ui.label(egui::RichText::new("CPAP compliance").strong());
    ui.separator();

    egui::Grid::new("visit_metrics_grid")
        .num_columns(2)
        .min_col_width(theme::FORM_LABEL_WIDTH)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            let metrics = &mut state.draft.metrics;

            ui.label("Nights >= 4 h:");
            ui.add(
                egui::DragValue::new(&mut metrics.usage_percent)
                    .range(0.0..=MAX_USAGE_PERCENT)
                    .speed(0.5)
                    .suffix(" %"),
            );
            ui.end_row();

            ui.label("Avg use per night:");
            ui.add(
                egui::DragValue::new(&mut metrics.avg_hours_per_night)
                    .range(0.0..=MAX_HOURS_PER_NIGHT)
                    .speed(0.1)
                    .suffix(" h"),
            );
            ui.end_row();

            ui.label("AHI:");
            ui.add(
                egui::DragValue::new(&mut metrics.ahi)
                    .range(0.0..=MAX_AHI)
                    .speed(0.1)
                    .suffix(" /h"),
            );
            ui.end_row();

            ui.label("Nights used / total:");
            ui.horizontal(|ui| {
                ui.add(egui::DragValue::new(&mut metrics.nights_used).range(0..=MAX_REPORT_NIGHTS));
                ui.label("/");
                ui.add(egui::DragValue::new(&mut metrics.nights_total).range(0..=MAX_REPORT_NIGHTS));
            });
            ui.end_row();

            let compliant = metrics.is_compliant();
            ui.label("Status:");
            ui.colored_label(
                theme::compliance_colour(compliant),
                theme::compliance_label(compliant),
            );
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.label("Notes:");
    ui.add(
        egui::TextEdit::multiline(&mut state.draft.notes)
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Record visit").clicked() {
            state.record_draft();
        }
        if ui.button("Reset form").clicked() {
            state.reset_draft();
        }
    });
}
