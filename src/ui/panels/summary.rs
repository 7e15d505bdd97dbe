// VisitDesk - ui/panels/summary.rs
//
// Session compliance summary, shown under the form in the side panel.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the summary block.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let summary = state.visit_summary();

    ui.label(egui::RichText::new("Session summary").strong());
    ui.separator();

    egui::Grid::new("summary_grid")
        .num_columns(2)
        .min_col_width(theme::FORM_LABEL_WIDTH)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Visits:");
            ui.label(summary.total.to_string());
            ui.end_row();

            ui.label("Compliant:");
            if summary.total > 0 {
                let pct = summary.compliant as f32 * 100.0 / summary.total as f32;
                ui.label(format!("{} ({pct:.0} %)", summary.compliant));
            } else {
                ui.label("-");
            }
            ui.end_row();

            ui.label("Mean AHI:");
            match summary.mean_ahi {
                Some(ahi) => ui.label(format!("{ahi:.1} /h")),
                None => ui.label("-"),
            };
            ui.end_row();
        });

    if !state.warnings.is_empty() {
        ui.add_space(8.0);
        ui.collapsing(format!("Config warnings ({})", state.warnings.len()), |ui| {
            for w in &state.warnings {
                ui.colored_label(theme::WARNING_TEXT, w);
            }
        });
    }
}
