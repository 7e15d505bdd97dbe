// VisitDesk - ui/panels/visit_list.rs
//
// Striped table of the visits recorded in this session.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the visit list (central panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("Visits");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(!state.visits.is_empty(), egui::Button::new("Clear all"))
                .clicked()
            {
                state.clear_visits();
            }
        });
    });
    ui.separator();

    if state.visits.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No visits recorded yet.");
        });
        return;
    }

    let mut remove: Option<u64> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("visit_list_grid")
                .num_columns(9)
                .striped(true)
                .min_row_height(theme::ROW_HEIGHT)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for header in [
                        "#", "Patient", "Date", "Start", "End", "AHI", "Nights", "Compliance",
                        "",
                    ] {
                        ui.label(egui::RichText::new(header).strong());
                    }
                    ui.end_row();

                    for visit in &state.visits {
                        ui.label(visit.id.to_string());
                        ui.label(&visit.patient);
                        ui.label(visit.date.to_string());
                        ui.label(visit.start.format("%H:%M").to_string());
                        match (visit.end, visit.duration_minutes()) {
                            (Some(end), Some(mins)) => {
                                ui.label(format!("{} ({mins} min)", end.format("%H:%M")));
                            }
                            _ => {
                                ui.label(egui::RichText::new("open").weak());
                            }
                        }
                        ui.label(format!("{:.1}", visit.metrics.ahi));
                        ui.label(visit.metrics.nights_label());
                        let compliant = visit.metrics.is_compliant();
                        ui.colored_label(
                            theme::compliance_colour(compliant),
                            theme::compliance_label(compliant),
                        );
                        if ui.small_button("Remove").clicked() {
                            remove = Some(visit.id);
                        }
                        ui.end_row();
                    }
                });
        });

    if let Some(id) = remove {
        state.remove_visit(id);
    }
}
