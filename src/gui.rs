// VisitDesk - gui.rs
//
// Top-level eframe::App implementation.
// Wires the form, list, summary, and about panels around AppState.

use crate::app::state::AppState;
use crate::ui;

/// The VisitDesk application.
pub struct VisitDeskApp {
    pub state: AppState,
}

impl VisitDeskApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for VisitDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Record visit").clicked() {
                        self.state.record_draft();
                        ui.close_menu();
                    }
                    if ui.button("Reset form").clicked() {
                        self.state.reset_draft();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.visits.len();
                    if total > 0 {
                        ui.label(format!("{total} visit(s)"));
                    }
                });
            });
        });

        // Left side panel: form on top, summary below.
        egui::SidePanel::left("form_panel")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("form_scroll")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui::panels::visit_form::render(ui, &mut self.state);
                        ui.add_space(12.0);
                        ui::panels::summary::render(ui, &self.state);
                    });
            });

        // Central panel (visit list)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::visit_list::render(ui, &mut self.state);
        });

        ui::panels::about::render(ctx, &mut self.state);
    }
}
