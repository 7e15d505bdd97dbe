// VisitDesk - ui/panels/about.rs
//
// About dialog, rendered as a centred, non-resizable, non-collapsible window.

use crate::app::state::AppState;
use crate::util::constants::{APP_AUTHORS, APP_NAME, APP_VERSION};

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new(format!("About {APP_NAME}"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(APP_NAME).size(26.0).strong());
                ui.add_space(4.0);
                ui.label(egui::RichText::new(format!("v{APP_VERSION}")).size(14.0).weak());
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(6.0);

            ui.vertical_centered(|ui| {
                ui.label("Clinical visit recording with CPAP compliance tracking.");
                ui.label("Visits are kept in memory for this session only.");
            });

            ui.add_space(8.0);
            ui.separator();
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(APP_AUTHORS).small());
                ui.label(egui::RichText::new("Built with Rust & egui").small().weak());
                if state.debug_mode {
                    ui.label(egui::RichText::new("Debug logging enabled").small().weak());
                }
            });
            ui.add_space(6.0);
        });

    if !open {
        state.show_about = false;
    }
}
