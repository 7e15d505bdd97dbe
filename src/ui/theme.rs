// VisitDesk - ui/theme.rs
//
// Colour scheme, compliance colour mapping, and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Colour for a compliance flag.
pub fn compliance_colour(compliant: bool) -> Color32 {
    if compliant {
        Color32::from_rgb(22, 163, 74) // Green 600
    } else {
        Color32::from_rgb(217, 119, 6) // Amber 600
    }
}

/// Short label for a compliance flag.
pub fn compliance_label(compliant: bool) -> &'static str {
    if compliant {
        "Compliant"
    } else {
        "Non-compliant"
    }
}

/// Colour for validation / warning text.
pub const WARNING_TEXT: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 360.0;
pub const FORM_LABEL_WIDTH: f32 = 140.0;
pub const ROW_HEIGHT: f32 = 20.0;

/// Apply the configured theme and body font size to the egui context.
pub fn apply_appearance(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                egui::TextStyle::Heading => font_size * 1.4,
                egui::TextStyle::Small => font_size * 0.75,
                _ => font_size,
            };
        }
    });
}
