// VisitDesk - ui/widgets/time_input.rs
//
// Two-field (hours : minutes) time-of-day editor widget.
//
// The widget keeps no state between frames. Each frame both text fields are
// re-populated from the owner's canonical value; an edit is pushed through
// core::time_input and written back only when it produces a value. A
// rejected keystroke therefore vanishes on the next frame.
//
// Re-populating a field can change its length (the value is zero-padded),
// so after every edit the field's cursor is moved to the end of the text
// the next frame will show.

use crate::core::time_input;
use crate::util::constants::TIME_FIELD_WIDTH;

/// Display attributes applied verbatim to both sub-fields.
///
/// For anything not covered here, see [`TimeInput::customize`].
#[derive(Debug, Clone)]
pub struct FieldAttrs {
    /// Width of each text field, in points.
    pub desired_width: f32,
    /// Placeholder shown while a field is empty.
    pub hint_text: Option<String>,
    /// Whether the fields accept input.
    pub enabled: bool,
    /// Extra hover text shown after the range hint.
    pub hover_text: Option<String>,
    /// Render digits in the monospace font.
    pub monospace: bool,
}

impl Default for FieldAttrs {
    fn default() -> Self {
        Self {
            desired_width: TIME_FIELD_WIDTH,
            hint_text: Some("--".to_string()),
            enabled: true,
            hover_text: None,
            monospace: true,
        }
    }
}

/// Caller-supplied adjustment applied to each sub-field's `TextEdit`.
type CustomizeField<'a> = Box<dyn for<'t> Fn(egui::TextEdit<'t>) -> egui::TextEdit<'t> + 'a>;

impl FieldAttrs {
    fn show(
        &self,
        ui: &mut egui::Ui,
        text: &mut String,
        id: egui::Id,
        range_hint: &str,
        customize: Option<&CustomizeField<'_>>,
    ) -> egui::Response {
        let mut edit = egui::TextEdit::singleline(text)
            .id(id)
            .desired_width(self.desired_width)
            .char_limit(FIELD_CHAR_LIMIT);
        if let Some(ref hint) = self.hint_text {
            edit = edit.hint_text(hint.as_str());
        }
        if self.monospace {
            edit = edit.font(egui::TextStyle::Monospace);
        }
        if let Some(customize) = customize {
            edit = customize(edit);
        }
        let mut response = ui.add_enabled(self.enabled, edit).on_hover_text(range_hint);
        if let Some(ref extra) = self.hover_text {
            response = response.on_hover_text(extra.as_str());
        }
        response
    }
}

/// Longest raw input a sub-field accepts, so a held key cannot grow the buffer.
const FIELD_CHAR_LIMIT: usize = 4;

/// A single sub-field edit, carrying the field's full raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Hours(String),
    Minutes(String),
}

/// Apply one field edit to the owner's canonical value.
///
/// Returns true when the edit emitted a value (written to `value`), false
/// when it was ignored.
pub fn apply_edit(value: &mut String, edit: &FieldEdit) -> bool {
    let next = match edit {
        FieldEdit::Hours(raw) => time_input::on_hours_change(value, raw),
        FieldEdit::Minutes(raw) => time_input::on_minutes_change(value, raw),
    };
    match next {
        Some(next) => {
            tracing::trace!(from = %value, to = %next, "Time value emitted");
            *value = next;
            true
        }
        None => false,
    }
}

/// Put the text cursor of field `id` after its last character.
fn place_cursor_at_end(ctx: &egui::Context, id: egui::Id, text: &str) {
    let mut state = egui::text_edit::TextEditState::load(ctx, id).unwrap_or_default();
    let end = egui::text::CCursor::new(text.chars().count());
    state
        .cursor
        .set_char_range(Some(egui::text::CCursorRange::one(end)));
    state.store(ctx, id);
}

/// Bounded `HH:MM` editor bound to an externally owned canonical string.
///
/// ```ignore
/// ui.add(TimeInput::new(&mut draft.start_time).id_salt("start"));
/// ```
pub struct TimeInput<'a> {
    value: &'a mut String,
    id_salt: egui::Id,
    attrs: FieldAttrs,
    customize: Option<CustomizeField<'a>>,
}

impl<'a> TimeInput<'a> {
    pub fn new(value: &'a mut String) -> Self {
        Self {
            value,
            id_salt: egui::Id::new("time_input"),
            attrs: FieldAttrs::default(),
            customize: None,
        }
    }

    /// Distinguish several editors on one form.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = egui::Id::new(salt);
        self
    }

    /// Replace the display attributes forwarded to both fields.
    pub fn attrs(mut self, attrs: FieldAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Adjust both fields' `TextEdit` builders, applied after `FieldAttrs`.
    ///
    /// The closure runs once per field per frame and is not interpreted.
    pub fn customize(
        mut self,
        f: impl for<'t> Fn(egui::TextEdit<'t>) -> egui::TextEdit<'t> + 'a,
    ) -> Self {
        self.customize = Some(Box::new(f));
        self
    }

    /// Id of the hours text field for a given salt.
    pub fn hours_id(salt: impl std::hash::Hash) -> egui::Id {
        egui::Id::new(salt).with("hours")
    }

    /// Id of the minutes text field for a given salt.
    pub fn minutes_id(salt: impl std::hash::Hash) -> egui::Id {
        egui::Id::new(salt).with("minutes")
    }
}

impl egui::Widget for TimeInput<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let TimeInput {
            value,
            id_salt,
            attrs,
            customize,
        } = self;
        let hours_id = id_salt.with("hours");
        let minutes_id = id_salt.with("minutes");

        let fields = time_input::decompose(value);
        let mut hours = fields.hours;
        let mut minutes = fields.minutes;

        let inner = ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            let hours_changed = attrs
                .show(ui, &mut hours, hours_id, "Hours (0-23)", customize.as_ref())
                .changed();
            ui.label(":");
            let minutes_changed = attrs
                .show(
                    ui,
                    &mut minutes,
                    minutes_id,
                    "Minutes (0-59)",
                    customize.as_ref(),
                )
                .changed();
            (hours_changed, minutes_changed)
        });

        let (hours_changed, minutes_changed) = inner.inner;
        let mut response = inner.response;

        // Only one field can receive keystrokes in a frame.
        let (edit, field_id) = if hours_changed {
            (FieldEdit::Hours(hours), hours_id)
        } else if minutes_changed {
            (FieldEdit::Minutes(minutes), minutes_id)
        } else {
            return response;
        };

        if apply_edit(value, &edit) {
            response.mark_changed();
        }

        // Whether emitted or ignored, the field is re-populated from `value`
        // next frame.
        let shown = time_input::decompose(value);
        let text = match edit {
            FieldEdit::Hours(_) => shown.hours,
            FieldEdit::Minutes(_) => shown.minutes,
        };
        place_cursor_at_end(ui.ctx(), field_id, &text);

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const SALT: &str = "test_time";

    /// Run one frame with the given input events; returns `changed()`.
    fn run_frame(ctx: &egui::Context, value: &mut String, events: Vec<egui::Event>) -> bool {
        let mut changed = false;
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                changed = ui.add(TimeInput::new(&mut *value).id_salt(SALT)).changed();
            });
        });
        changed
    }

    /// Render once, focus `field`, and settle a frame so it owns the keyboard.
    fn focus(ctx: &egui::Context, value: &mut String, field: egui::Id) {
        run_frame(ctx, value, Vec::new());
        ctx.memory_mut(|m| m.request_focus(field));
        run_frame(ctx, value, Vec::new());
    }

    /// Select the whole text of `field`, as a user would before deleting it.
    fn select_all(ctx: &egui::Context, field: egui::Id, len: usize) {
        let mut state = egui::text_edit::TextEditState::load(ctx, field).unwrap_or_default();
        state.cursor.set_char_range(Some(egui::text::CCursorRange::two(
            egui::text::CCursor::new(0),
            egui::text::CCursor::new(len),
        )));
        state.store(ctx, field);
    }

    fn type_text(ctx: &egui::Context, value: &mut String, text: &str) -> bool {
        run_frame(ctx, value, vec![egui::Event::Text(text.to_string())])
    }

    fn backspace(ctx: &egui::Context, value: &mut String) -> bool {
        run_frame(
            ctx,
            value,
            vec![egui::Event::Key {
                key: egui::Key::Backspace,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }],
        )
    }

    #[test]
    fn test_apply_edit_hours() {
        let mut v = "10:30".to_string();
        assert!(apply_edit(&mut v, &FieldEdit::Hours("25".to_string())));
        assert_eq!(v, "23:30");
    }

    #[test]
    fn test_apply_edit_clear_hours_clears_all() {
        let mut v = "10:30".to_string();
        assert!(apply_edit(&mut v, &FieldEdit::Hours(String::new())));
        assert_eq!(v, "");
    }

    #[test]
    fn test_apply_edit_ignored_leaves_value() {
        let mut v = "10:30".to_string();
        assert!(!apply_edit(&mut v, &FieldEdit::Minutes("ab".to_string())));
        assert_eq!(v, "10:30");
    }

    #[test]
    fn test_typing_two_digit_hours_into_empty_value() {
        let ctx = egui::Context::default();
        let mut value = String::new();
        focus(&ctx, &mut value, TimeInput::hours_id(SALT));

        assert!(type_text(&ctx, &mut value, "1"));
        assert_eq!(value, "01:00");
        assert!(type_text(&ctx, &mut value, "5"));
        assert_eq!(value, "15:00");
    }

    #[test]
    fn test_typing_two_digit_minutes_into_empty_value() {
        let ctx = egui::Context::default();
        let mut value = String::new();
        focus(&ctx, &mut value, TimeInput::minutes_id(SALT));

        assert!(type_text(&ctx, &mut value, "3"));
        assert_eq!(value, "00:03");
        assert!(type_text(&ctx, &mut value, "5"));
        assert_eq!(value, "00:35");
    }

    #[test]
    fn test_deleting_hours_clears_whole_value() {
        let ctx = egui::Context::default();
        let mut value = "14:30".to_string();
        let field = TimeInput::hours_id(SALT);
        focus(&ctx, &mut value, field);
        select_all(&ctx, field, 2);

        assert!(backspace(&ctx, &mut value));
        assert_eq!(value, "");
    }

    #[test]
    fn test_deleting_minutes_resets_them_to_zero() {
        let ctx = egui::Context::default();
        let mut value = "14:30".to_string();
        let field = TimeInput::minutes_id(SALT);
        focus(&ctx, &mut value, field);
        select_all(&ctx, field, 2);

        assert!(backspace(&ctx, &mut value));
        assert_eq!(value, "14:00");
    }

    #[test]
    fn test_non_numeric_keystroke_is_dropped() {
        let ctx = egui::Context::default();
        let mut value = String::new();
        focus(&ctx, &mut value, TimeInput::hours_id(SALT));

        assert!(!type_text(&ctx, &mut value, "x"));
        assert_eq!(value, "");
        // The field is re-populated empty and still accepts digits afterwards.
        assert!(type_text(&ctx, &mut value, "7"));
        assert_eq!(value, "07:00");
    }

    #[test]
    fn test_customize_reaches_both_fields() {
        let ctx = egui::Context::default();
        let mut value = "07:45".to_string();
        let calls = Cell::new(0);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add(
                    TimeInput::new(&mut value)
                        .id_salt(SALT)
                        .customize(|edit| {
                            calls.set(calls.get() + 1);
                            edit.text_color(egui::Color32::RED)
                        }),
                );
            });
        });
        assert_eq!(calls.get(), 2);
        assert_eq!(value, "07:45");
    }

    #[test]
    fn test_widget_renders_without_touching_value() {
        let ctx = egui::Context::default();
        let mut value = "07:45".to_string();
        let mut changed = false;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                changed = ui
                    .add(
                        TimeInput::new(&mut value)
                            .id_salt("test")
                            .attrs(FieldAttrs {
                                enabled: false,
                                ..Default::default()
                            }),
                    )
                    .changed();
            });
        });
        assert!(!changed);
        assert_eq!(value, "07:45");
    }
}
