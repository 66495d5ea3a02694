use egui::{Button, Color32, RichText, Stroke, Vec2};
use egui_extras::DatePickerButton;

use crate::models::event::{CalendarEvent, EventColor, EventId};
use crate::services::event::EventStore;
use crate::ui_egui::views::palette::event_fill;

use super::state::EventDialogState;

/// What the dialog committed this frame, if anything.
#[derive(Default)]
pub struct EventDialogResult {
    pub saved: Option<CalendarEvent>,
    pub deleted: Option<EventId>,
}

impl EventDialogResult {
    pub fn changed(&self) -> bool {
        self.saved.is_some() || self.deleted.is_some()
    }
}

/// Modal-style event editor.
///
/// Sets `open` to false once the user saves, deletes, cancels, or closes the
/// window. Validation failures stay in the dialog as an error banner instead
/// of closing it.
pub fn render_event_dialog(
    ctx: &egui::Context,
    state: &mut EventDialogState,
    store: &mut EventStore,
    open: &mut bool,
) -> EventDialogResult {
    let mut result = EventDialogResult::default();
    let mut window_open = true;
    let mut close_requested = false;

    let title = if state.is_editing() {
        "Edit Event"
    } else {
        "New Event"
    };

    egui::Window::new(title)
        .open(&mut window_open)
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            if let Some(message) = &state.error_message {
                ui.colored_label(Color32::from_rgb(220, 80, 80), message);
                ui.add_space(4.0);
            }

            egui::Grid::new("event_dialog_fields")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Title");
                    ui.text_edit_singleline(&mut state.title);
                    ui.end_row();

                    ui.label("Location");
                    ui.text_edit_singleline(&mut state.location);
                    ui.end_row();

                    ui.label("Description");
                    ui.text_edit_multiline(&mut state.description);
                    ui.end_row();

                    ui.label("All day");
                    ui.checkbox(&mut state.all_day, "");
                    ui.end_row();

                    ui.label("Start");
                    ui.horizontal(|ui| {
                        ui.add(
                            DatePickerButton::new(&mut state.date).id_source("event_start_date"),
                        );
                        if !state.all_day {
                            ui.add(
                                egui::TextEdit::singleline(&mut state.start_time_text)
                                    .desired_width(56.0)
                                    .hint_text("HH:MM"),
                            );
                        }
                    });
                    ui.end_row();

                    ui.label("End");
                    ui.horizontal(|ui| {
                        ui.add(
                            DatePickerButton::new(&mut state.end_date).id_source("event_end_date"),
                        );
                        if !state.all_day {
                            ui.add(
                                egui::TextEdit::singleline(&mut state.end_time_text)
                                    .desired_width(56.0)
                                    .hint_text("HH:MM"),
                            );
                        }
                    });
                    ui.end_row();

                    ui.label("Color");
                    ui.horizontal(|ui| {
                        for color in EventColor::ALL {
                            if color_swatch(ui, color, state.color == color).clicked() {
                                state.color = color;
                            }
                        }
                    });
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.separator();

            ui.horizontal(|ui| {
                let save_clicked = ui
                    .add_enabled(state.can_save(), Button::new("Save Event"))
                    .clicked();

                if save_clicked {
                    match state.save(store) {
                        Ok(event) => {
                            result.saved = Some(event);
                            close_requested = true;
                        }
                        Err(message) => state.error_message = Some(message),
                    }
                }

                if ui.button("Cancel").clicked() {
                    close_requested = true;
                }

                if let Some(id) = state.event_id {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let delete = Button::new(RichText::new("Delete").color(Color32::WHITE))
                            .fill(Color32::from_rgb(200, 60, 60));
                        if ui.add(delete).clicked() && store.remove(id) {
                            result.deleted = Some(id);
                            close_requested = true;
                        }
                    });
                }
            });
        });

    if close_requested || !window_open {
        *open = false;
    }

    result
}

fn color_swatch(ui: &mut egui::Ui, color: EventColor, selected: bool) -> egui::Response {
    let stroke = if selected {
        Stroke::new(2.0, ui.style().visuals.strong_text_color())
    } else {
        Stroke::NONE
    };

    ui.add(
        Button::new("")
            .fill(event_fill(color))
            .stroke(stroke)
            .min_size(Vec2::splat(22.0)),
    )
    .on_hover_text(color.label())
}
