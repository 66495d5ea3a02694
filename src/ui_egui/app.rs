pub mod navigation;

use chrono::{Local, NaiveDateTime};

use self::navigation::WeekNavigator;
use crate::models::event::CalendarEvent;
use crate::models::settings::{timezone_label, Settings, AVAILABLE_TIMEZONES};
use crate::services::event::EventStore;
use crate::services::settings::SettingsService;
use crate::services::storage::EventStorage;
use crate::ui_egui::event_dialog::{render_event_dialog, EventDialogState};
use crate::ui_egui::views::week_view::WeekView;
use crate::ui_egui::views::WeekViewAction;

pub struct CalendarApp {
    store: EventStore,
    storage: Box<dyn EventStorage>,
    settings: Settings,
    settings_service: Option<SettingsService>,
    navigator: WeekNavigator,
    show_event_dialog: bool,
    event_dialog_state: Option<EventDialogState>,
    scrolled_to_morning: bool,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);
        self.render_top_bar(ctx);
        self.render_week(ctx);
        self.render_dialog(ctx);
    }
}

impl CalendarApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        store: EventStore,
        storage: Box<dyn EventStorage>,
        settings: Settings,
        settings_service: Option<SettingsService>,
    ) -> Self {
        Self {
            store,
            storage,
            settings,
            settings_service,
            navigator: WeekNavigator::today(),
            show_event_dialog: false,
            event_dialog_state: None,
            scrolled_to_morning: false,
        }
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Escape) && self.show_event_dialog {
                self.close_dialog();
            }

            if i.modifiers.ctrl && i.key_pressed(egui::Key::N) && !self.show_event_dialog {
                self.open_create_dialog(None);
            }

            if i.modifiers.ctrl && i.key_pressed(egui::Key::T) {
                self.navigator.go_to_today();
            }

            // Arrow paging only while no dialog has the keyboard.
            if !self.show_event_dialog {
                if i.key_pressed(egui::Key::ArrowLeft) {
                    self.navigator.go_to_previous_week();
                }
                if i.key_pressed(egui::Key::ArrowRight) {
                    self.navigator.go_to_next_week();
                }
            }
        });
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("Today").clicked() {
                    self.navigator.go_to_today();
                }
                if ui.button("◀").clicked() {
                    self.navigator.go_to_previous_week();
                }
                if ui.button("▶").clicked() {
                    self.navigator.go_to_next_week();
                }

                ui.add_space(8.0);
                ui.heading(self.navigator.week_title(&self.settings));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_timezone_picker(ui);
                    if ui.button("New Event").clicked() {
                        self.open_create_dialog(None);
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    /// Display-only zone label; stored times are naive and never shifted.
    fn render_timezone_picker(&mut self, ui: &mut egui::Ui) {
        let mut selected = self.settings.timezone.clone();
        egui::ComboBox::from_id_source("timezone_picker")
            .selected_text(timezone_label(&selected))
            .show_ui(ui, |ui| {
                for tz in AVAILABLE_TIMEZONES {
                    ui.selectable_value(&mut selected, tz.to_string(), timezone_label(tz));
                }
            });

        if selected != self.settings.timezone {
            self.settings.timezone = selected;
            if let Some(service) = &self.settings_service {
                if let Err(e) = service.save(&self.settings) {
                    log::error!("Failed to save settings: {e:#}");
                }
            }
        }
    }

    fn render_week(&mut self, ctx: &egui::Context) {
        let week_days = self.navigator.week_days(&self.settings);

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                WeekView::show(
                    ui,
                    &week_days,
                    &self.store,
                    &self.settings,
                    &mut self.scrolled_to_morning,
                )
            })
            .inner;

        match action {
            Some(WeekViewAction::CreateAt(start)) => self.open_create_dialog(Some(start)),
            Some(WeekViewAction::Edit(event)) => self.open_edit_dialog(&event),
            None => {}
        }
    }

    fn render_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_event_dialog {
            return;
        }

        let Some(state) = &mut self.event_dialog_state else {
            self.show_event_dialog = false;
            return;
        };

        let mut open = true;
        let result = render_event_dialog(ctx, state, &mut self.store, &mut open);

        if result.changed() {
            self.persist();
        }
        if !open {
            self.close_dialog();
        }
    }

    fn open_create_dialog(&mut self, start: Option<NaiveDateTime>) {
        let state = match start {
            Some(start) => EventDialogState::new_event_with_time(
                start.date(),
                Some(start.time()),
                &self.settings,
            ),
            None => EventDialogState::new_event(Local::now().date_naive(), &self.settings),
        };
        self.event_dialog_state = Some(state);
        self.show_event_dialog = true;
    }

    fn open_edit_dialog(&mut self, event: &CalendarEvent) {
        self.event_dialog_state = Some(EventDialogState::from_event(event));
        self.show_event_dialog = true;
    }

    fn close_dialog(&mut self) {
        self.show_event_dialog = false;
        self.event_dialog_state = None;
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.persist_to(self.storage.as_ref()) {
            log::error!("Failed to persist events: {e:#}");
        }
    }
}
