// Career Calendar
// Main entry point

use std::path::PathBuf;

use chrono::{Duration, Local, NaiveDate};
use directories::ProjectDirs;

use career_calendar::models::event::{CalendarEvent, EventColor};
use career_calendar::services::event::EventStore;
use career_calendar::services::settings::SettingsService;
use career_calendar::services::storage::JsonFileStorage;
use career_calendar::ui_egui::CalendarApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    log::info!("Starting Career Calendar");

    let settings_service = SettingsService::default_path().map(SettingsService::new);
    let settings = settings_service
        .as_ref()
        .map(|service| service.load_or_default())
        .unwrap_or_default();

    let storage = Box::new(JsonFileStorage::new(events_path()));
    let mut store = EventStore::load_from(storage.as_ref()).unwrap_or_else(|e| {
        log::error!("Failed to load events, starting empty: {e:#}");
        EventStore::new()
    });

    // First run gets a seeded week so the grid isn't blank.
    if store.is_empty() {
        for event in demo_events(Local::now().date_naive()) {
            store.add(event);
        }
        if let Err(e) = store.persist_to(storage.as_ref()) {
            log::error!("Failed to persist seeded events: {e:#}");
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Career Calendar",
        options,
        Box::new(move |cc| {
            Ok(Box::new(CalendarApp::new(
                cc,
                store,
                storage,
                settings,
                settings_service,
            )))
        }),
    )
}

fn events_path() -> PathBuf {
    ProjectDirs::from("", "", "career-calendar")
        .map(|dirs| dirs.data_dir().join("events.json"))
        .unwrap_or_else(|| PathBuf::from("events.json"))
}

fn demo_events(today: NaiveDate) -> Vec<CalendarEvent> {
    let tomorrow = today + Duration::days(1);

    let build = |title: &str,
                 date: NaiveDate,
                 start: (u32, u32),
                 end: (u32, u32),
                 color: EventColor| {
        CalendarEvent::builder()
            .title(title)
            .start(date.and_hms_opt(start.0, start.1, 0).expect("valid time"))
            .end(date.and_hms_opt(end.0, end.1, 0).expect("valid time"))
            .color(color)
            .build()
            .expect("valid demo event")
    };

    vec![
        build("Standup", today, (9, 0), (9, 30), EventColor::Blue),
        build("Project Review", today, (10, 30), (11, 30), EventColor::Purple),
        build("Lunch with Mentor", today, (12, 0), (13, 0), EventColor::Green),
        build("Client Call", today, (14, 0), (15, 0), EventColor::Orange),
        build("1:1 with Manager", tomorrow, (15, 30), (16, 0), EventColor::Blue),
    ]
}
