use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::event::{CalendarEvent, EventColor, EventId};
use crate::models::settings::Settings;
use crate::services::event::{EventPatch, EventStore};

/// State for the event editing dialog.
///
/// Constructed fresh each time the dialog opens (from an existing event or a
/// default start time), so no field carries over between sessions. Time
/// fields are free text and parsed here, at the form boundary; the store
/// never sees an unparseable value.
pub struct EventDialogState {
    pub event_id: Option<EventId>,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: NaiveDate,
    pub end_date: NaiveDate,
    /// "HH:MM". Retains its last value while the all-day toggle hides it.
    pub start_time_text: String,
    pub end_time_text: String,
    pub all_day: bool,
    pub color: EventColor,
    pub error_message: Option<String>,
}

impl EventDialogState {
    /// Open-create with the settings' default start time.
    pub fn new_event(date: NaiveDate, settings: &Settings) -> Self {
        Self::new_event_with_time(date, None, settings)
    }

    /// Open-create pre-filled from a clicked slot, with the default one-hour
    /// duration.
    pub fn new_event_with_time(
        date: NaiveDate,
        start_time_opt: Option<NaiveTime>,
        settings: &Settings,
    ) -> Self {
        let start_time = start_time_opt.unwrap_or_else(|| {
            let (hour, minute) = settings
                .default_event_start_time
                .split_once(':')
                .and_then(|(h, m)| {
                    let hour = h.parse::<u32>().ok()?;
                    let minute = m.parse::<u32>().ok()?;
                    Some((hour, minute))
                })
                .unwrap_or((9, 0));

            NaiveTime::from_hms_opt(hour, minute, 0)
                .unwrap_or(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
        });

        let start = NaiveDateTime::new(date, start_time);
        let end = start + Duration::minutes(settings.default_event_duration as i64);

        Self {
            event_id: None,
            title: String::new(),
            description: String::new(),
            location: String::new(),
            date,
            end_date: end.date(),
            start_time_text: start.time().format("%H:%M").to_string(),
            end_time_text: end.time().format("%H:%M").to_string(),
            all_day: false,
            color: EventColor::default(),
            error_message: None,
        }
    }

    /// Open-edit pre-filled from an existing event.
    pub fn from_event(event: &CalendarEvent) -> Self {
        Self {
            event_id: Some(event.id),
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            location: event.location.clone().unwrap_or_default(),
            date: event.start.date(),
            end_date: event.end.date(),
            start_time_text: event.start.time().format("%H:%M").to_string(),
            end_time_text: event.end.time().format("%H:%M").to_string(),
            all_day: event.all_day,
            color: event.color,
            error_message: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.event_id.is_some()
    }

    /// Save is gated on a non-empty trimmed title at the interaction layer.
    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty()
    }

    fn parse_time(label: &str, text: &str) -> Result<NaiveTime, String> {
        NaiveTime::parse_from_str(text.trim(), "%H:%M")
            .map_err(|_| format!("{label} must be HH:MM (got \"{}\")", text.trim()))
    }

    fn start_end_datetimes(&self) -> Result<(NaiveDateTime, NaiveDateTime), String> {
        let start_time = Self::parse_time("Start time", &self.start_time_text)?;
        let end_time = Self::parse_time("End time", &self.end_time_text)?;

        Ok((
            NaiveDateTime::new(self.date, start_time),
            NaiveDateTime::new(self.end_date, end_time),
        ))
    }

    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title is required".to_string());
        }

        let (start, end) = self.start_end_datetimes()?;
        if !self.all_day && end <= start {
            return Err("Event must end after it starts".to_string());
        }

        Ok(())
    }

    fn to_event(&self) -> Result<CalendarEvent, String> {
        self.validate()?;
        let (start, end) = self.start_end_datetimes()?;

        let mut event = CalendarEvent::builder()
            .title(self.title.trim())
            .start(start)
            .end(end)
            .color(self.color)
            .all_day(self.all_day);

        if !self.description.is_empty() {
            event = event.description(&self.description);
        }

        if !self.location.is_empty() {
            event = event.location(&self.location);
        }

        event.build()
    }

    /// Commit the form: update in place when editing (full overwrite of the
    /// editable fields, same id), otherwise add with a fresh id.
    pub fn save(&self, store: &mut EventStore) -> Result<CalendarEvent, String> {
        let built = self.to_event()?;

        if let Some(id) = self.event_id {
            let mut event = built;
            event.id = id;
            if !store.update(id, EventPatch::replacing(&event)) {
                return Err("Event no longer exists".to_string());
            }
            Ok(event)
        } else {
            store.add(built.clone());
            Ok(built)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use pretty_assertions::assert_eq;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    fn base_state() -> EventDialogState {
        let mut state = EventDialogState::new_event(sample_date(), &Settings::default());
        state.title = "Standup".to_string();
        state
    }

    #[test]
    fn new_event_uses_settings_defaults() {
        let settings = Settings {
            default_event_start_time: "07:30".to_string(),
            default_event_duration: 30,
            ..Settings::default()
        };

        let state = EventDialogState::new_event(sample_date(), &settings);
        assert_eq!(state.start_time_text, "07:30");
        assert_eq!(state.end_time_text, "08:00");
        assert!(state.title.is_empty());
        assert_eq!(state.color, EventColor::Blue);
        assert!(!state.all_day);
    }

    #[test]
    fn slot_click_gets_default_one_hour_duration() {
        let state = EventDialogState::new_event_with_time(
            sample_date(),
            NaiveTime::from_hms_opt(14, 30, 0),
            &Settings::default(),
        );
        assert_eq!(state.start_time_text, "14:30");
        assert_eq!(state.end_time_text, "15:30");
        assert_eq!(state.end_date, sample_date());
    }

    #[test]
    fn late_slot_rolls_end_to_next_day() {
        let state = EventDialogState::new_event_with_time(
            sample_date(),
            NaiveTime::from_hms_opt(23, 30, 0),
            &Settings::default(),
        );
        assert_eq!(state.end_time_text, "00:30");
        assert_eq!(state.end_date, sample_date().succ_opt().unwrap());
    }

    #[test]
    fn from_event_prefills_every_field() {
        let event = CalendarEvent::builder()
            .title("Advisor 1:1")
            .description("Resume review")
            .location("Office 204")
            .start(sample_date().and_hms_opt(15, 30, 0).unwrap())
            .end(sample_date().and_hms_opt(16, 0, 0).unwrap())
            .color(EventColor::Purple)
            .build()
            .unwrap();

        let state = EventDialogState::from_event(&event);
        assert_eq!(state.event_id, Some(event.id));
        assert_eq!(state.title, "Advisor 1:1");
        assert_eq!(state.description, "Resume review");
        assert_eq!(state.location, "Office 204");
        assert_eq!(state.start_time_text, "15:30");
        assert_eq!(state.end_time_text, "16:00");
        assert_eq!(state.color, EventColor::Purple);
    }

    #[test]
    fn save_is_gated_on_trimmed_title() {
        let mut state = base_state();
        assert!(state.can_save());
        state.title = "   ".to_string();
        assert!(!state.can_save());
    }

    #[test]
    fn malformed_time_is_rejected_at_the_form_boundary() {
        let mut store = EventStore::new();
        let mut state = base_state();
        state.start_time_text = "quarter past nine".to_string();

        let err = state.save(&mut store).unwrap_err();
        assert!(err.contains("HH:MM"), "unexpected error: {err}");
        assert!(store.is_empty());
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut store = EventStore::new();
        let mut state = base_state();
        state.start_time_text = "10:00".to_string();
        state.end_time_text = "09:00".to_string();

        let err = state.save(&mut store).unwrap_err();
        assert!(err.contains("end after"), "unexpected error: {err}");
        assert!(store.is_empty());
    }

    #[test]
    fn create_scenario_saves_default_duration_event() {
        let mut store = EventStore::new();
        let state = {
            let mut s = EventDialogState::new_event_with_time(
                sample_date(),
                NaiveTime::from_hms_opt(9, 0, 0),
                &Settings::default(),
            );
            s.title = "Standup".to_string();
            s
        };

        let saved = state.save(&mut store).unwrap();

        let found = store.events_for_day(sample_date());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, saved.id);
        assert_eq!(found[0].title, "Standup");
        assert_eq!(found[0].start.time().hour(), 9);
        assert_eq!(found[0].end.time().hour(), 10);
        assert_eq!(found[0].color, EventColor::Blue);
    }

    #[test]
    fn edit_scenario_keeps_id_and_replaces_fields() {
        let mut store = EventStore::new();
        let mut create = base_state();
        create.title = "Standup".to_string();
        let original = create.save(&mut store).unwrap();

        let mut edit = EventDialogState::from_event(&original);
        edit.title = "Standup (moved)".to_string();
        edit.start_time_text = "09:30".to_string();
        let saved = edit.save(&mut store).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(saved.id, original.id);
        let stored = &store.events()[0];
        assert_eq!(stored.title, "Standup (moved)");
        assert_eq!(stored.start, sample_date().and_hms_opt(9, 30, 0).unwrap());
    }

    #[test]
    fn editing_a_removed_event_reports_stale_id() {
        let mut store = EventStore::new();
        let original = base_state().save(&mut store).unwrap();

        let edit = EventDialogState::from_event(&original);
        store.remove(original.id);

        let err = edit.save(&mut store).unwrap_err();
        assert!(err.contains("no longer exists"));
        assert!(store.is_empty());
    }

    #[test]
    fn all_day_save_ignores_time_ordering() {
        let mut store = EventStore::new();
        let mut state = base_state();
        state.all_day = true;
        // Suppressed time inputs keep whatever they last held.
        state.start_time_text = "10:00".to_string();
        state.end_time_text = "10:00".to_string();

        let saved = state.save(&mut store).unwrap();
        assert!(saved.all_day);
        assert_eq!(store.all_day_events_for_day(sample_date()).len(), 1);
    }
}
