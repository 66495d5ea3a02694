use chrono::NaiveDateTime;

use crate::models::event::CalendarEvent;

pub mod layout;
pub(crate) mod palette;
pub mod week_view;

/// What a pointer interaction on the grid resolved to.
///
/// Clicking empty grid opens the editor pre-filled with the clicked slot
/// time; clicking an event block opens the editor on that event.
#[derive(Clone, Debug)]
pub enum WeekViewAction {
    CreateAt(NaiveDateTime),
    Edit(CalendarEvent),
}
