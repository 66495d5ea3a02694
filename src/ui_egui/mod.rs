mod app;
mod event_dialog;
pub mod views;

pub use app::navigation::WeekNavigator;
pub use app::CalendarApp;
pub use event_dialog::{render_event_dialog, EventDialogResult, EventDialogState};
