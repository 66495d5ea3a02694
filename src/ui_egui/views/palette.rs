use egui::Color32;

use crate::models::event::EventColor;

/// Concrete fill for each event color variant.
pub(crate) fn event_fill(color: EventColor) -> Color32 {
    match color {
        EventColor::Blue => Color32::from_rgb(59, 130, 246),
        EventColor::Red => Color32::from_rgb(239, 68, 68),
        EventColor::Green => Color32::from_rgb(34, 197, 94),
        EventColor::Yellow => Color32::from_rgb(234, 179, 8),
        EventColor::Purple => Color32::from_rgb(168, 85, 247),
        EventColor::Orange => Color32::from_rgb(249, 115, 22),
    }
}

#[derive(Clone, Copy)]
pub(crate) struct TimeGridPalette {
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub hour_line: Color32,
    pub half_hour_line: Color32,
    pub divider: Color32,
    pub hover_overlay: Color32,
    pub time_label: Color32,
    pub header_text: Color32,
    pub header_date: Color32,
    pub today_badge: Color32,
    pub now_line: Color32,
}

impl TimeGridPalette {
    pub fn from_ui(ui: &egui::Ui) -> Self {
        if ui.style().visuals.dark_mode {
            Self {
                regular_bg: Color32::from_gray(40),
                weekend_bg: Color32::from_gray(35),
                today_bg: Color32::from_rgb(50, 70, 100),
                hour_line: Color32::from_gray(60),
                half_hour_line: Color32::from_gray(50),
                divider: Color32::from_gray(50),
                hover_overlay: Color32::from_rgba_unmultiplied(100, 150, 255, 30),
                time_label: Color32::GRAY,
                header_text: Color32::from_gray(200),
                header_date: Color32::from_gray(230),
                today_badge: Color32::from_rgb(59, 130, 246),
                now_line: Color32::from_rgb(255, 100, 100),
            }
        } else {
            Self {
                regular_bg: Color32::from_rgb(245, 245, 245),
                weekend_bg: Color32::from_rgb(235, 238, 244),
                today_bg: Color32::from_rgb(222, 236, 255),
                hour_line: Color32::from_rgb(210, 210, 210),
                half_hour_line: Color32::from_rgb(230, 230, 230),
                divider: Color32::from_rgb(210, 210, 210),
                hover_overlay: Color32::from_rgba_unmultiplied(80, 120, 200, 25),
                time_label: Color32::GRAY,
                header_text: Color32::from_gray(90),
                header_date: Color32::from_gray(30),
                today_badge: Color32::from_rgb(37, 99, 235),
                now_line: Color32::from_rgb(239, 68, 68),
            }
        }
    }
}
