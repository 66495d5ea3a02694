use chrono::{Datelike, Local, NaiveDate};
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::layout::GridMetrics;
use super::palette::{event_fill, TimeGridPalette};
use super::WeekViewAction;
use crate::models::event::CalendarEvent;
use crate::models::settings::Settings;
use crate::services::event::EventStore;

const TIME_LABEL_WIDTH: f32 = 50.0;
const COLUMN_SPACING: f32 = 2.0;
const HEADER_HEIGHT: f32 = 48.0;
const ALL_DAY_LANE_HEIGHT: f32 = 28.0;

pub struct WeekView;

impl WeekView {
    /// Render the day-header strip, the all-day lane and the scrollable time
    /// grid. Returns the action a click resolved to, if any.
    pub fn show(
        ui: &mut egui::Ui,
        week_days: &[NaiveDate],
        store: &EventStore,
        settings: &Settings,
        scrolled_to_morning: &mut bool,
    ) -> Option<WeekViewAction> {
        let palette = TimeGridPalette::from_ui(ui);
        let metrics = GridMetrics::from_settings(settings);
        let today = Local::now().date_naive();

        let day_count = week_days.len().max(1);
        let total_spacing = COLUMN_SPACING * (day_count as f32 - 1.0);
        let col_width =
            (ui.available_width() - TIME_LABEL_WIDTH - total_spacing) / day_count as f32;

        Self::render_header(ui, week_days, col_width, today, &palette);

        let mut action = Self::render_all_day_lane(ui, week_days, col_width, store, &palette);

        ui.add_space(4.0);

        // Scroll the grid to 08:00 once on first show, like a fresh page load.
        let mut scroll_area = egui::ScrollArea::vertical().auto_shrink([false, false]);
        if !*scrolled_to_morning {
            let morning_offset =
                (8.0 - metrics.start_hour() as f32).max(0.0) * metrics.hour_height();
            scroll_area = scroll_area.vertical_scroll_offset(morning_offset);
            *scrolled_to_morning = true;
        }

        scroll_area.show(ui, |scroll_ui| {
            if let Some(grid_action) = Self::render_time_grid(
                scroll_ui,
                week_days,
                col_width,
                store,
                &metrics,
                &palette,
                today,
            ) {
                action = Some(grid_action);
            }
        });

        // The now line moves once a minute; schedule the next recompute.
        // The request dies with the egui context, so nothing leaks.
        ui.ctx()
            .request_repaint_after(std::time::Duration::from_secs(60));

        action
    }

    fn render_header(
        ui: &mut egui::Ui,
        week_days: &[NaiveDate],
        col_width: f32,
        today: NaiveDate,
        palette: &TimeGridPalette,
    ) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            ui.allocate_ui_with_layout(
                Vec2::new(TIME_LABEL_WIDTH, HEADER_HEIGHT),
                egui::Layout::right_to_left(egui::Align::Center),
                |_ui| {},
            );
            ui.add_space(COLUMN_SPACING);

            for (i, date) in week_days.iter().enumerate() {
                let is_today = *date == today;

                ui.allocate_ui_with_layout(
                    Vec2::new(col_width, HEADER_HEIGHT),
                    egui::Layout::top_down(egui::Align::Center),
                    |cell_ui| {
                        cell_ui.label(
                            egui::RichText::new(date.format("%a").to_string().to_uppercase())
                                .size(11.0)
                                .color(palette.header_text)
                                .strong(),
                        );

                        let day_number = date.day().to_string();
                        if is_today {
                            let (rect, _) = cell_ui
                                .allocate_exact_size(Vec2::new(26.0, 26.0), Sense::hover());
                            cell_ui
                                .painter()
                                .circle_filled(rect.center(), 13.0, palette.today_badge);
                            cell_ui.painter().text(
                                rect.center(),
                                Align2::CENTER_CENTER,
                                day_number,
                                FontId::proportional(14.0),
                                Color32::WHITE,
                            );
                        } else {
                            cell_ui.label(
                                egui::RichText::new(day_number)
                                    .size(16.0)
                                    .color(palette.header_date),
                            );
                        }
                    },
                );

                if i < week_days.len() - 1 {
                    ui.add_space(COLUMN_SPACING);
                }
            }
        });

        let line_y = ui.min_rect().bottom() + 2.0;
        ui.painter().hline(
            ui.min_rect().x_range(),
            line_y,
            Stroke::new(1.0, palette.hour_line),
        );
    }

    /// Fixed-height lane above the timed grid; all-day events render here
    /// instead of as positioned blocks.
    fn render_all_day_lane(
        ui: &mut egui::Ui,
        week_days: &[NaiveDate],
        col_width: f32,
        store: &EventStore,
        palette: &TimeGridPalette,
    ) -> Option<WeekViewAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            ui.allocate_ui_with_layout(
                Vec2::new(TIME_LABEL_WIDTH, ALL_DAY_LANE_HEIGHT),
                egui::Layout::right_to_left(egui::Align::Center),
                |_ui| {},
            );
            ui.add_space(COLUMN_SPACING);

            for (i, date) in week_days.iter().enumerate() {
                let (rect, response) = ui.allocate_exact_size(
                    Vec2::new(col_width, ALL_DAY_LANE_HEIGHT),
                    Sense::click(),
                );

                ui.painter().line_segment(
                    [
                        Pos2::new(rect.left(), rect.top()),
                        Pos2::new(rect.left(), rect.bottom()),
                    ],
                    Stroke::new(1.0, palette.divider),
                );

                let mut hitboxes: Vec<(Rect, &CalendarEvent)> = Vec::new();
                for event in store.all_day_events_for_day(*date) {
                    let bar = Rect::from_min_size(
                        Pos2::new(rect.left() + 2.0, rect.top() + 3.0),
                        Vec2::new(rect.width() - 4.0, rect.height() - 6.0),
                    );
                    let painter = ui.painter().with_clip_rect(rect);
                    painter.rect_filled(bar, 3.0, event_fill(event.color));
                    painter.text(
                        Pos2::new(bar.left() + 5.0, bar.center().y),
                        Align2::LEFT_CENTER,
                        &event.title,
                        FontId::proportional(11.0),
                        Color32::WHITE,
                    );
                    hitboxes.push((bar, event));
                }

                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        if let Some((_, event)) =
                            hitboxes.iter().rev().find(|(bar, _)| bar.contains(pos))
                        {
                            action = Some(WeekViewAction::Edit((*event).clone()));
                        }
                    }
                }

                if i < week_days.len() - 1 {
                    ui.add_space(COLUMN_SPACING);
                }
            }
        });

        action
    }

    #[allow(clippy::too_many_arguments)]
    fn render_time_grid(
        ui: &mut egui::Ui,
        week_days: &[NaiveDate],
        col_width: f32,
        store: &EventStore,
        metrics: &GridMetrics,
        palette: &TimeGridPalette,
        today: NaiveDate,
    ) -> Option<WeekViewAction> {
        let mut action = None;
        let grid_height = metrics.grid_height();
        let mut column_rects: Vec<Rect> = Vec::with_capacity(week_days.len());

        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            Self::render_time_gutter(ui, metrics, palette, grid_height);
            ui.add_space(COLUMN_SPACING);

            for (i, date) in week_days.iter().enumerate() {
                let (rect, response) = ui
                    .allocate_exact_size(Vec2::new(col_width, grid_height), Sense::click());
                column_rects.push(rect);

                Self::paint_column(ui, rect, *date, metrics, palette, today);

                let hitboxes = Self::paint_event_blocks(ui, rect, *date, store, metrics);

                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        if let Some((_, event)) =
                            hitboxes.iter().rev().find(|(hit, _)| hit.contains(pos))
                        {
                            action = Some(WeekViewAction::Edit(event.clone()));
                        } else {
                            let time = metrics.time_at_offset(pos.y - rect.top());
                            action = Some(WeekViewAction::CreateAt(date.and_time(time)));
                        }
                    }
                }

                if i < week_days.len() - 1 {
                    ui.add_space(COLUMN_SPACING);
                }
            }
        });

        Self::paint_now_line(ui, week_days, &column_rects, metrics, palette);

        action
    }

    fn render_time_gutter(
        ui: &mut egui::Ui,
        metrics: &GridMetrics,
        palette: &TimeGridPalette,
        grid_height: f32,
    ) {
        let (rect, _) =
            ui.allocate_exact_size(Vec2::new(TIME_LABEL_WIDTH, grid_height), Sense::hover());

        for row in 0..metrics.visible_hours() {
            let hour = metrics.start_hour() + row;
            let y = rect.top() + row as f32 * metrics.hour_height();
            ui.painter().text(
                Pos2::new(rect.right() - 5.0, y),
                Align2::RIGHT_CENTER,
                format!("{hour:02}:00"),
                FontId::proportional(11.0),
                palette.time_label,
            );
        }
    }

    fn paint_column(
        ui: &mut egui::Ui,
        rect: Rect,
        date: NaiveDate,
        metrics: &GridMetrics,
        palette: &TimeGridPalette,
        today: NaiveDate,
    ) {
        let weekday = date.weekday().num_days_from_sunday();
        let is_weekend = weekday == 0 || weekday == 6;
        let bg = if date == today {
            palette.today_bg
        } else if is_weekend {
            palette.weekend_bg
        } else {
            palette.regular_bg
        };
        ui.painter().rect_filled(rect, 0.0, bg);

        for row in 0..metrics.visible_hours() {
            let y = rect.top() + row as f32 * metrics.hour_height();
            ui.painter().line_segment(
                [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
                Stroke::new(1.0, palette.hour_line),
            );
            let half_y = y + metrics.hour_height() / 2.0;
            ui.painter().line_segment(
                [
                    Pos2::new(rect.left(), half_y),
                    Pos2::new(rect.right(), half_y),
                ],
                Stroke::new(1.0, palette.half_hour_line),
            );
        }

        ui.painter().line_segment(
            [
                Pos2::new(rect.left(), rect.top()),
                Pos2::new(rect.left(), rect.bottom()),
            ],
            Stroke::new(1.0, palette.divider),
        );
    }

    /// Draw the day's timed events as blocks anchored to their start offset.
    /// Overlapping events simply overlap; later ones paint on top and win
    /// the hit test.
    fn paint_event_blocks(
        ui: &mut egui::Ui,
        rect: Rect,
        date: NaiveDate,
        store: &EventStore,
        metrics: &GridMetrics,
    ) -> Vec<(Rect, CalendarEvent)> {
        let mut hitboxes = Vec::new();
        let painter = ui.painter().with_clip_rect(rect);

        for event in store.timed_events_for_day(date) {
            let Some(block) = metrics.event_block(event) else {
                continue;
            };

            let block_rect = Rect::from_min_size(
                Pos2::new(rect.left() + 2.0, rect.top() + block.top + 1.0),
                Vec2::new(rect.width() - 6.0, block.height - 2.0),
            );
            painter.rect_filled(block_rect, 3.0, event_fill(event.color));

            painter.text(
                Pos2::new(block_rect.left() + 5.0, block_rect.top() + 3.0),
                Align2::LEFT_TOP,
                &event.title,
                FontId::proportional(11.0),
                Color32::WHITE,
            );
            if block_rect.height() > 30.0 {
                painter.text(
                    Pos2::new(block_rect.left() + 5.0, block_rect.top() + 17.0),
                    Align2::LEFT_TOP,
                    format!(
                        "{} - {}",
                        event.start.format("%H:%M"),
                        event.end.format("%H:%M")
                    ),
                    FontId::proportional(10.0),
                    Color32::from_gray(235),
                );
            }

            hitboxes.push((block_rect, event.clone()));
        }

        hitboxes
    }

    fn paint_now_line(
        ui: &mut egui::Ui,
        week_days: &[NaiveDate],
        column_rects: &[Rect],
        metrics: &GridMetrics,
        palette: &TimeGridPalette,
    ) {
        let now = Local::now().naive_local();
        let Some(marker) = metrics.now_marker(now, week_days) else {
            return;
        };
        let Some(rect) = column_rects.get(marker.day_index) else {
            return;
        };

        let y = rect.top() + marker.y_offset;
        let painter = ui.painter();
        painter.circle_filled(Pos2::new(rect.left() - 4.0, y), 3.0, palette.now_line);
        painter.line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            Stroke::new(2.0, palette.now_line),
        );
    }
}
