//! Screen layout.
//!
//! Search field on top, history panel in the middle, the two time fields at the
//! bottom and a one-line key hint bar. The dropdown and the picker modal are
//! drawn last so they overlay the form.

use crate::state::{Focus, ScreenSnapshot};
use crate::view::constants::{SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT, TIME_FIELD_HEIGHT};
use crate::view::dropdown::{dropdown_height, render_dropdown};
use crate::view::helpers::truncate_to_width;
use crate::view::picker::render_picker;
use crate::view::search_input::SearchInput;
use crate::view::status::{render_error, render_loading};
use crate::view::styles::ScreenStyles;
use crate::view::tabs::render_history;
use crate::view::time_field::TimeField;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key hints for the current focus.
pub fn hint_for(snapshot: &ScreenSnapshot) -> &'static str {
    if snapshot.picker.is_some() {
        return "↑/↓: Change  ←/→: Column  a/p: Period  Enter: OK  Esc: Cancel";
    }
    if snapshot.is_loading() {
        return "Ctrl+q: Quit";
    }
    if snapshot.error_message().is_some() {
        return "Ctrl+l: Retry  Ctrl+q: Quit";
    }
    match snapshot.focus {
        Focus::Search => "Tab: Next  ↑/↓: Move  Enter: Select  Ctrl+f: Favorite  Ctrl+s: Submit",
        Focus::History => "←/→: Tab  Enter: Select  x: Remove  Ctrl+f: Favorite  Tab: Next",
        Focus::StartTime | Focus::EndTime => "Enter: Pick time  F2/F3: Start/End  Tab: Next",
    }
}

/// Render one frame of the screen.
pub fn render_screen(frame: &mut Frame, snapshot: &ScreenSnapshot, styles: &ScreenStyles) {
    let [content_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
            .areas(frame.area());

    if snapshot.is_loading() {
        render_loading(frame, content_area, styles);
    } else if let Some(message) = snapshot.error_message() {
        render_error(frame, content_area, &message, styles);
    } else {
        render_form(frame, content_area, snapshot, styles);
    }

    render_status_bar(frame, status_area, snapshot, styles);

    if let Some(picker) = &snapshot.picker {
        render_picker(frame, picker, styles);
    }
}

fn render_form(frame: &mut Frame, area: Rect, snapshot: &ScreenSnapshot, styles: &ScreenStyles) {
    let [search_area, history_area, times_area] = Layout::vertical([
        Constraint::Length(SEARCH_INPUT_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(TIME_FIELD_HEIGHT),
    ])
    .areas(area);

    let search_focused = snapshot.focus == Focus::Search && snapshot.picker.is_none();
    frame.render_widget(
        SearchInput::new(&snapshot.query, search_focused, styles),
        search_area,
    );

    render_history(
        frame,
        history_area,
        snapshot,
        snapshot.focus == Focus::History,
        styles,
    );

    let [start_area, end_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(times_area);
    frame.render_widget(TimeField::new(&snapshot.start, styles), start_area);
    frame.render_widget(TimeField::new(&snapshot.end, styles), end_area);

    if snapshot.dropdown_visible {
        let below = area.bottom().saturating_sub(search_area.bottom());
        let dropdown_area = Rect {
            x: search_area.x,
            y: search_area.bottom(),
            width: search_area.width,
            height: dropdown_height(snapshot.filtered.len()).min(below),
        };
        let cursor = search_focused.then_some(snapshot.dropdown_cursor);
        render_dropdown(
            frame,
            dropdown_area,
            &snapshot.filtered,
            &snapshot.filtered_favorite,
            cursor,
            styles,
        );
    }
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    snapshot: &ScreenSnapshot,
    styles: &ScreenStyles,
) {
    let hint = truncate_to_width(hint_for(snapshot), usize::from(area.width));
    frame.render_widget(Paragraph::new(Line::from(Span::styled(hint, styles.hint))), area);
}
