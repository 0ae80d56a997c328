//! Full-screen loading and error views shown instead of the form.

use crate::view::styles::ScreenStyles;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub const LOADING_MESSAGE: &str = "Loading users...";
pub const RELOAD_HINT: &str = "Ctrl+l: Retry  Ctrl+q: Quit";

fn centered_band(area: Rect, height: u16) -> Rect {
    let [band] = Layout::vertical([Constraint::Length(height)])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);
    band
}

pub fn render_loading(frame: &mut Frame, area: Rect, styles: &ScreenStyles) {
    let text = Paragraph::new(Line::from(Span::styled(LOADING_MESSAGE, styles.hint)))
        .alignment(Alignment::Center);
    frame.render_widget(text, centered_band(area, 1));
}

pub fn render_error(frame: &mut Frame, area: Rect, message: &str, styles: &ScreenStyles) {
    let lines = vec![
        Line::from(Span::styled(message, styles.error)),
        Line::default(),
        Line::from(Span::styled(RELOAD_HINT, styles.hint)),
    ];
    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, centered_band(area, 3));
}
