//! Closed time field.

use crate::state::time_model::PLACEHOLDER;
use crate::state::TimeFieldView;
use crate::view::styles::ScreenStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct TimeField<'a> {
    view: &'a TimeFieldView,
    styles: &'a ScreenStyles,
}

impl<'a> TimeField<'a> {
    pub fn new(view: &'a TimeFieldView, styles: &'a ScreenStyles) -> Self {
        Self { view, styles }
    }
}

impl Widget for TimeField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = if self.view.display == PLACEHOLDER {
            Span::styled(self.view.display.as_str(), self.styles.placeholder)
        } else {
            Span::raw(self.view.display.as_str())
        };

        Paragraph::new(Line::from(text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.view.endpoint.label())
                    .border_style(self.styles.border_for(self.view.focused)),
            )
            .render(area, buf);
    }
}
