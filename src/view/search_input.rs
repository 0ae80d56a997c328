//! Search input widget.

use crate::view::styles::ScreenStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Shown in an empty, unfocused field.
pub const SEARCH_PLACEHOLDER: &str = "Type a name...";

/// Single-line query field. The cursor always sits at the end of the query.
pub struct SearchInput<'a> {
    query: &'a str,
    focused: bool,
    styles: &'a ScreenStyles,
}

impl<'a> SearchInput<'a> {
    pub fn new(query: &'a str, focused: bool, styles: &'a ScreenStyles) -> Self {
        Self {
            query,
            focused,
            styles,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.query.is_empty() && !self.focused {
            Line::from(Span::styled(SEARCH_PLACEHOLDER, self.styles.placeholder))
        } else if self.focused {
            Line::from(vec![
                Span::raw(self.query),
                Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
            ])
        } else {
            Line::from(self.query)
        };

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Search users")
                    .border_style(self.styles.border_for(self.focused)),
            )
            .render(area, buf);
    }
}
