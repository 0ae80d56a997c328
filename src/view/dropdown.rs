//! Filtered suggestion dropdown.

use crate::model::Candidate;
use crate::view::constants::DROPDOWN_MAX_ROWS;
use crate::view::helpers::{scroll_window_start, truncate_to_width};
use crate::view::styles::ScreenStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Shown when the query matches nothing.
pub const NO_RESULTS: &str = "No results found";

pub const FAVORITE_MARKER: &str = "★ ";
const NO_MARKER: &str = "  ";

/// Rows the dropdown needs for `len` entries, borders included.
pub fn dropdown_height(len: usize) -> u16 {
    let rows = u16::try_from(len).unwrap_or(u16::MAX).clamp(1, DROPDOWN_MAX_ROWS);
    rows + 2
}

/// Render the dropdown over whatever is below the search field.
///
/// `favorite` runs parallel to `items`. `cursor` is `None` when the search
/// field does not have focus.
pub fn render_dropdown(
    frame: &mut Frame,
    area: Rect,
    items: &[Candidate],
    favorite: &[bool],
    cursor: Option<usize>,
    styles: &ScreenStyles,
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.focused_border);

    if items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(NO_RESULTS, styles.placeholder)))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let visible = usize::from(area.height.saturating_sub(2));
    let start = scroll_window_start(cursor.unwrap_or(0), items.len(), visible);
    let text_width = usize::from(area.width.saturating_sub(2)).saturating_sub(NO_MARKER.len());

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(i, item)| {
            let is_favorite = favorite.get(i).copied().unwrap_or(false);
            let marker = if is_favorite {
                Span::styled(FAVORITE_MARKER, styles.favorite_marker)
            } else {
                Span::raw(NO_MARKER)
            };
            let name = truncate_to_width(item.as_str(), text_width);
            let line = Line::from(vec![marker, Span::raw(name)]);
            if cursor == Some(i) {
                line.style(styles.highlight)
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
