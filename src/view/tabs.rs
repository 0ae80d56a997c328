//! Recent / favorites history panel.
//!
//! Tab bar on top (ratatui `Tabs`), the active list below.

use crate::state::{HistoryTab, ScreenSnapshot};
use crate::view::constants::HISTORY_TABS_HEIGHT;
use crate::view::dropdown::FAVORITE_MARKER;
use crate::view::helpers::{scroll_window_start, truncate_to_width};
use crate::view::styles::ScreenStyles;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

const TAB_ORDER: [HistoryTab; 2] = [HistoryTab::Recent, HistoryTab::Favorites];

fn tab_index(tab: HistoryTab) -> usize {
    match tab {
        HistoryTab::Recent => 0,
        HistoryTab::Favorites => 1,
    }
}

/// Render the tab bar and the active history list into `area`.
pub fn render_history(
    frame: &mut Frame,
    area: Rect,
    snapshot: &ScreenSnapshot,
    focused: bool,
    styles: &ScreenStyles,
) {
    let [bar_area, list_area] =
        Layout::vertical([Constraint::Length(HISTORY_TABS_HEIGHT), Constraint::Min(0)])
            .areas(area);

    let titles: Vec<Line> = TAB_ORDER
        .iter()
        .map(|tab| {
            let count = match tab {
                HistoryTab::Recent => snapshot.recent.len(),
                HistoryTab::Favorites => snapshot.favorites.len(),
            };
            Line::from(format!("{} ({})", tab.title(), count))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("History")
                .border_style(styles.border_for(focused)),
        )
        .highlight_style(styles.tab_active)
        .select(tab_index(snapshot.tab));
    frame.render_widget(tabs, bar_area);

    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .border_style(styles.border_for(focused));

    let items = snapshot.history_items();
    if items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            snapshot.tab.empty_message(),
            styles.placeholder,
        )))
        .block(block);
        frame.render_widget(empty, list_area);
        return;
    }

    let visible = usize::from(list_area.height.saturating_sub(1));
    let start = scroll_window_start(snapshot.history_cursor, items.len(), visible);
    let text_width = usize::from(list_area.width.saturating_sub(2)).saturating_sub(2);

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(i, item)| {
            let marker = if snapshot.tab == HistoryTab::Recent && snapshot.favorites.contains(item)
            {
                Span::styled(FAVORITE_MARKER, styles.favorite_marker)
            } else {
                Span::raw("  ")
            };
            let line = Line::from(vec![marker, Span::raw(truncate_to_width(item.as_str(), text_width))]);
            if focused && i == snapshot.history_cursor {
                line.style(styles.highlight)
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), list_area);
}
