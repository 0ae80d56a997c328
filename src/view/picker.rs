//! Time picker modal.
//!
//! The wheel is drawn from the scroll offsets in [`PickerView`]: the value at
//! the offset sits on the middle row, neighbours above and below.

use crate::model::{ClockMode, Period};
use crate::state::{PickerColumn, PickerView, WheelColumn};
use crate::view::constants::{PICKER_CHROME_HEIGHT, PICKER_VISIBLE_ROWS, PICKER_WIDTH};
use crate::view::styles::ScreenStyles;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const COLUMN_WIDTH: u16 = 6;
const FOOTER: &str = "Enter: OK  Esc: Cancel  n: Now";

/// Values shown on each of `visible` rows, `None` past either end of the domain.
pub fn wheel_rows(column: WheelColumn, offset: u32, row_height: u32, visible: usize) -> Vec<Option<u8>> {
    let center = column.index_of(column.value_at_offset(offset, row_height)) as isize;
    let half = (visible / 2) as isize;
    (0..visible as isize)
        .map(|row| {
            let index = center + row - half;
            if index < 0 || index as usize >= column.len() {
                None
            } else {
                Some(column.value_at(index as usize))
            }
        })
        .collect()
}

/// Period column rows: AM above PM, centered on the selection.
fn period_rows(period: Period, visible: usize) -> Vec<Option<Period>> {
    let center: isize = match period {
        Period::Am => 0,
        Period::Pm => 1,
    };
    let half = (visible / 2) as isize;
    (0..visible as isize)
        .map(|row| match center + row - half {
            0 => Some(Period::Am),
            1 => Some(Period::Pm),
            _ => None,
        })
        .collect()
}

/// Modal rectangle, centered in `area`.
pub fn picker_rect(area: Rect) -> Rect {
    let width = PICKER_WIDTH.min(area.width);
    let height = (PICKER_VISIBLE_ROWS + PICKER_CHROME_HEIGHT).min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

fn column_lines<'a>(
    header: &'a str,
    cells: Vec<Option<String>>,
    active: bool,
    styles: &ScreenStyles,
) -> Vec<Line<'a>> {
    let middle = cells.len() / 2;
    let header_style = if active {
        styles.wheel_active_column
    } else {
        Style::default()
    };
    let mut lines = vec![Line::from(Span::styled(header, header_style)).alignment(Alignment::Center)];
    lines.extend(cells.into_iter().enumerate().map(|(row, cell)| {
        let text = cell.unwrap_or_default();
        let style = match (row == middle, active) {
            (true, true) => styles.wheel_selected,
            (true, false) => styles.wheel_active_column,
            _ => Style::default(),
        };
        Line::from(Span::styled(text, style)).alignment(Alignment::Center)
    }));
    lines
}

pub fn render_picker(frame: &mut Frame, picker: &PickerView, styles: &ScreenStyles) {
    let modal_area = picker_rect(frame.area());
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(Line::from(format!(" {} ", picker.endpoint.label())).alignment(Alignment::Center))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles.focused_border);
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let [wheel_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let visible = usize::from(PICKER_VISIBLE_ROWS);
    let hour_column = WheelColumn::Hour(picker.mode);
    let hours = wheel_rows(hour_column, picker.hour_offset, picker.row_height, visible)
        .into_iter()
        .map(|v| v.map(|h| format!("{h:02}")))
        .collect();
    let minutes = wheel_rows(WheelColumn::Minute, picker.minute_offset, picker.row_height, visible)
        .into_iter()
        .map(|v| v.map(|m| format!("{m:02}")))
        .collect();

    let mut columns = vec![
        column_lines("Hour", hours, picker.column == PickerColumn::Hour, styles),
        column_lines("Min", minutes, picker.column == PickerColumn::Minute, styles),
    ];
    if picker.mode == ClockMode::TwelveHour {
        let periods = period_rows(picker.wheel.period(), visible)
            .into_iter()
            .map(|p| p.map(|p| p.to_string()))
            .collect();
        columns.push(column_lines("", periods, picker.column == PickerColumn::Period, styles));
    }

    let areas = Layout::horizontal(vec![Constraint::Length(COLUMN_WIDTH); columns.len()])
        .flex(Flex::Center)
        .spacing(2)
        .split(wheel_area);
    for (lines, area) in columns.into_iter().zip(areas.iter()) {
        frame.render_widget(Paragraph::new(lines), *area);
    }

    frame.render_widget(
        Paragraph::new(FOOTER)
            .style(styles.hint)
            .alignment(Alignment::Center),
        footer_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TimeValue, WheelState};
    use crate::state::Endpoint;

    #[test]
    fn rows_center_on_offset() {
        let rows = wheel_rows(WheelColumn::Minute, 30 * 40, 40, 5);
        assert_eq!(rows, vec![Some(28), Some(29), Some(30), Some(31), Some(32)]);
    }

    #[test]
    fn rows_are_blank_past_domain_edges() {
        let rows = wheel_rows(WheelColumn::Hour(ClockMode::TwelveHour), 0, 40, 5);
        assert_eq!(rows, vec![None, None, Some(1), Some(2), Some(3)]);

        let rows = wheel_rows(WheelColumn::Hour(ClockMode::TwentyFourHour), 23 * 40, 40, 5);
        assert_eq!(rows, vec![Some(21), Some(22), Some(23), None, None]);
    }

    #[test]
    fn period_rows_center_on_selection() {
        assert_eq!(
            period_rows(Period::Pm, 5),
            vec![None, Some(Period::Am), Some(Period::Pm), None, None]
        );
    }

    #[test]
    fn rect_is_centered_and_clamped() {
        let rect = picker_rect(Rect::new(0, 0, 80, 24));
        assert_eq!(rect.width, PICKER_WIDTH);
        assert_eq!(rect.x, (80 - PICKER_WIDTH) / 2);

        let small = picker_rect(Rect::new(0, 0, 20, 5));
        assert_eq!((small.width, small.height), (20, 5));
    }

    #[test]
    fn renders_selected_values() {
        use crate::view::styles::ColorConfig;
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let wheel = WheelState::from_canonical(TimeValue::new(13, 30).unwrap(), ClockMode::TwelveHour);
        let picker = PickerView {
            endpoint: Endpoint::Start,
            mode: ClockMode::TwelveHour,
            wheel,
            column: PickerColumn::Hour,
            hour_offset: WheelColumn::Hour(ClockMode::TwelveHour).offset_for(1, 40),
            minute_offset: WheelColumn::Minute.offset_for(30, 40),
            row_height: 40,
        };
        let styles = ScreenStyles::with_color_config(ColorConfig::disabled());
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|frame| render_picker(frame, &picker, &styles))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Start Time"));
        assert!(content.contains("01"));
        assert!(content.contains("30"));
        assert!(content.contains("PM"));
        assert!(content.contains(FOOTER));
    }
}
