//! Snapshot tests for the screen renderer
//!
//! Uses insta + ratatui TestBackend to verify rendering output doesn't regress.

use crate::model::{FetchError, FixedClock, ScreenAction, TimeValue};
use crate::state::{Endpoint, ScreenController, ScreenSettings, TimeFieldView};
use crate::view::{
    ColorConfig, LOADING_MESSAGE, NO_RESULTS, RELOAD_HINT, ScreenStyles, TimeField,
    render_screen,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

// ===== Test Helpers =====

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Empty trailing lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

fn styles() -> ScreenStyles {
    ScreenStyles::with_color_config(ColorConfig::disabled())
}

fn controller() -> ScreenController {
    ScreenController::new(ScreenSettings::default())
        .with_clock(FixedClock(TimeValue::new(9, 15).unwrap()))
}

fn ready(names: &[&str]) -> ScreenController {
    let mut screen = controller();
    let ticket = screen.search_mut().begin_load();
    screen
        .search_mut()
        .finish_load(ticket, Ok(names.iter().map(|s| s.to_string()).collect()));
    screen
}

fn render(screen: &ScreenController) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    let snapshot = screen.snapshot();
    let styles = styles();
    terminal
        .draw(|frame| render_screen(frame, &snapshot, &styles))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

fn type_text(screen: &mut ScreenController, text: &str) {
    for ch in text.chars() {
        screen.apply(ScreenAction::InsertChar(ch));
    }
}

// ===== Time field =====

#[test]
fn snapshot_time_field_with_value() {
    let view = TimeFieldView {
        endpoint: Endpoint::Start,
        display: "8:00 AM".to_string(),
        focused: false,
    };
    let styles = styles();
    let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
    terminal
        .draw(|frame| frame.render_widget(TimeField::new(&view, &styles), frame.area()))
        .unwrap();

    insta::assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @r"
    ┌Start Time────────┐
    │8:00 AM           │
    └──────────────────┘
    ");
}

#[test]
fn snapshot_time_field_placeholder() {
    let view = TimeFieldView {
        endpoint: Endpoint::End,
        display: "Select Time".to_string(),
        focused: true,
    };
    let styles = styles();
    let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
    terminal
        .draw(|frame| frame.render_widget(TimeField::new(&view, &styles), frame.area()))
        .unwrap();

    insta::assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @r"
    ┌End Time──────────┐
    │Select Time       │
    └──────────────────┘
    ");
}

// ===== Load states =====

#[test]
fn loading_replaces_form() {
    let mut screen = controller();
    screen.search_mut().begin_load();

    let output = render(&screen);
    assert!(output.contains(LOADING_MESSAGE));
    assert!(!output.contains("Search users"));
}

#[test]
fn unavailable_source_shows_reason_and_retry_hint() {
    let mut screen = controller();
    let ticket = screen.search_mut().begin_load();
    screen
        .search_mut()
        .finish_load(ticket, Err(FetchError::new("network down")));

    let output = render(&screen);
    assert!(output.contains("Failed to fetch users: network down"));
    assert!(output.contains(RELOAD_HINT));
    assert!(!output.contains("Search users"));
}

#[test]
fn empty_source_shows_no_users_message() {
    let mut screen = controller();
    let ticket = screen.search_mut().begin_load();
    screen.search_mut().finish_load(ticket, Ok(Vec::new()));

    assert!(render(&screen).contains("No users found from server"));
}

// ===== Form =====

#[test]
fn ready_form_shows_fields_and_defaults() {
    let output = render(&ready(&["Alice"]));
    assert!(output.contains("Search users"));
    assert!(output.contains("Recent (0)"));
    assert!(output.contains("Favorites (0)"));
    assert!(output.contains("No recent searches"));
    assert!(output.contains("8:00 AM"));
    assert!(output.contains("5:00 PM"));
}

#[test]
fn dropdown_lists_matches_in_source_order() {
    let mut screen = ready(&["Alice", "Bob", "Alicia"]);
    type_text(&mut screen, "ali");

    let output = render(&screen);
    let alice = output.find("Alice").expect("Alice listed");
    let alicia = output.find("Alicia").expect("Alicia listed");
    assert!(alice < alicia);
    assert!(!output.contains("Bob"));
}

#[test]
fn dropdown_says_no_results() {
    let mut screen = ready(&["Alice", "Bob"]);
    type_text(&mut screen, "zz");
    assert!(render(&screen).contains(NO_RESULTS));
}

#[test]
fn single_char_query_shows_no_dropdown() {
    let mut screen = ready(&["Alice"]);
    type_text(&mut screen, "a");
    let output = render(&screen);
    assert!(!output.contains("Alice"));
    assert!(!output.contains(NO_RESULTS));
}

#[test]
fn favorites_tab_lists_favorites() {
    let mut screen = ready(&["Alice", "Bob"]);
    type_text(&mut screen, "bo");
    screen.apply(ScreenAction::ToggleFavorite);
    screen.apply(ScreenAction::ClearQuery);
    screen.apply(ScreenAction::ShowFavorites);

    let output = render(&screen);
    assert!(output.contains("Favorites (1)"));
    assert!(output.contains("Bob"));
}

#[test]
fn empty_favorites_tab_message() {
    let mut screen = ready(&["Alice"]);
    screen.apply(ScreenAction::ShowFavorites);
    assert!(render(&screen).contains("No favorites yet"));
}

#[test]
fn open_picker_is_drawn_over_form() {
    let mut screen = ready(&["Alice"]);
    screen.apply(ScreenAction::OpenStartPicker);

    let output = render(&screen);
    assert!(output.contains("Start Time"));
    assert!(output.contains("Hour"));
    assert!(output.contains("AM"));
    assert!(output.contains("Enter: OK"));
}

#[test]
fn twenty_four_hour_picker_has_no_period_column() {
    let settings = ScreenSettings {
        mode: crate::model::ClockMode::TwentyFourHour,
        ..ScreenSettings::default()
    };
    let mut screen = ScreenController::new(settings);
    let ticket = screen.search_mut().begin_load();
    screen.search_mut().finish_load(ticket, Ok(vec!["Alice".to_string()]));
    screen.apply(ScreenAction::OpenEndPicker);

    let output = render(&screen);
    assert!(output.contains("17"));
    assert!(!output.contains("PM"));
}
