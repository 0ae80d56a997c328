//! Integration tests for the terminal shell
//!
//! Drives `TuiApp` over a `TestBackend` with real key events and a real
//! background loader, without requiring an actual terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::sync::Arc;
use std::time::{Duration, Instant};
use worklog_form::config::KeyBindings;
use worklog_form::model::{Candidate, FixedClock, TimeValue};
use worklog_form::source::{CandidateSource, FailingSource, SourceLoader, StaticSource};
use worklog_form::state::{LoadStatus, ScreenController, ScreenSettings};
use worklog_form::view::{ColorConfig, ScreenStyles, TuiApp};

fn app_with(source: impl CandidateSource + 'static) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    let controller = ScreenController::new(ScreenSettings::default())
        .with_clock(FixedClock(TimeValue::new(9, 15).unwrap()));
    TuiApp::new(
        terminal,
        controller,
        SourceLoader::new(Arc::new(source)),
        KeyBindings::default(),
        ScreenStyles::with_color_config(ColorConfig::disabled()),
    )
}

/// Poll the loader the way the event loop does until an outcome lands.
fn pump_until_loaded(app: &mut TuiApp<TestBackend>) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !app.poll_loader() {
        assert!(Instant::now() < deadline, "load never finished");
        std::thread::sleep(Duration::from_millis(5));
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn screen_text(app: &TuiApp<TestBackend>) -> String {
    let buffer = app.terminal().backend().buffer();
    let area = buffer.area();
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn typing_and_selecting_records_recent() {
    let mut app = app_with(StaticSource::new(vec![
        "Alice".into(),
        "Bob".into(),
        "Alicia".into(),
    ]));
    app.start_load();
    pump_until_loaded(&mut app);

    for ch in "ali".chars() {
        assert!(!app.handle_key(key(KeyCode::Char(ch))));
    }
    app.draw().unwrap();
    assert!(screen_text(&app).contains("Alicia"));

    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Enter));

    let controller = app.controller();
    assert_eq!(controller.search().query(), "Alicia");
    assert_eq!(
        controller.search().recent().as_slice(),
        &[Candidate::new("Alicia")]
    );
}

#[test]
fn failed_load_recovers_on_retry_key() {
    let mut app = app_with(FailingSource::new("network down"));
    app.start_load();
    pump_until_loaded(&mut app);
    app.draw().unwrap();
    assert!(screen_text(&app).contains("network down"));

    assert!(!app.handle_key(ctrl('l')));
    assert!(app.controller().search().is_loading());
    pump_until_loaded(&mut app);
    assert!(matches!(
        app.controller().search().status(),
        LoadStatus::Failed(_)
    ));
}

#[test]
fn picker_keys_commit_end_time() {
    let mut app = app_with(StaticSource::new(vec!["Alice".into()]));
    app.start_load();
    pump_until_loaded(&mut app);

    app.handle_key(key(KeyCode::F(3)));
    app.handle_key(key(KeyCode::Char('n')));
    app.handle_key(key(KeyCode::Up));
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.controller().snapshot().end.display, "10:15 AM");
}

#[test]
fn ctrl_q_quits() {
    let mut app = app_with(StaticSource::new(vec!["Alice".into()]));
    assert!(app.handle_key(ctrl('q')));
}
