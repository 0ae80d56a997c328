//! Keyboard bindings configuration.

use crate::model::ScreenAction;
use crate::state::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Which part of the screen receives the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyContext {
    /// Search field focused; printable keys edit the query.
    Search,
    /// Recent/favorites list focused.
    History,
    /// One of the two time fields focused (picker closed).
    TimeField,
    /// A time picker modal is open.
    Picker,
}

impl KeyContext {
    pub fn for_screen(focus: Focus, picker_open: bool) -> Self {
        if picker_open {
            return KeyContext::Picker;
        }
        match focus {
            Focus::Search => KeyContext::Search,
            Focus::History => KeyContext::History,
            Focus::StartTime | Focus::EndTime => KeyContext::TimeField,
        }
    }
}

/// Maps keyboard events to screen actions.
///
/// Bindings are looked up in the context table first, then in the table shared
/// by every non-modal context. While a picker is open only the picker table applies.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    screen: HashMap<KeyEvent, ScreenAction>,
    search: HashMap<KeyEvent, ScreenAction>,
    history: HashMap<KeyEvent, ScreenAction>,
    picker: HashMap<KeyEvent, ScreenAction>,
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn ctrl(ch: char) -> KeyEvent {
    key(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn plain(code: KeyCode) -> KeyEvent {
    key(code, KeyModifiers::NONE)
}

impl KeyBindings {
    /// Look up the action for a key event in `context`.
    pub fn get(&self, event: KeyEvent, context: KeyContext) -> Option<ScreenAction> {
        // Terminals report kind/state we don't bind on.
        let event = key(event.code, event.modifiers);

        if context == KeyContext::Picker {
            return self.picker.get(&event).copied();
        }

        let table = match context {
            KeyContext::Search => Some(&self.search),
            KeyContext::History => Some(&self.history),
            KeyContext::TimeField | KeyContext::Picker => None,
        };
        if let Some(action) = table.and_then(|t| t.get(&event)) {
            return Some(*action);
        }
        if let Some(action) = self.screen.get(&event) {
            return Some(*action);
        }

        match (context, event.code) {
            (KeyContext::Search, KeyCode::Char(ch))
                if event.modifiers.difference(KeyModifiers::SHIFT).is_empty() && !ch.is_control() =>
            {
                Some(ScreenAction::InsertChar(ch))
            }
            _ => None,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut screen = HashMap::new();

        // Navigation
        screen.insert(plain(KeyCode::Tab), ScreenAction::CycleFocus);
        screen.insert(plain(KeyCode::Up), ScreenAction::CursorUp);
        screen.insert(plain(KeyCode::Down), ScreenAction::CursorDown);
        screen.insert(plain(KeyCode::Enter), ScreenAction::Activate);
        screen.insert(ctrl('f'), ScreenAction::ToggleFavorite);

        // Time fields
        screen.insert(plain(KeyCode::F(2)), ScreenAction::OpenStartPicker);
        screen.insert(plain(KeyCode::F(3)), ScreenAction::OpenEndPicker);

        // Application controls
        screen.insert(ctrl('l'), ScreenAction::Reload);
        screen.insert(ctrl('s'), ScreenAction::Submit);
        screen.insert(ctrl('c'), ScreenAction::Quit);
        screen.insert(ctrl('q'), ScreenAction::Quit);

        let mut search = HashMap::new();
        search.insert(plain(KeyCode::Backspace), ScreenAction::DeleteChar);
        search.insert(plain(KeyCode::Esc), ScreenAction::ClearQuery);
        search.insert(ctrl('u'), ScreenAction::ClearQuery);

        let mut history = HashMap::new();
        history.insert(plain(KeyCode::Left), ScreenAction::SwitchTab);
        history.insert(plain(KeyCode::Right), ScreenAction::SwitchTab);
        history.insert(plain(KeyCode::Char('r')), ScreenAction::ShowRecent);
        history.insert(plain(KeyCode::Char('f')), ScreenAction::ShowFavorites);
        history.insert(plain(KeyCode::Delete), ScreenAction::RemoveHighlighted);
        history.insert(plain(KeyCode::Char('x')), ScreenAction::RemoveHighlighted);

        let mut picker = HashMap::new();
        picker.insert(plain(KeyCode::Up), ScreenAction::WheelUp);
        picker.insert(plain(KeyCode::Char('k')), ScreenAction::WheelUp);
        picker.insert(plain(KeyCode::Down), ScreenAction::WheelDown);
        picker.insert(plain(KeyCode::Char('j')), ScreenAction::WheelDown);
        picker.insert(plain(KeyCode::Right), ScreenAction::WheelNextColumn);
        picker.insert(plain(KeyCode::Char('l')), ScreenAction::WheelNextColumn);
        picker.insert(plain(KeyCode::Tab), ScreenAction::WheelNextColumn);
        picker.insert(plain(KeyCode::Left), ScreenAction::WheelPrevColumn);
        picker.insert(plain(KeyCode::Char('h')), ScreenAction::WheelPrevColumn);
        picker.insert(
            key(KeyCode::BackTab, KeyModifiers::SHIFT),
            ScreenAction::WheelPrevColumn,
        );
        picker.insert(plain(KeyCode::Char('a')), ScreenAction::WheelSetAm);
        picker.insert(plain(KeyCode::Char('p')), ScreenAction::WheelSetPm);
        picker.insert(plain(KeyCode::Char('n')), ScreenAction::WheelNow);
        picker.insert(plain(KeyCode::Enter), ScreenAction::WheelConfirm);
        picker.insert(plain(KeyCode::Esc), ScreenAction::WheelCancel);
        picker.insert(ctrl('s'), ScreenAction::Submit);
        picker.insert(ctrl('c'), ScreenAction::Quit);
        picker.insert(ctrl('q'), ScreenAction::Quit);

        Self {
            screen,
            search,
            history,
            picker,
        }
    }
}
