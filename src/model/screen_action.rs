//! User intents forwarded by the rendering layer.

/// Domain-level intents independent of key bindings.
///
/// These represent what the user wants, not which key they pressed. The mapping
/// from `crossterm::event::KeyEvent` to `ScreenAction` lives in
/// [`KeyBindings`](crate::config::KeyBindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenAction {
    // Search field
    /// Append a character to the query. Default: printable keys in search
    InsertChar(char),
    /// Delete the last character of the query. Default: Backspace
    DeleteChar,
    /// Clear the query. Default: Esc / Ctrl+u in search
    ClearQuery,

    // List navigation
    /// Move the highlight up in the focused list. Default: ↑
    CursorUp,
    /// Move the highlight down in the focused list. Default: ↓
    CursorDown,
    /// Select the highlighted dropdown entry, or open the focused time field. Default: Enter
    Activate,
    /// Flip favorite membership of the highlighted entry. Default: Ctrl+f
    ToggleFavorite,
    /// Remove the highlighted entry from the active history tab. Default: Delete / x
    RemoveHighlighted,

    // Focus and tabs
    /// Cycle focus Search → History → Start → End. Default: Tab
    CycleFocus,
    /// Show the recent selections tab. Default: r in history
    ShowRecent,
    /// Show the favorites tab. Default: f in history
    ShowFavorites,
    /// Toggle between the two history tabs. Default: ←/→ in history
    SwitchTab,
    /// Open the start time picker. Default: F2
    OpenStartPicker,
    /// Open the end time picker. Default: F3
    OpenEndPicker,

    // Time wheel (only while a picker is open)
    /// Step the active wheel column up. Default: ↑/k
    WheelUp,
    /// Step the active wheel column down. Default: ↓/j
    WheelDown,
    /// Move to the next wheel column (hour → minute → period). Default: →/l/Tab
    WheelNextColumn,
    /// Move to the previous wheel column. Default: ←/h/Shift+Tab
    WheelPrevColumn,
    /// Set AM. Default: a
    WheelSetAm,
    /// Set PM. Default: p
    WheelSetPm,
    /// Reseed the wheel from the wall clock. Default: n
    WheelNow,
    /// Commit the wheel into the time value. Default: Enter
    WheelConfirm,
    /// Discard the wheel. Default: Esc
    WheelCancel,

    // Screen
    /// Re-invoke the candidate load (only honored after a failure). Default: Ctrl+l
    Reload,
    /// Invoke the submit action. Default: Ctrl+s
    Submit,
    /// Leave the screen. Default: Ctrl+c / Ctrl+q
    Quit,
}

impl ScreenAction {
    /// Whether this intent is meaningful while the candidate list is loading or failed.
    pub fn allowed_while_blocked(self) -> bool {
        matches!(
            self,
            ScreenAction::Reload | ScreenAction::Submit | ScreenAction::Quit
        )
    }
}
